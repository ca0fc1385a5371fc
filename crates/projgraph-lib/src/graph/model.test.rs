use super::*;

#[test]
fn test_dialect_from_extension() {
    assert_eq!(
        Dialect::from_path(Path::new("/repo/Core/Core.csproj")),
        Some(Dialect::CSharp)
    );
    assert_eq!(
        Dialect::from_path(Path::new("/repo/Legacy/Legacy.VBPROJ")),
        Some(Dialect::VisualBasic)
    );
    assert_eq!(Dialect::from_path(Path::new("/repo/app.fsproj")), None);
    assert_eq!(Dialect::from_path(Path::new("/repo/Makefile")), None);
}

#[test]
fn test_unit_display_name_is_file_stem() {
    let unit = Unit::new("/repo/src/Api/Company.Api.csproj", Dialect::CSharp);
    assert_eq!(unit.display_name, "Company.Api");
    assert_eq!(unit.directory(), Some(Path::new("/repo/src/Api")));
    assert_eq!(unit.id.file_name(), Some("Company.Api.csproj"));
}

#[test]
fn test_unit_builder_keeps_reference_order() {
    let unit = Unit::new("/repo/App/App.csproj", Dialect::CSharp)
        .with_reference("../Core/Core.csproj")
        .with_reference("../Data/Data.csproj")
        .with_target_framework("net8.0");

    assert_eq!(
        unit.declared_references,
        vec!["../Core/Core.csproj", "../Data/Data.csproj"]
    );
    assert_eq!(unit.target_framework.as_deref(), Some("net8.0"));
}

#[test]
fn test_reference_resolved_flag_tracks_target() {
    let resolved = Reference::resolved("../Core/Core.csproj", UnitId::new("/repo/Core/Core.csproj"));
    assert!(resolved.is_resolved());
    assert_eq!(
        resolved.resolved_unit_id().map(UnitId::as_str),
        Some("/repo/Core/Core.csproj")
    );

    let unresolved = Reference::unresolved("../Missing/Missing.csproj");
    assert!(!unresolved.is_resolved());
    assert!(unresolved.resolved_unit_id().is_none());
}

#[test]
fn test_empty_unit_id_detection() {
    assert!(UnitId::new("").is_empty());
    assert!(UnitId::new("   ").is_empty());
    assert!(!UnitId::new("/repo/A.csproj").is_empty());
}
