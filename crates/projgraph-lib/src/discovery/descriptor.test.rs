// Tests for MSBuild descriptor parsing

use super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SDK_PROJECT: &str = r#"<Project Sdk="Microsoft.NET.Sdk">

  <PropertyGroup>
    <OutputType>Exe</OutputType>
    <TargetFramework>net8.0</TargetFramework>
    <Nullable>enable</Nullable>
  </PropertyGroup>

  <ItemGroup>
    <ProjectReference Include="..\Core\Core.csproj" />
    <PackageReference Include="Serilog" Version="3.1.1" />
    <ProjectReference Include="../Data/Data.csproj" />
  </ItemGroup>

  <ItemGroup Condition="'$(Configuration)' == 'Debug'">
    <PackageReference Include="Microsoft.Extensions.Logging">
      <Version>8.0.0</Version>
    </PackageReference>
    <PackageReference Include="Unpinned" />
  </ItemGroup>

</Project>
"#;

fn app_path() -> PathBuf {
    PathBuf::from("/repo/src/App/App.csproj")
}

#[test]
fn test_parse_sdk_project() {
    let unit = parse_descriptor_str(&app_path(), Dialect::CSharp, SDK_PROJECT).unwrap();

    assert_eq!(unit.id.as_str(), "/repo/src/App/App.csproj");
    assert_eq!(unit.display_name, "App");
    assert_eq!(unit.dialect, Dialect::CSharp);
    assert_eq!(unit.target_framework.as_deref(), Some("net8.0"));
    assert_eq!(
        unit.declared_references,
        vec![r"..\Core\Core.csproj", "../Data/Data.csproj"]
    );
    assert_eq!(
        unit.package_references,
        vec![
            PackageReference::new("Serilog", Some("3.1.1".to_string())),
            PackageReference::new("Microsoft.Extensions.Logging", Some("8.0.0".to_string())),
            PackageReference::new("Unpinned", None),
        ]
    );
}

#[test]
fn test_parse_multi_targeting_project() {
    let xml = r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFrameworks>net6.0;net8.0</TargetFrameworks>
  </PropertyGroup>
</Project>"#;

    let unit = parse_descriptor_str(&app_path(), Dialect::CSharp, xml).unwrap();
    assert_eq!(unit.target_framework.as_deref(), Some("net6.0;net8.0"));
    assert!(unit.declared_references.is_empty());
}

#[test]
fn test_parse_conditional_duplicate_properties() {
    let xml = r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFramework Condition="'$(X)'==''">net8.0</TargetFramework>
    <Nullable>enable</Nullable>
    <TargetFramework Condition="'$(X)'=='2'">net6.0</TargetFramework>
  </PropertyGroup>
  <ItemGroup>
    <ProjectReference Include="../B/B.csproj" />
  </ItemGroup>
</Project>"#;

    let unit = parse_descriptor_str(&app_path(), Dialect::CSharp, xml).unwrap();
    assert_eq!(unit.target_framework.as_deref(), Some("net8.0"));
    assert_eq!(unit.declared_references, vec!["../B/B.csproj"]);
}

#[test]
fn test_parse_legacy_vb_project() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="15.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <Import Project="$(MSBuildExtensionsPath)\$(MSBuildToolsVersion)\Microsoft.Common.props" />
  <PropertyGroup>
    <Configuration Condition=" '$(Configuration)' == '' ">Debug</Configuration>
    <TargetFrameworkVersion>v4.7.2</TargetFrameworkVersion>
  </PropertyGroup>
  <ItemGroup>
    <Reference Include="System" />
    <Compile Include="Module1.vb" />
  </ItemGroup>
  <ItemGroup>
    <ProjectReference Include="..\Shared\Shared.vbproj">
      <Project>{5D6C1B7A-0000-0000-0000-000000000000}</Project>
      <Name>Shared</Name>
    </ProjectReference>
  </ItemGroup>
</Project>"#;

    let path = PathBuf::from("/repo/legacy/Interop/Interop.vbproj");
    let unit = parse_descriptor_str(&path, Dialect::VisualBasic, xml).unwrap();

    assert_eq!(unit.dialect, Dialect::VisualBasic);
    assert_eq!(unit.target_framework.as_deref(), Some("v4.7.2"));
    assert_eq!(unit.declared_references, vec![r"..\Shared\Shared.vbproj"]);
}

#[test]
fn test_parse_strips_byte_order_mark() {
    let xml = "\u{feff}<Project><PropertyGroup><TargetFramework>net8.0</TargetFramework></PropertyGroup></Project>";
    let unit = parse_descriptor_str(&app_path(), Dialect::CSharp, xml).unwrap();
    assert_eq!(unit.target_framework.as_deref(), Some("net8.0"));
}

#[test]
fn test_empty_includes_are_ignored() {
    let xml = r#"<Project>
  <ItemGroup>
    <ProjectReference Include="" />
    <ProjectReference Include="  ../Core/Core.csproj  " />
  </ItemGroup>
</Project>"#;

    let unit = parse_descriptor_str(&app_path(), Dialect::CSharp, xml).unwrap();
    assert_eq!(unit.declared_references, vec!["../Core/Core.csproj"]);
}

#[test]
fn test_malformed_xml_is_a_parse_error() {
    let result = parse_descriptor_str(&app_path(), Dialect::CSharp, "<Project><ItemGroup></Project>");
    assert!(matches!(result, Err(DescriptorError::ParseFailed { .. })));
}

#[test]
fn test_parse_descriptor_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Lib.vbproj");
    fs::write(&path, SDK_PROJECT).unwrap();

    let unit = parse_descriptor(&path).unwrap();
    assert_eq!(unit.dialect, Dialect::VisualBasic);
    assert_eq!(unit.display_name, "Lib");
    assert_eq!(unit.declared_references.len(), 2);
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let result = parse_descriptor(Path::new("/repo/app.fsproj"));
    assert!(matches!(result, Err(DescriptorError::UnsupportedDialect { .. })));
}

#[test]
fn test_missing_file_is_a_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = parse_descriptor(&temp_dir.path().join("Gone.csproj"));
    assert!(matches!(result, Err(DescriptorError::ReadFailed { .. })));
}
