use super::*;
use std::fs;
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "<Project />").unwrap();
    path
}

#[test]
fn test_discovers_both_dialects_recursively() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "src/App/App.csproj");
    touch(temp_dir.path(), "src/Core/Core.csproj");
    touch(temp_dir.path(), "legacy/Interop/Interop.vbproj");
    touch(temp_dir.path(), "README.md");
    touch(temp_dir.path(), "tools/Tool.fsproj");

    let discovery = discover(temp_dir.path()).unwrap();
    let names: Vec<String> = discovery
        .descriptors
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["Interop.vbproj", "App.csproj", "Core.csproj"]);
    assert!(discovery.descriptors.iter().all(|p| p.is_absolute()));
    assert!(discovery.descriptors.iter().all(|p| p.starts_with(&discovery.root)));
}

#[test]
fn test_build_output_and_hidden_directories_are_pruned() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "App/App.csproj");
    touch(temp_dir.path(), "App/bin/Debug/App.csproj");
    touch(temp_dir.path(), "App/obj/App.csproj");
    touch(temp_dir.path(), "App/OBJ/Copy.csproj");
    touch(temp_dir.path(), ".git/Hidden.csproj");
    touch(temp_dir.path(), "web/node_modules/pkg/Pkg.csproj");

    let discovery = discover(temp_dir.path()).unwrap();
    assert_eq!(discovery.descriptors.len(), 1);
    assert!(discovery.descriptors[0].ends_with("App/App.csproj"));
}

#[test]
fn test_uppercase_extension_is_discovered() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "Old/Old.VBPROJ");

    let discovery = discover(temp_dir.path()).unwrap();
    assert_eq!(discovery.descriptors.len(), 1);
}

#[test]
fn test_empty_directory_yields_no_descriptors() {
    let temp_dir = TempDir::new().unwrap();
    let discovery = discover(temp_dir.path()).unwrap();
    assert!(discovery.descriptors.is_empty());
}

#[test]
fn test_missing_root_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = discover(&temp_dir.path().join("does-not-exist"));
    assert!(matches!(result, Err(DiscoveryError::RootUnreadable { .. })));
}

#[test]
fn test_file_root_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let file = touch(temp_dir.path(), "App.csproj");
    let result = discover(&file);
    assert!(matches!(result, Err(DiscoveryError::NotADirectory { .. })));
}
