use super::*;
use std::fs;
use tempfile::TempDir;

fn write(root: &std::path::Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_zero_jobs_is_rejected() {
    assert!(matches!(
        DescriptorLoader::new(0),
        Err(DiscoveryError::InvalidJobCount { count: 0 })
    ));
}

#[tokio::test]
async fn test_load_preserves_input_order() {
    let temp_dir = TempDir::new().unwrap();
    let paths: Vec<PathBuf> = (0..12)
        .map(|i| {
            write(
                temp_dir.path(),
                &format!("P{i:02}/P{i:02}.csproj"),
                "<Project><PropertyGroup><TargetFramework>net8.0</TargetFramework></PropertyGroup></Project>",
            )
        })
        .collect();

    let loader = DescriptorLoader::new(3).unwrap();
    let outcome = loader.load(paths.clone()).await.unwrap();

    assert!(outcome.skipped.is_empty());
    let loaded: Vec<PathBuf> = outcome
        .units
        .iter()
        .map(|u| u.id.as_path().to_path_buf())
        .collect();
    assert_eq!(loaded, paths);
}

#[tokio::test]
async fn test_malformed_descriptor_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let good = write(temp_dir.path(), "Good/Good.csproj", "<Project />");
    let bad = write(temp_dir.path(), "Bad/Bad.csproj", "<Project><ItemGroup>");

    let loader = DescriptorLoader::new(2).unwrap();
    let outcome = loader.load(vec![bad.clone(), good]).await.unwrap();

    assert_eq!(outcome.units.len(), 1);
    assert_eq!(outcome.units[0].display_name, "Good");
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].path, bad);
    assert!(!outcome.skipped[0].reason.is_empty());
}

#[tokio::test]
async fn test_load_empty_batch() {
    let loader = DescriptorLoader::new(1).unwrap();
    let outcome = loader.load(Vec::new()).await.unwrap();
    assert!(outcome.units.is_empty());
    assert!(outcome.skipped.is_empty());
}
