use super::*;
use crate::report::test_utils::{acyclic_report, cyclic_report};

#[test]
fn test_json_field_names() {
    let json = render_json(&acyclic_report(), false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["root"], "/repo");
    assert_eq!(value["projectCount"], 2);
    assert_eq!(value["levelCount"], 2);
    assert_eq!(value["levels"][0]["level"], 0);
    assert_eq!(value["levels"][0]["projects"][0]["id"], "/repo/Core/Core.csproj");
    assert_eq!(value["levels"][0]["projects"][0]["name"], "Core");
    assert_eq!(value["levels"][0]["projects"][0]["dialect"], "csharp");
    assert_eq!(
        value["levels"][0]["projects"][0]["targetFramework"],
        "netstandard2.0"
    );
    assert!(value["levels"][0]["projects"][0].get("packages").is_none());
    assert_eq!(value["unresolved"][0]["reference"], "../Ghost/Ghost.csproj");
    assert_eq!(value["stats"]["resolved"], 1);
    assert_eq!(value["stats"]["unresolved"], 1);
    assert_eq!(value["stats"]["levelSizes"], serde_json::json!([1, 1]));
}

#[test]
fn test_json_cycles() {
    let json = render_json(&cyclic_report(), false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value["circular"],
        serde_json::json!(["/repo/A/A.csproj", "/repo/B/B.csproj"])
    );
    assert_eq!(value["blocked"], serde_json::json!(["/repo/Top/Top.csproj"]));
    assert_eq!(value["skipped"][0]["path"], "/repo/Broken/Broken.csproj");
}

#[test]
fn test_json_packages() {
    let json = render_json(&acyclic_report(), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let packages = &value["levels"][1]["projects"][0]["packages"];
    assert_eq!(packages[0]["name"], "Serilog");
    assert_eq!(packages[0]["version"], "3.1.1");
}

#[test]
fn test_yaml_contains_same_fields() {
    let yaml = render_yaml(&cyclic_report(), false).unwrap();

    assert!(yaml.contains("projectCount: 4"));
    assert!(yaml.contains("levelCount: 1"));
    assert!(yaml.contains("circular:"));
    assert!(yaml.contains("/repo/A/A.csproj"));
    assert!(yaml.contains("blocked:"));
}
