//! Tests for the `profile` CLI command

use crate::common::{assert_contains, assert_valid_json, TestRepo};

#[test]
fn test_show_default_profile() {
    let repo = TestRepo::new();
    let stdout = repo.run_cli_success(&["profile", "show-default"]);
    let json = assert_valid_json(&stdout, "default profile");

    assert_eq!(json["ClassGrouping"], "StackPanel");
    let mappings = json["Mappings"].as_array().unwrap();
    assert_eq!(mappings.len(), 6);
    assert_eq!(mappings[0]["Type"], "string");
    assert_eq!(mappings[0]["IfReadOnly"], true);
}

#[test]
fn test_validate_good_profile() {
    let repo = TestRepo::new();
    repo.add_file(
        "profile.toml",
        r#"
Name = "Forms"
ClassGrouping = "StackPanel"
FallbackOutput = "<TextBlock Text=\"$name$\" />"

[[Mappings]]
Type = "string"
Output = "<TextBox Header=\"$namewithspaces$\" />"
"#,
    );

    let stdout = repo.run_cli_success(&["profile", "validate", "profile.toml"]);
    assert_eq!(stdout, "profile 'Forms' is valid (1 mappings)\n");

    let stdout = repo.run_cli_success(&["profile", "validate", "profile.toml", "-f", "json"]);
    let json = assert_valid_json(&stdout, "validate json");
    assert_eq!(json["valid"], true);
    assert_eq!(json["grouping"], "StackPanel");
}

#[test]
fn test_validate_bad_profile() {
    let repo = TestRepo::new();
    repo.add_file(
        "broken.json",
        r#"{ "Name": "Broken", "Mappings": [ { "Type": "List<", "Output": "<ListView />" } ] }"#,
    );

    let (code, stderr) = repo.run_cli_failure(&["profile", "validate", "broken.json"]);
    assert_eq!(code, Some(5));
    assert_contains(&stderr, "Invalid profile 'Broken'");
    assert_contains(&stderr, "mapping #1");
}
