//! Tests for the `class` and `property` CLI commands

use crate::common::{assert_contains, assert_valid_json, TestRepo, TEST_LIBRARY};

const PERSON: &str = r#"namespace Demo
{
    public class Person : Entity
    {
        public string Name { get; set; }
        public int Age { get; set; }
    }
}
"#;

const ENTITY: &str = r#"namespace Demo
{
    public class Entity
    {
        public string Id { get; }
    }
}
"#;

// ============================================================================
// CLASS COMMAND
// ============================================================================

#[test]
fn test_class_text_output() {
    let repo = TestRepo::new();
    repo.add_file("Person.cs", PERSON);

    let stdout = repo.run_cli_success(&["class", "Person.cs", "--at", "5:20"]);
    assert_eq!(
        stdout,
        "<StackPanel>\n\
<TextBox Text=\"{x:Bind Name, Mode=TwoWay}\" />\n\
<Slider Minimum=\"0\" Maximum=\"100\" x:Name=\"Age\" Value=\"{x:Bind Age, Mode=TwoWay}\" />\n\
</StackPanel>\n"
    );
}

#[test]
fn test_class_with_additional_file() {
    let repo = TestRepo::new();
    repo.add_file("Person.cs", PERSON).add_file("Entity.cs", ENTITY);

    let stdout = repo.run_cli_success(&["class", "Person.cs", "--at", "3:5", "--with", "Entity.cs"]);
    assert_contains(&stdout, "<TextBlock Text=\"Id\" />");
    assert!(stdout.trim_end().ends_with("<TextBlock Text=\"Id\" />\n</StackPanel>"));
}

#[test]
fn test_class_json_output() {
    let repo = TestRepo::new();
    repo.add_file("Person.cs", PERSON);

    let stdout = repo.run_cli_success(&["class", "Person.cs", "--at", "3:5", "--format", "json"]);
    let json = assert_valid_json(&stdout, "class json");
    assert_eq!(json["name"], "Person");
    assert_eq!(json["output_type"], "Class");
    assert!(json["output"].as_str().unwrap().starts_with("<StackPanel>"));
}

#[test]
fn test_class_byte_offset_position() {
    let repo = TestRepo::new();
    let position = repo.add_marked_file(
        "Order.cs",
        "public class Order\n{\n    public string Descr*iption { get; set; }\n}\n",
    );

    let stdout = repo.run_cli_success(&["class", "Order.cs", "--at", &position.to_string()]);
    assert_contains(&stdout, "{x:Bind Description, Mode=TwoWay}");
}

#[test]
fn test_class_not_found_prints_nothing() {
    let repo = TestRepo::new();
    repo.add_file("Person.cs", PERSON);

    let stdout = repo.run_cli_success(&["class", "Person.cs", "--at", "1:1"]);
    assert!(stdout.is_empty(), "unexpected output: {}", stdout);

    let stdout = repo.run_cli_success(&["class", "Person.cs", "--at", "1:1", "-f", "json"]);
    let json = assert_valid_json(&stdout, "not found json");
    assert_eq!(json["output_type"], "None");
}

#[test]
fn test_class_with_library_manifest() {
    let repo = TestRepo::new();
    repo.add_file(
        "Order.cs",
        "using TestLibrary;\n\npublic class Order : TestClass\n{\n    public int OrderId { get; set; }\n}\n",
    )
    .add_file("lib/TestLibrary.json", TEST_LIBRARY);

    let stdout = repo.run_cli_success(&[
        "class",
        "Order.cs",
        "--at",
        "3:2",
        "--library",
        "lib/TestLibrary.json",
    ]);
    assert_contains(&stdout, "x:Name=\"OrderId\"");
    assert_contains(&stdout, "{x:Bind TestProperty, Mode=TwoWay}");
    assert_contains(&stdout, "{x:Bind BaseTestProperty, Mode=TwoWay}");
}

#[test]
fn test_class_with_custom_profile() {
    let repo = TestRepo::new();
    repo.add_file("Person.cs", PERSON).add_file(
        "grid.json",
        r#"{
  "Name": "Grid",
  "ClassGrouping": "GRID-PLUS-ROWDEFS",
  "FallbackOutput": "<TextBlock Text=\"$name$\" Grid.Row=\"$incint$\" />",
  "SubPropertyOutput": "",
  "Mappings": []
}"#,
    );

    let stdout = repo.run_cli_success(&["class", "Person.cs", "--at", "3:5", "--profile", "grid.json"]);
    assert_eq!(
        stdout,
        "<Grid>\n\
<Grid.RowDefinitions>\n\
<RowDefinition Height=\"Auto\" />\n\
<RowDefinition Height=\"*\" />\n\
</Grid.RowDefinitions>\n\
<TextBlock Text=\"Name\" Grid.Row=\"0\" />\n\
<TextBlock Text=\"Age\" Grid.Row=\"1\" />\n\
</Grid>\n"
    );
}

#[test]
fn test_config_supplies_references_and_exclusions() {
    let repo = TestRepo::new();
    repo.add_file("Person.cs", PERSON)
        .add_file("Entity.cs", ENTITY)
        .add_file(
            "xamlgen.toml",
            r#"
[analysis]
excluded_names = ["Age"]

[references]
source_files = ["Entity.cs"]
"#,
        );

    let stdout = repo.run_cli_success(&["class", "Person.cs", "--at", "3:5", "--config", "xamlgen.toml"]);
    assert!(!stdout.contains("Age"), "Age should be excluded: {}", stdout);
    assert_contains(&stdout, "<TextBlock Text=\"Id\" />");
}

// ============================================================================
// PROPERTY COMMAND
// ============================================================================

#[test]
fn test_property_command() {
    let repo = TestRepo::new();
    repo.add_file("Person.cs", PERSON);

    let stdout = repo.run_cli_success(&["property", "Person.cs", "--at", "6:24"]);
    assert_eq!(
        stdout,
        "<Slider Minimum=\"0\" Maximum=\"100\" x:Name=\"Age\" Value=\"{x:Bind Age, Mode=TwoWay}\" />\n"
    );
}

#[test]
fn test_property_command_json() {
    let repo = TestRepo::new();
    repo.add_file("Person.cs", PERSON);

    let stdout = repo.run_cli_success(&["property", "Person.cs", "--at", "5:24", "-f", "json"]);
    let json = assert_valid_json(&stdout, "property json");
    assert_eq!(json["name"], "Name");
    assert_eq!(json["output_type"], "Property");
}
