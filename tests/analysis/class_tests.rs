//! Class-level output: eligibility, mapping order, grouping and counters

use xamlgen_engine::{MemberFilter, Profile};

use crate::common::{assert_class_output, assert_not_found, string_profile, Scenario};

// ============================================================================
// ELIGIBILITY AND MAPPING
// ============================================================================

#[test]
fn test_class_all_property_options() {
    let scenario = Scenario::new(
        r#"
using System.Collections.Generic;

public class Class1
{
    private string _property8;*

    public string Property1 { get; set; }          // include, not read-only
    public string Property2 { get; }               // include, read-only
    protected string Property3 { get; set; }       // excluded
    private string Property4 { get; set; }         // excluded
    public int Property5 { get; set; }             // include
    public List<string> Property6 { get; set; }    // include
    internal string Property7 { get; set; }        // excluded
    public string Property8
    {
        get { return _property8; }
        set { _property8 = value; }
    }
}
"#,
    );

    assert_class_output(
        &scenario.analyze(&Profile::default()),
        "Class1",
        "<StackPanel>\n\
<TextBox Text=\"{x:Bind Property1, Mode=TwoWay}\" />\n\
<TextBlock Text=\"Property2\" />\n\
<Slider Minimum=\"0\" Maximum=\"100\" x:Name=\"Property5\" Value=\"{x:Bind Property5, Mode=TwoWay}\" />\n\
<ItemsControl ItemsSource=\"{x:Bind Property6}\"></ItemsControl>\n\
<TextBox Text=\"{x:Bind Property8, Mode=TwoWay}\" />\n\
</StackPanel>",
    );
}

#[test]
fn test_class_excludes_design_mode_and_static_properties() {
    let scenario = Scenario::new(
        r#"
public class Class1
{
    private bool _flag;*

    public string Property1 { get; set; }
    public bool IsInDesignMode { get; }
    public static bool IsInDesignModeStatic
    {
        get { return _flag; }
        set { _flag = value; }
    }
}
"#,
    );

    assert_class_output(
        &scenario.analyze(&Profile::default()),
        "Class1",
        "<StackPanel>\n<TextBox Text=\"{x:Bind Property1, Mode=TwoWay}\" />\n</StackPanel>",
    );
}

#[test]
fn test_class_excludes_configured_attribute() {
    let scenario = Scenario::new(
        r#"
public class Settings
{*
    public string Title { get; set; }

    [Browsable(false)]
    public string Hidden { get; set; }

    [System.ComponentModel.BrowsableAttribute(false)]
    public string AlsoHidden { get; set; }
}
"#,
    )
    .with_filter(MemberFilter::new(
        vec!["IsInDesignMode".to_string()],
        vec!["Browsable".to_string()],
    ));

    assert_class_output(
        &scenario.analyze(&Profile::default()),
        "Settings",
        "<StackPanel>\n<TextBox Text=\"{x:Bind Title, Mode=TwoWay}\" />\n</StackPanel>",
    );
}

#[test]
fn test_boolean_and_date_mappings() {
    let scenario = Scenario::new(
        r#"
public class Preferences
{*
    public bool ShowToolbar { get; set; }
    public DateTime LastSaved { get; set; }
    public decimal Total { get; set; }
}
"#,
    );

    assert_class_output(
        &scenario.analyze(&Profile::default()),
        "Preferences",
        "<StackPanel>\n\
<ToggleSwitch Header=\"Show Toolbar\" IsOn=\"{x:Bind ShowToolbar, Mode=TwoWay}\" />\n\
<DatePicker Date=\"{x:Bind LastSaved, Mode=TwoWay}\" />\n\
<TextBlock Text=\"FALLBACK_Total\" />\n\
</StackPanel>",
    );
}

#[test]
fn test_primitive_alias_spellings_match() {
    let scenario = Scenario::new(
        r#"
public class Counts
{*
    public Int32 First { get; set; }
    public System.String Second { get; set; }
    public Boolean Third { get; set; }
}
"#,
    );

    let output = scenario.analyze(&Profile::default()).output;
    assert!(output.contains("x:Name=\"First\""), "{}", output);
    assert!(output.contains("<TextBox Text=\"{x:Bind Second, Mode=TwoWay}\" />"), "{}", output);
    assert!(output.contains("IsOn=\"{x:Bind Third, Mode=TwoWay}\""), "{}", output);
}

#[test]
fn test_name_contains_selects_mapping() {
    let mut profile = string_profile("StackPanel", "<TextBox Text=\"{x:Bind $name$}\" />");
    profile.mappings.insert(
        0,
        xamlgen_engine::Mapping::new("string", "<PasswordBox Password=\"{x:Bind $name$}\" />")
            .name_contains("password|PIN"),
    );

    let scenario = Scenario::new(
        r#"
public class Login
{*
    public string UserName { get; set; }
    public string Password { get; set; }
    public string Pin { get; set; }
}
"#,
    );

    assert_class_output(
        &scenario.analyze(&profile),
        "Login",
        "<StackPanel>\n\
<TextBox Text=\"{x:Bind UserName}\" />\n\
<PasswordBox Password=\"{x:Bind Password}\" />\n\
<PasswordBox Password=\"{x:Bind Pin}\" />\n\
</StackPanel>",
    );
}

#[test]
fn test_record_parameters_are_read_only_properties() {
    let scenario = Scenario::new(
        r#"
public record Person(string FirstName, int Age)
{*
    public string Nickname { get; init; }
}
"#,
    );

    assert_class_output(
        &scenario.analyze(&Profile::default()),
        "Person",
        "<StackPanel>\n\
<TextBlock Text=\"FirstName\" />\n\
<Slider Minimum=\"0\" Maximum=\"100\" x:Name=\"Age\" Value=\"{x:Bind Age, Mode=TwoWay}\" />\n\
<TextBlock Text=\"Nickname\" />\n\
</StackPanel>",
    );
}

// ============================================================================
// GROUPING AND COUNTERS
// ============================================================================

#[test]
fn test_class_grouping_with_extra_attributes() {
    let profile = string_profile(
        "StackPanel Orientation=\"Horizontal\"",
        "<TextBlock Text=\"$name$\" />",
    );
    let scenario = Scenario::new(
        r#"
public class Class100 *
{
    public string Property1 { get; set; }
}
"#,
    );

    assert_class_output(
        &scenario.analyze(&profile),
        "Class100",
        "<StackPanel Orientation=\"Horizontal\">\n<TextBlock Text=\"Property1\" />\n</StackPanel>",
    );
}

#[test]
fn test_increment_counter_across_members() {
    let profile = string_profile("Grid", "<TextBlock Text=\"$name$\" Grid.Row=\"$incint$\" />");
    let scenario = Scenario::new(
        r#"
public class Class100*
{
    public string Property1 { get; set; }
    public string Property2 { get; set; }
}
"#,
    );

    assert_class_output(
        &scenario.analyze(&profile),
        "Class100",
        "<Grid>\n\
<TextBlock Text=\"Property1\" Grid.Row=\"0\" />\n\
<TextBlock Text=\"Property2\" Grid.Row=\"1\" />\n\
</Grid>",
    );
}

#[test]
fn test_grid_with_row_definitions() {
    let profile = string_profile(
        "GRID-PLUS-ROWDEFS",
        "<TextBlock Text=\"$name$\" Grid.Row=\"$incint$\" />",
    );
    let scenario = Scenario::new(
        r#"
public class Class100 *
{
    public string Property1 { get; set; }
    public string Property2 { get; set; }
}
"#,
    );

    assert_class_output(
        &scenario.analyze(&profile),
        "Class100",
        "<Grid>\n\
<Grid.RowDefinitions>\n\
<RowDefinition Height=\"Auto\" />\n\
<RowDefinition Height=\"*\" />\n\
</Grid.RowDefinitions>\n\
<TextBlock Text=\"Property1\" Grid.Row=\"0\" />\n\
<TextBlock Text=\"Property2\" Grid.Row=\"1\" />\n\
</Grid>",
    );
}

#[test]
fn test_grid_with_row_and_column_definitions() {
    let profile = string_profile(
        "GRID-PLUS-ROWDEFS-2cols",
        "<TextBlock Text=\"$name$\" Grid.Row=\"$incint$\" />",
    );
    let scenario = Scenario::new(
        r#"
public class Class100 *
{
    public string Property1 { get; set; }
    public string Property2 { get; set; }
}
"#,
    );

    assert_class_output(
        &scenario.analyze(&profile),
        "Class100",
        "<Grid>\n\
<Grid.ColumnDefinitions>\n\
<ColumnDefinition Width=\"Auto\" />\n\
<ColumnDefinition Width=\"*\" />\n\
</Grid.ColumnDefinitions>\n\
<Grid.RowDefinitions>\n\
<RowDefinition Height=\"Auto\" />\n\
<RowDefinition Height=\"*\" />\n\
</Grid.RowDefinitions>\n\
<TextBlock Text=\"Property1\" Grid.Row=\"0\" />\n\
<TextBlock Text=\"Property2\" Grid.Row=\"1\" />\n\
</Grid>",
    );
}

#[test]
fn test_grid_indicators_are_not_case_sensitive() {
    let source = r#"
public class Class100 *
{
    public string Property1 { get; set; }
    public string Property2 { get; set; }
}
"#;
    let template = "<TextBlock Text=\"$name$\" Grid.Row=\"$incint$\" />";

    let upper = Scenario::new(source).analyze(&string_profile("GRID-PLUS-ROWDEFS", template));
    let lower = Scenario::new(source).analyze(&string_profile("grid-plus-rowdefs", template));
    let mixed = Scenario::new(source).analyze(&string_profile("Grid-Plus-RowDefs", template));
    assert_eq!(upper, lower);
    assert_eq!(upper, mixed);

    let upper = Scenario::new(source).analyze(&string_profile("GRID-PLUS-ROWDEFS-2COLS", template));
    let lower = Scenario::new(source).analyze(&string_profile("grid-plus-rowdefs-2cols", template));
    assert_eq!(upper, lower);
    assert!(upper.output.contains("<Grid.ColumnDefinitions>"));
}

#[test]
fn test_repeat_counter_pairs_label_and_editor() {
    let profile = string_profile(
        "GRID-PLUS-ROWDEFS-2COLS",
        "<TextBlock Text=\"$namewithspaces$\" Grid.Row=\"$incint$\" Grid.Column=\"0\" />\r\n<TextBox Text=\"{x:Bind $name$}\" Grid.Row=\"$repint$\" Grid.Column=\"1\" />",
    );
    let scenario = Scenario::new(
        r#"
public class Customer
{*
    public string FirstName { get; set; }
    public string LastName { get; set; }
}
"#,
    );

    let output = scenario.analyze(&profile).output;
    assert!(output.ends_with(
        "<TextBlock Text=\"First Name\" Grid.Row=\"0\" Grid.Column=\"0\" />\n\
<TextBox Text=\"{x:Bind FirstName}\" Grid.Row=\"0\" Grid.Column=\"1\" />\n\
<TextBlock Text=\"Last Name\" Grid.Row=\"1\" Grid.Column=\"0\" />\n\
<TextBox Text=\"{x:Bind LastName}\" Grid.Row=\"1\" Grid.Column=\"1\" />\n\
</Grid>"
    ));
}

// ============================================================================
// CURSOR POSITION
// ============================================================================

#[test]
fn test_cursor_before_class_finds_nothing() {
    let scenario = Scenario::new(
        r#"
*using System;
using Awesome.Namespace;

*
public class Class1
{
    public string Property1 { get; set; }
}
"#,
    );

    for (position, output) in scenario.analyze_each(&Profile::default()) {
        assert!(output.is_empty(), "position {} found {:?}", position, output);
        assert_not_found(&output);
    }
}

#[test]
fn test_cursor_after_class_finds_nothing() {
    let scenario = Scenario::new(
        r#"
using System;

public class Class1
{
    public string Property1 { get; set; }
}
*
// something here after the class has closed
*
"#,
    );

    for (position, output) in scenario.analyze_each(&Profile::default()) {
        assert!(output.is_empty(), "position {} found {:?}", position, output);
    }
}

fn assert_single_property_everywhere(marked: &str) {
    let scenario = Scenario::new(marked);
    for (position, output) in scenario.analyze_each(&Profile::default()) {
        assert_eq!(output.name, "Class1", "position {}", position);
        assert_eq!(
            output.output,
            "<StackPanel>\n<TextBox Text=\"{x:Bind Property1, Mode=TwoWay}\" />\n</StackPanel>",
            "position {}",
            position
        );
    }
}

#[test]
fn test_cursor_in_method() {
    assert_single_property_everywhere(
        r#"
public class Class1
{
    public string Property1 { get; set; }

  *  public bool IsSpecial(string someValue)
    {
        return true;
    }*
}
"#,
    );
}

#[test]
fn test_cursor_in_field() {
    assert_single_property_everywhere(
        r#"
public class Class1
{
 *   private int _someField = 3;*

    public string Property1 { get; set; }
}
"#,
    );
}

#[test]
fn test_cursor_in_constructor() {
    assert_single_property_everywhere(
        r#"
public class Class1
{
    public string Property1 { get; set; }

  *  public Class1()
    {
        Property1 = "set";
    }*
}
"#,
    );
}

#[test]
fn test_other_classes_in_file_are_ignored() {
    let scenario = Scenario::new(
        r#"
public class Cla*ss1
{
    public string Property1 { get; set; }
    public string Property2 { get; set; }
}

public class Class2
{
    public string HopefullyIgnoredProperty { get; set; }
}
"#,
    );

    assert_class_output(
        &scenario.analyze(&Profile::default()),
        "Class1",
        "<StackPanel>\n\
<TextBox Text=\"{x:Bind Property1, Mode=TwoWay}\" />\n\
<TextBox Text=\"{x:Bind Property2, Mode=TwoWay}\" />\n\
</StackPanel>",
    );
}

#[test]
fn test_nested_class_wins_over_outer() {
    let scenario = Scenario::new(
        r#"
namespace App.ViewModels
{
    public class Outer
    {
        public string OuterProperty { get; set; }

        public class Inner
        {
            public string Inner*Property { get; set; }
        }
    }
}
"#,
    );

    assert_class_output(
        &scenario.analyze(&Profile::default()),
        "Inner",
        "<StackPanel>\n<TextBox Text=\"{x:Bind InnerProperty, Mode=TwoWay}\" />\n</StackPanel>",
    );
}

// ============================================================================
// NO ELIGIBLE PROPERTIES
// ============================================================================

fn assert_no_properties_everywhere(marked: &str) {
    let expected = "<StackPanel>\n<!-- No accessible properties when copying as XAML -->\n</StackPanel>";
    let scenario = Scenario::new(marked);
    for (position, output) in scenario.analyze_each(&Profile::default()) {
        assert_class_output(&output, "Class1", expected);
        let _ = position;
    }
}

#[test]
fn test_class_with_no_public_properties() {
    assert_no_properties_everywhere(
        r#"
public class C*lass*1
{
    private string Property1 { get; set; }
    protected string Property2 { get; set; }
    internal string Property3 { get; set; }
}
"#,
    );
}

#[test]
fn test_class_with_commented_out_properties() {
    assert_no_properties_everywhere(
        r#"
*public class Class1
{
    // public string Property1 { get; set; }
    // public string Property2 { get; set; }
}*
"#,
    );
}

#[test]
fn test_class_with_no_properties() {
    assert_no_properties_everywhere(
        r#"
*public class Class1
{
}*
"#,
    );
}
