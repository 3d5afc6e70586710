use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use clap::Parser;
use prodcat_catalog::{IntegrityPolicy, NO_MATCHING_MESSAGE};
use prodcat_cli::{Cli, Config, OutputFormat};

/// Fixture directory under the system temp dir, removed on drop.
struct FixtureDir {
    path: PathBuf,
}

impl FixtureDir {
    fn create(name: &str, users: &str, categories: &str, products: &str) -> Self {
        let path = std::env::temp_dir().join(format!("prodcat-{}-{}", name, std::process::id()));
        fs::create_dir_all(&path).expect("failed to create fixture dir");
        fs::write(path.join("users.json"), users).unwrap();
        fs::write(path.join("categories.json"), categories).unwrap();
        fs::write(path.join("products.json"), products).unwrap();
        Self { path }
    }
}

impl Drop for FixtureDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run(args: &[&str], config: &Config, input: &str) -> String {
    let mut argv = vec!["prodcat"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("invalid arguments");
    let config = config.clone().with_overrides(&cli.global);

    let mut output = Vec::new();
    prodcat_cli::run(cli, &config, Cursor::new(input.to_string()), &mut output)
        .expect("run failed");
    String::from_utf8(output).unwrap()
}

fn milk_dir(name: &str) -> FixtureDir {
    FixtureDir::create(
        name,
        r#"[{"id":1,"name":"Alice","sex":"f"}]"#,
        r#"[{"id":1,"title":"Dairy","icon":"🥛","ownerId":1}]"#,
        r#"[{"id":1,"name":"Milk","categoryId":1}]"#,
    )
}

#[test]
fn default_command_shows_every_embedded_product() {
    let out = run(&[], &Config::default(), "");
    let lines: Vec<_> = out.lines().collect();

    assert_eq!(lines[0], r#"user: All | search: "" | categories: All"#);
    // summary + header + rule + 12 rows
    assert_eq!(lines.len(), 15);
    assert!(lines[3].starts_with("1  | Milk"));
}

#[test]
fn milk_scenario_from_a_data_directory() {
    let dir = milk_dir("milk");
    let config = Config {
        data_dir: Some(dir.path.clone()),
        ..Config::default()
    };

    let out = run(&["show"], &config, "");
    assert!(out.contains("1  | Milk    | 🥛 - Dairy | Alice"));

    let out = run(&["show", "--search", "milk"], &config, "");
    assert!(out.contains("Milk"));

    let out = run(&["show", "--search", "bread"], &config, "");
    assert_eq!(out.lines().nth(1), Some(NO_MATCHING_MESSAGE));
}

#[test]
fn json_format_flag_overrides_config() {
    let config = Config {
        format: OutputFormat::Text,
        ..Config::default()
    };
    let out = run(&["--format", "json", "show", "--category", "4"], &config, "");
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    let rows = value["body"]["rows"].as_array().unwrap();
    let names: Vec<_> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Laptop", "Headphones"]);
    assert_eq!(value["all_categories_active"], false);
}

#[test]
fn skip_policy_hides_dangling_products() {
    let dir = FixtureDir::create(
        "dangling",
        r#"[{"id":1,"name":"Alice","sex":"f"}]"#,
        r#"[{"id":1,"title":"Dairy","icon":"🥛","ownerId":1}]"#,
        r#"[{"id":1,"name":"Milk","categoryId":1},{"id":2,"name":"Ghost","categoryId":9}]"#,
    );
    let config = Config {
        data_dir: Some(dir.path.clone()),
        ..Config::default()
    };

    let kept = run(&["show"], &config, "");
    assert!(kept.contains("2  | Ghost   | Unknown category | Unknown user"));

    let skipped = run(&["--integrity-policy", "skip", "show"], &config, "");
    assert!(!skipped.contains("Ghost"));
    assert!(skipped.contains("Milk"));

    let config = Config {
        integrity_policy: IntegrityPolicy::Skip,
        ..config
    };
    assert!(!run(&["show"], &config, "").contains("Ghost"));
}

#[test]
fn interactive_session_applies_commands_in_order() {
    let input = "user 2\ncategory 3\nsearch AN\nbogus\nuser 99\nreset\nquit\nsearch never-read\n";
    let out = run(&["interactive"], &Config::default(), input);

    let summaries: Vec<_> = out.lines().filter(|l| l.starts_with("user: ")).collect();
    assert_eq!(
        summaries,
        vec![
            r#"user: All | search: "" | categories: All"#,
            r#"user: Anna | search: "" | categories: All"#,
            r#"user: Anna | search: "" | categories: Fruits"#,
            r#"user: Anna | search: "AN" | categories: Fruits"#,
            r#"user: All | search: "" | categories: All"#,
        ]
    );
    assert!(out.contains("error: unknown command 'bogus' (type 'help')"));
    assert!(out.contains("error: user 99 not found"));
    assert!(!out.contains("never-read"));
}

#[test]
fn missing_data_directory_fails_with_context() {
    let config = Config {
        data_dir: Some(PathBuf::from("/nonexistent/prodcat")),
        ..Config::default()
    };
    let cli = Cli::try_parse_from(["prodcat"]).unwrap();
    let err = prodcat_cli::run(cli, &config, Cursor::new(String::new()), &mut Vec::new()).unwrap_err();

    assert!(err.to_string().starts_with("failed to load reference data from"));
}

#[test]
fn interactive_search_keeps_spaces_as_typed() {
    let out = run(&["interactive"], &Config::default(), "search  an\nsearch an\n");
    let lines: Vec<_> = out.lines().collect();

    let spaced = lines.iter().position(|l| *l == r#"user: All | search: " an" | categories: All"#);
    let spaced = spaced.expect("spaced search summary missing");
    assert_eq!(lines[spaced + 1], NO_MATCHING_MESSAGE);

    let plain = lines.iter().position(|l| *l == r#"user: All | search: "an" | categories: All"#);
    let plain = plain.expect("plain search summary missing");
    assert!(lines[plain + 1].starts_with("ID"));
    assert!(lines[plain + 3].contains("Banana"));
}
