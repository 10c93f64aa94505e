use lintrc::cli::format::{render_json, write_json};
use lintrc::load::{self, LoadError};
use lintrc::rules::presets;
use lintrc::Severity;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("lintrc.toml");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn loads_layers_in_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[lintrc]
parser = "espree"
extends = ["error-prevention"]

[lintrc.env]
browser = true

[[set]]
name = "team"
[set.rules]
eqeqeq = ["error", "smart"]
no-console = "warn"

[[set]]
name = "project"
[set.rules]
eqeqeq = "off"
"#,
    );

    let assembly = load::load_config(&path).unwrap();
    let record = &assembly.record;

    assert_eq!(record.parser, "espree");
    assert_eq!(record.env.len(), 1);
    assert_eq!(record.rules.len(), presets::error_prevention().len() + 1);
    assert_eq!(record.rules["eqeqeq"].severity(), Severity::Off);
    assert!(record.rules["eqeqeq"].options().is_empty());
    assert_eq!(record.rules["no-console"].severity(), Severity::Warn);

    assert_eq!(assembly.source_of("eqeqeq"), Some("project"));
    let chain: Vec<(&str, &str)> = assembly
        .overrides_of("eqeqeq")
        .map(|o| (o.replaced.as_str(), o.winner.as_str()))
        .collect();
    assert_eq!(chain, vec![("error-prevention", "team"), ("team", "project")]);
}

#[test]
fn emitted_json_matches_builtin_export() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[lintrc]\nextends = [\"stylistic\", \"error-prevention\"]\n");

    let assembly = load::load_config(&path).unwrap();
    assert_eq!(assembly.record, presets::recommended());

    let value: serde_json::Value =
        serde_json::from_str(&render_json(&assembly.record).unwrap()).unwrap();
    assert_eq!(value["env"], json!({"browser": true, "node": true}));
    assert_eq!(value["rules"]["no-use-before-define"], json!([2, "nofunc"]));
    assert_eq!(
        value["rules"]["no-unused-expressions"],
        json!([2, {"allowShortCircuit": true, "allowTernary": true}])
    );
}

#[test]
fn written_config_matches_recommended() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join(".eslintrc.json");
    write_json(&presets::recommended(), &out).unwrap();

    let written: lintrc::ConfigurationRecord =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written, presets::recommended());
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = load::load_config(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, LoadError::ConfigRead(_)));
    assert!(err.to_string().starts_with("failed to read config"));
}

#[test]
fn malformed_directive_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[[set]]\nname = \"x\"\n[set.rules]\nsemi = []\n");
    let err = load::load_config(&path).unwrap_err();
    assert!(matches!(err, LoadError::ConfigParse(_)));
}
