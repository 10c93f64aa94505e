use crate::assemble::{ConfigAssembler, ConfigurationRecord, Environment};
use crate::config::{RuleDirective, Severity};
use crate::rules::{NamedRuleSet, RuleSet};
use serde_json::{json, Value};
use std::fmt;

pub const STYLISTIC: &str = "stylistic";
pub const ERROR_PREVENTION: &str = "error-prevention";

/// Built-in presets in the order `recommended` merges them.
pub const PRESET_NAMES: &[&str] = &[STYLISTIC, ERROR_PREVENTION];

pub const DEFAULT_PARSER: &str = "babel-eslint";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    Unknown(String),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::Unknown(name) => write!(
                f,
                "unknown preset: '{}' (available: {})",
                name,
                PRESET_NAMES.join(", ")
            ),
        }
    }
}

impl std::error::Error for PresetError {}

/// Resolve a built-in preset by name.
pub fn builtin(name: &str) -> Result<NamedRuleSet, PresetError> {
    match name {
        STYLISTIC => Ok(NamedRuleSet::new(STYLISTIC, stylistic())),
        ERROR_PREVENTION => Ok(NamedRuleSet::new(ERROR_PREVENTION, error_prevention())),
        _ => Err(PresetError::Unknown(name.to_string())),
    }
}

/// Flags assumed when a config does not set its own: code runs in both hosts.
pub fn default_env() -> Environment {
    let mut env = Environment::new();
    env.insert("browser".into(), true);
    env.insert("node".into(), true);
    env
}

pub fn default_assembler() -> ConfigAssembler {
    ConfigAssembler::new(DEFAULT_PARSER, default_env())
}

/// Stylistic rules followed by error-prevention rules, with default metadata.
pub fn recommended() -> ConfigurationRecord {
    default_assembler().assemble(&[stylistic(), error_prevention()])
}

fn error() -> RuleDirective {
    RuleDirective::Level(Severity::Error)
}

fn error_with(options: Vec<Value>) -> RuleDirective {
    RuleDirective::Configured {
        severity: Severity::Error,
        options,
    }
}

fn errors(ids: &[&str]) -> RuleSet {
    ids.iter().map(|id| (id.to_string(), error())).collect()
}

/// Formatting rules. Intentionally short.
pub fn stylistic() -> RuleSet {
    let mut rules = errors(&[
        "camelcase",
        "comma-spacing",
        "comma-style",
        "curly",
        "eol-last",
        "key-spacing",
        "new-cap",
        "new-parens",
        "no-lonely-if",
        "no-multi-spaces",
        "func-call-spacing",
        "no-trailing-spaces",
        "semi",
        "semi-spacing",
        "space-before-blocks",
        "space-in-parens",
        "space-infix-ops",
        "space-unary-ops",
    ]);
    rules.insert(
        "brace-style".into(),
        error_with(vec![json!("1tbs"), json!({"allowSingleLine": true})]),
    );
    rules.insert("indent".into(), error_with(vec![json!(2)]));
    rules.insert(
        "no-multiple-empty-lines".into(),
        error_with(vec![json!({"max": 2})]),
    );
    rules.insert(
        "quotes".into(),
        error_with(vec![json!("single"), json!({"allowTemplateLiterals": true})]),
    );
    rules
}

/// Rules that catch likely bugs rather than style.
pub fn error_prevention() -> RuleSet {
    let mut rules = errors(&[
        "array-callback-return",
        "block-scoped-var",
        "consistent-return",
        "eqeqeq",
        "guard-for-in",
        "no-array-constructor",
        "no-caller",
        "no-cond-assign",
        "no-const-assign",
        "no-control-regex",
        "no-delete-var",
        "no-dupe-args",
        "no-dupe-class-members",
        "no-dupe-keys",
        "no-duplicate-case",
        "no-empty-character-class",
        "no-empty-pattern",
        "no-eval",
        "no-ex-assign",
        "no-extend-native",
        "no-extra-bind",
        "no-fallthrough",
        "no-func-assign",
        "no-implied-eval",
        "no-invalid-regexp",
        "no-iterator",
        "no-lone-blocks",
        "no-loop-func",
        "no-multi-str",
        "no-native-reassign",
        "no-unneeded-ternary",
        "no-unsafe-negation",
        "no-new-func",
        "no-new-object",
        "no-new-symbol",
        "no-new-wrappers",
        "no-obj-calls",
        "no-octal",
        "no-octal-escape",
        "no-redeclare",
        "no-regex-spaces",
        "no-script-url",
        "no-self-assign",
        "no-self-compare",
        "no-sequences",
        "no-shadow-restricted-names",
        "no-shadow",
        "no-sparse-arrays",
        "no-template-curly-in-string",
        "no-this-before-super",
        "no-throw-literal",
        "no-undef",
        "no-unexpected-multiline",
        "no-unreachable",
        "no-unused-vars",
        "no-useless-computed-key",
        "no-useless-concat",
        "no-useless-constructor",
        "no-useless-escape",
        "no-useless-rename",
        "no-with",
        "radix",
        "require-yield",
        "use-isnan",
        "valid-typeof",
    ]);
    rules.insert(
        "no-mixed-operators".into(),
        error_with(vec![json!({
            "groups": [
                ["&", "|", "^", "~", "<<", ">>", ">>>"],
                ["==", "!=", "===", "!==", ">", ">=", "<", "<="],
                ["&&", "||"],
                ["in", "instanceof"]
            ],
            "allowSamePrecedence": false
        })]),
    );
    rules.insert(
        "no-unused-expressions".into(),
        error_with(vec![json!({"allowShortCircuit": true, "allowTernary": true})]),
    );
    rules.insert("no-use-before-define".into(), error_with(vec![json!("nofunc")]));
    rules.insert("wrap-iife".into(), error_with(vec![json!("any")]));
    rules
}
