use crate::assemble::{ConfigAssembler, Environment};
use crate::rules::presets::{default_env, DEFAULT_PARSER};
use crate::rules::{NamedRuleSet, RuleSet};
use serde::Deserialize;

/// Top-level TOML config file structure.
#[derive(Debug, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub lintrc: LintrcSection,
    #[serde(default)]
    pub set: Vec<TomlRuleSet>,
}

/// The `[lintrc]` section.
#[derive(Debug, Default, Deserialize)]
pub struct LintrcSection {
    pub parser: Option<String>,
    pub env: Option<Environment>,
    /// Built-in presets merged before any `[[set]]`, in listed order.
    #[serde(default)]
    pub extends: Vec<String>,
}

/// A single `[[set]]` entry.
#[derive(Debug, Deserialize)]
pub struct TomlRuleSet {
    pub name: String,
    #[serde(default)]
    pub rules: RuleSet,
}

impl LintrcSection {
    /// Build the assembler, falling back to the built-in metadata.
    pub fn to_assembler(&self) -> ConfigAssembler {
        ConfigAssembler::new(
            self.parser.clone().unwrap_or_else(|| DEFAULT_PARSER.to_string()),
            self.env.clone().unwrap_or_else(default_env),
        )
    }
}

impl TomlRuleSet {
    /// Convert to the core `NamedRuleSet` type.
    pub fn to_named(&self) -> NamedRuleSet {
        NamedRuleSet::new(self.name.clone(), self.rules.clone())
    }
}
