use crate::assemble::Assembly;
use crate::cli::toml_config::TomlConfig;
use crate::rules::presets::{self, PresetError};
use crate::rules::NamedRuleSet;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug)]
pub enum LoadError {
    ConfigRead(std::io::Error),
    ConfigParse(toml::de::Error),
    Preset(PresetError),
    GlobParse(globset::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::ConfigRead(e) => write!(f, "failed to read config: {}", e),
            LoadError::ConfigParse(e) => write!(f, "failed to parse config: {}", e),
            LoadError::Preset(e) => write!(f, "failed to resolve preset: {}", e),
            LoadError::GlobParse(e) => write!(f, "invalid glob pattern: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<PresetError> for LoadError {
    fn from(e: PresetError) -> Self {
        LoadError::Preset(e)
    }
}

/// Load a `lintrc.toml` and assemble it: `extends` presets first, then every
/// `[[set]]` in file order.
pub fn load_config(config_path: &Path) -> Result<Assembly, LoadError> {
    let config_text = fs::read_to_string(config_path).map_err(LoadError::ConfigRead)?;
    let assembly = assemble_str(&config_text)?;
    info!(
        path = %config_path.display(),
        rules = assembly.record.rules.len(),
        "loaded config"
    );
    Ok(assembly)
}

/// Assemble config text that has already been read.
pub fn assemble_str(config_text: &str) -> Result<Assembly, LoadError> {
    let toml_config: TomlConfig = toml::from_str(config_text).map_err(LoadError::ConfigParse)?;

    let mut layers: Vec<NamedRuleSet> = Vec::new();
    for name in &toml_config.lintrc.extends {
        layers.push(presets::builtin(name)?);
    }
    layers.extend(toml_config.set.iter().map(|s| s.to_named()));
    debug!(layers = layers.len(), "resolved layers");

    Ok(toml_config.lintrc.to_assembler().assemble_named(&layers))
}

/// The built-in configuration, with provenance for each rule.
pub fn builtin_assembly() -> Assembly {
    let layers = [
        NamedRuleSet::new(presets::STYLISTIC, presets::stylistic()),
        NamedRuleSet::new(presets::ERROR_PREVENTION, presets::error_prevention()),
    ];
    presets::default_assembler().assemble_named(&layers)
}

/// Keep only rules whose id matches one of `patterns`. No patterns keeps all.
pub fn retain_matching(assembly: &Assembly, patterns: &[String]) -> Result<Assembly, LoadError> {
    if patterns.is_empty() {
        return Ok(assembly.clone());
    }
    let set = build_glob_set(patterns)?;

    let mut filtered = assembly.clone();
    filtered.record.rules.retain(|id, _| set.is_match(id.as_str()));
    filtered.provenance.retain(|id, _| set.is_match(id.as_str()));
    filtered.overrides.retain(|o| set.is_match(o.rule_id.as_str()));
    debug!(
        kept = filtered.record.rules.len(),
        total = assembly.record.rules.len(),
        "filtered rules"
    );
    Ok(filtered)
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, LoadError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).map_err(LoadError::GlobParse)?);
    }
    builder.build().map_err(LoadError::GlobParse)
}
