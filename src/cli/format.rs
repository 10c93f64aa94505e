use crate::assemble::{Assembly, ConfigurationRecord, Override};
use crate::config::Severity;
use crate::rules::presets;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warn => "\x1b[33mwarn \x1b[0m",
        Severity::Off => "\x1b[90moff  \x1b[0m",
    }
}

/// Serialize the record in the layout the consuming linter reads.
pub fn render_json(record: &ConfigurationRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}

/// Print the record as JSON.
pub fn print_json(record: &ConfigurationRecord) -> Result<(), serde_json::Error> {
    println!("{}", render_json(record)?);
    Ok(())
}

/// Write the record as JSON to `path`, newline-terminated.
pub fn write_json(record: &ConfigurationRecord, path: &Path) -> io::Result<()> {
    let text = render_json(record)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, text + "\n")
}

/// Print rules grouped by the layer that supplied them, with ANSI colors.
pub fn print_pretty(assembly: &Assembly) {
    let record = &assembly.record;
    let env: Vec<&str> = record
        .env
        .iter()
        .filter(|(_, on)| **on)
        .map(|(name, _)| name.as_str())
        .collect();

    println!(
        "\x1b[1mparser\x1b[0m {}  \x1b[1menv\x1b[0m {}",
        record.parser,
        if env.is_empty() { "-".to_string() } else { env.join(", ") }
    );

    if record.rules.is_empty() {
        println!("\x1b[33m!\x1b[0m No rules configured");
        return;
    }

    // Group rules by source layer
    let mut by_layer: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for id in record.rules.keys() {
        let layer = assembly.source_of(id).unwrap_or("-");
        by_layer.entry(layer).or_default().push(id.as_str());
    }

    for (layer, ids) in &by_layer {
        println!("\n\x1b[4m{}\x1b[0m", layer);
        for id in ids {
            let directive = &record.rules[*id];
            let options: Vec<String> = directive
                .options()
                .iter()
                .map(|o| o.to_string())
                .collect();
            println!(
                "  {} \x1b[90m{:<30}\x1b[0m {}",
                severity_label(directive.severity()),
                id,
                options.join(" ")
            );
        }
    }

    let count = |s: Severity| record.rules.values().filter(|d| d.severity() == s).count();
    println!(
        "\n\x1b[1m{} rules\x1b[0m ({} error, {} warn, {} off, {} overridden)",
        record.rules.len(),
        count(Severity::Error),
        count(Severity::Warn),
        count(Severity::Off),
        assembly.overrides.len()
    );
}

/// Describe how `rule_id` ended up in the record. Returns false if it is absent.
pub fn print_explain(assembly: &Assembly, rule_id: &str) -> bool {
    let directive = match assembly.record.rules.get(rule_id) {
        Some(d) => d,
        None => {
            println!("\x1b[33m{}\x1b[0m is not configured", rule_id);
            return false;
        }
    };

    println!("\x1b[1m{}\x1b[0m", rule_id);
    println!("  {:<10} {}", "severity", severity_label(directive.severity()));
    for opt in directive.options() {
        println!("  {:<10} {}", "option", opt);
    }
    if let Some(layer) = assembly.source_of(rule_id) {
        println!("  {:<10} {}", "from", layer);
    }
    for o in assembly.overrides_of(rule_id) {
        println!("           \x1b[90m└─\x1b[0m {}", override_line(o));
    }
    true
}

fn override_line(o: &Override) -> String {
    format!("'{}' replaced '{}'", o.winner, o.replaced)
}

/// List built-in presets with their rule counts.
pub fn print_presets() {
    for name in presets::PRESET_NAMES {
        if let Ok(set) = presets::builtin(name) {
            println!("  {:<20} {} rules", set.name, set.rules.len());
        }
    }
}
