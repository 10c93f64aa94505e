use crate::rules::{NamedRuleSet, RuleSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Execution-context flags handed to the linter (`browser`, `node`, ...).
pub type Environment = BTreeMap<String, bool>;

/// The assembled configuration, in the shape an ESLint-compatible engine loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationRecord {
    pub parser: String,
    pub env: Environment,
    pub rules: RuleSet,
}

/// A rule whose directive from one layer was replaced by a later layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub rule_id: String,
    pub replaced: String,
    pub winner: String,
}

/// Result of a named assembly: the record plus where each rule came from.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub record: ConfigurationRecord,
    /// Rule id to the name of the layer that supplied its directive.
    pub provenance: BTreeMap<String, String>,
    /// Overrides in merge order.
    pub overrides: Vec<Override>,
}

impl Assembly {
    pub fn source_of(&self, rule_id: &str) -> Option<&str> {
        self.provenance.get(rule_id).map(String::as_str)
    }

    pub fn overrides_of<'a>(
        &'a self,
        rule_id: &'a str,
    ) -> impl Iterator<Item = &'a Override> + 'a {
        self.overrides.iter().filter(move |o| o.rule_id == rule_id)
    }
}

/// Builds configuration records from ordered rule sets and fixed metadata.
#[derive(Debug, Clone)]
pub struct ConfigAssembler {
    parser: String,
    env: Environment,
}

impl ConfigAssembler {
    pub fn new(parser: impl Into<String>, env: Environment) -> Self {
        Self {
            parser: parser.into(),
            env,
        }
    }

    pub fn parser(&self) -> &str {
        &self.parser
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Merge `sets` left to right. A later set replaces the whole directive
    /// of any rule an earlier set defined; option payloads are never combined.
    pub fn assemble(&self, sets: &[RuleSet]) -> ConfigurationRecord {
        let rules = sets.iter().fold(RuleSet::new(), |mut acc, set| {
            overlay(&mut acc, set);
            acc
        });

        ConfigurationRecord {
            parser: self.parser.clone(),
            env: self.env.clone(),
            rules,
        }
    }

    /// Same merge as [`assemble`](Self::assemble), tracking which layer
    /// supplied each surviving directive.
    pub fn assemble_named(&self, sets: &[NamedRuleSet]) -> Assembly {
        let mut rules = RuleSet::new();
        let mut provenance: BTreeMap<String, String> = BTreeMap::new();
        let mut overrides = Vec::new();

        for layer in sets {
            for (id, directive) in &layer.rules {
                if let Some(previous) = provenance.insert(id.clone(), layer.name.clone()) {
                    debug!(
                        rule = %id,
                        replaced = %previous,
                        winner = %layer.name,
                        "rule overridden"
                    );
                    overrides.push(Override {
                        rule_id: id.clone(),
                        replaced: previous,
                        winner: layer.name.clone(),
                    });
                }
                rules.insert(id.clone(), directive.clone());
            }
            debug!(layer = %layer.name, rules = layer.rules.len(), "merged layer");
        }

        Assembly {
            record: ConfigurationRecord {
                parser: self.parser.clone(),
                env: self.env.clone(),
                rules,
            },
            provenance,
            overrides,
        }
    }
}

/// Two-set step of the merge: `overlay_set` wins on shared keys.
pub fn merge(base: &RuleSet, overlay_set: &RuleSet) -> RuleSet {
    let mut merged = base.clone();
    overlay(&mut merged, overlay_set);
    merged
}

fn overlay(target: &mut RuleSet, set: &RuleSet) {
    for (id, directive) in set {
        target.insert(id.clone(), directive.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RuleDirective, Severity};
    use serde_json::json;

    fn set(entries: &[(&str, RuleDirective)]) -> RuleSet {
        entries
            .iter()
            .map(|(id, d)| (id.to_string(), d.clone()))
            .collect()
    }

    fn assembler() -> ConfigAssembler {
        let mut env = Environment::new();
        env.insert("browser".into(), true);
        ConfigAssembler::new("babel-eslint", env)
    }

    #[test]
    fn later_set_wins() {
        let a = set(&[("eqeqeq", Severity::Error.into())]);
        let b = set(&[
            ("eqeqeq", Severity::Off.into()),
            ("curly", Severity::Error.into()),
        ]);
        let record = assembler().assemble(&[a, b]);
        assert_eq!(
            record.rules,
            set(&[
                ("eqeqeq", Severity::Off.into()),
                ("curly", Severity::Error.into()),
            ])
        );
    }

    #[test]
    fn override_replaces_options_whole() {
        let a = set(&[(
            "quotes",
            RuleDirective::Configured {
                severity: Severity::Error,
                options: vec![json!("single"), json!({"allowTemplateLiterals": true})],
            },
        )]);
        let b = set(&[(
            "quotes",
            RuleDirective::Configured {
                severity: Severity::Warn,
                options: vec![json!("double")],
            },
        )]);
        let record = assembler().assemble(&[a, b.clone()]);
        assert_eq!(record.rules["quotes"], b["quotes"]);
        assert_eq!(record.rules["quotes"].options().len(), 1);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let a = set(&[("semi", Severity::Error.into())]);
        let b = set(&[("semi", Severity::Off.into())]);
        let before = a.clone();
        let _ = assembler().assemble(&[a.clone(), b]);
        assert_eq!(a, before);
    }

    #[test]
    fn empty_input_gives_empty_rules() {
        let record = assembler().assemble(&[]);
        assert!(record.rules.is_empty());
        assert_eq!(record.parser, "babel-eslint");
        assert_eq!(record.env.get("browser"), Some(&true));
    }

    #[test]
    fn merge_matches_two_set_assemble() {
        let a = set(&[
            ("radix", Severity::Error.into()),
            ("semi", Severity::Error.into()),
        ]);
        let b = set(&[("semi", Severity::Warn.into())]);
        assert_eq!(merge(&a, &b), assembler().assemble(&[a, b]).rules);
    }

    #[test]
    fn named_assembly_tracks_provenance_and_overrides() {
        let base = NamedRuleSet::new(
            "base",
            set(&[
                ("eqeqeq", Severity::Error.into()),
                ("curly", Severity::Error.into()),
            ]),
        );
        let local = NamedRuleSet::new("local", set(&[("eqeqeq", Severity::Off.into())]));
        let assembly = assembler().assemble_named(&[base.clone(), local.clone()]);

        assert_eq!(assembly.source_of("eqeqeq"), Some("local"));
        assert_eq!(assembly.source_of("curly"), Some("base"));
        assert_eq!(assembly.source_of("semi"), None);
        assert_eq!(
            assembly.overrides,
            vec![Override {
                rule_id: "eqeqeq".into(),
                replaced: "base".into(),
                winner: "local".into(),
            }]
        );
        assert_eq!(
            assembly.record,
            assembler().assemble(&[base.rules, local.rules])
        );
    }

    #[test]
    fn record_serializes_with_wire_field_names() {
        let record = assembler().assemble(&[set(&[("curly", Severity::Error.into())])]);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "parser": "babel-eslint",
                "env": {"browser": true},
                "rules": {"curly": 2}
            })
        );
    }
}
