pub mod presets;

use crate::config::RuleDirective;
use std::collections::BTreeMap;

/// Rule id to directive. Keys are kept sorted so emitted configs are stable.
pub type RuleSet = BTreeMap<String, RuleDirective>;

/// A rule set tagged with the layer name it is merged under.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRuleSet {
    pub name: String,
    pub rules: RuleSet,
}

impl NamedRuleSet {
    pub fn new(name: impl Into<String>, rules: RuleSet) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }
}
