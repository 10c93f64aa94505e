pub mod assemble;
pub mod cli;
pub mod config;
pub mod load;
pub mod logging;
pub mod rules;

pub use assemble::{merge, Assembly, ConfigAssembler, ConfigurationRecord, Environment};
pub use config::{RuleDirective, Severity};
pub use rules::{NamedRuleSet, RuleSet};
