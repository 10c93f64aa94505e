use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// How a violation of a rule is reported by the consuming linter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Off,
    Warn,
    Error,
}

impl Severity {
    /// Numeric level used on the wire (`0`, `1`, `2`).
    pub fn level(self) -> u8 {
        match self {
            Severity::Off => 0,
            Severity::Warn => 1,
            Severity::Error => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// Interpret a JSON value as a severity: a level number or a lowercase name.
    pub fn from_value(value: &Value) -> Result<Self, DirectiveError> {
        match value {
            Value::Number(n) => match n.as_u64() {
                Some(0) => Ok(Severity::Off),
                Some(1) => Ok(Severity::Warn),
                Some(2) => Ok(Severity::Error),
                _ => Err(DirectiveError::InvalidSeverity(n.to_string())),
            },
            Value::String(s) => match s.as_str() {
                "off" => Ok(Severity::Off),
                "warn" | "warning" => Ok(Severity::Warn),
                "error" => Ok(Severity::Error),
                _ => Err(DirectiveError::InvalidSeverity(format!("'{}'", s))),
            },
            other => Err(DirectiveError::InvalidSeverity(other.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.level())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Severity::from_value(&value).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    InvalidSeverity(String),
    EmptyEntry,
    UnexpectedShape(String),
}

impl fmt::Display for DirectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveError::InvalidSeverity(v) => write!(
                f,
                "invalid severity {} (expected 0, 1, 2, \"off\", \"warn\" or \"error\")",
                v
            ),
            DirectiveError::EmptyEntry => {
                write!(f, "rule directive array must start with a severity")
            }
            DirectiveError::UnexpectedShape(v) => {
                write!(f, "rule directive must be a severity or an array, got {}", v)
            }
        }
    }
}

impl std::error::Error for DirectiveError {}

/// Setting for a single rule: a severity, optionally followed by rule options.
///
/// Serialized the way ESLint reads it: `2` or `[2, "single", {...}]`.
/// Option payloads are passed through verbatim; their shape is the
/// consuming linter's business.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleDirective {
    Level(Severity),
    Configured {
        severity: Severity,
        options: Vec<Value>,
    },
}

impl RuleDirective {
    pub fn severity(&self) -> Severity {
        match self {
            RuleDirective::Level(s) => *s,
            RuleDirective::Configured { severity, .. } => *severity,
        }
    }

    pub fn options(&self) -> &[Value] {
        match self {
            RuleDirective::Level(_) => &[],
            RuleDirective::Configured { options, .. } => options,
        }
    }

    /// Parse the wire form of a directive.
    pub fn from_value(value: &Value) -> Result<Self, DirectiveError> {
        match value {
            Value::Number(_) | Value::String(_) => {
                Ok(RuleDirective::Level(Severity::from_value(value)?))
            }
            Value::Array(items) => {
                let (first, rest) = items.split_first().ok_or(DirectiveError::EmptyEntry)?;
                Ok(RuleDirective::Configured {
                    severity: Severity::from_value(first)?,
                    options: rest.to_vec(),
                })
            }
            other => Err(DirectiveError::UnexpectedShape(other.to_string())),
        }
    }
}

impl From<Severity> for RuleDirective {
    fn from(severity: Severity) -> Self {
        RuleDirective::Level(severity)
    }
}

impl fmt::Display for RuleDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleDirective::Level(s) => write!(f, "{}", s),
            RuleDirective::Configured { severity, options } => {
                write!(f, "{}", severity)?;
                for opt in options {
                    write!(f, " {}", opt)?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for RuleDirective {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RuleDirective::Level(s) => s.serialize(serializer),
            RuleDirective::Configured { severity, options } => {
                let mut seq = serializer.serialize_seq(Some(options.len() + 1))?;
                seq.serialize_element(severity)?;
                for opt in options {
                    seq.serialize_element(opt)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for RuleDirective {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        RuleDirective::from_value(&value).map_err(de::Error::custom)
    }
}
