use std::fmt;

use serde::{Deserialize, Serialize};

/// A story flag value.
///
/// Flags double as boolean switches and as counters (relationship scores,
/// visit counts). Which variant a key holds is a contract of the story
/// content, not of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    /// A switch.
    Boolean(bool),
    /// A counter or score.
    Integer(i64),
    /// Free text.
    Text(String),
}

impl FlagValue {
    /// Whether the value counts as "set".
    ///
    /// Booleans are taken as is, integers are truthy when non-zero and text
    /// when non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// Numeric view of the value. Booleans count as 0 or 1.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Boolean(b) => Some(i64::from(*b)),
            Self::Integer(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// The text of a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for FlagValue {
    fn default() -> Self {
        Self::Boolean(false)
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for FlagValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FlagValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(FlagValue::Boolean(true).is_truthy());
        assert!(!FlagValue::Boolean(false).is_truthy());
        assert!(FlagValue::Integer(-2).is_truthy());
        assert!(!FlagValue::Integer(0).is_truthy());
        assert!(FlagValue::from("yes").is_truthy());
        assert!(!FlagValue::from("").is_truthy());
    }

    #[test]
    fn integer_view() {
        assert_eq!(FlagValue::Integer(7).as_integer(), Some(7));
        assert_eq!(FlagValue::Boolean(true).as_integer(), Some(1));
        assert_eq!(FlagValue::from("seven").as_integer(), None);
    }

    #[test]
    fn json_is_untagged() {
        let values = vec![
            FlagValue::Boolean(true),
            FlagValue::Integer(3),
            FlagValue::from("maya"),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[true,3,"maya"]"#);

        let back: Vec<FlagValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }
}
