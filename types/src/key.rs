use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of an associative container or shape: either an integer or a string.
///
/// Keys are totally ordered (integers before strings) so dictionaries, keysets
/// and shapes iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayKey {
    Int(i64),
    Str(String),
}

impl ArrayKey {
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArrayKey::Int(i) => Some(*i),
            ArrayKey::Str(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArrayKey::Int(_) => None,
            ArrayKey::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Int(i) => write!(f, "{i}"),
            ArrayKey::Str(s) => write!(f, "'{s}'"),
        }
    }
}

impl From<i64> for ArrayKey {
    fn from(value: i64) -> Self {
        ArrayKey::Int(value)
    }
}

impl From<i32> for ArrayKey {
    fn from(value: i32) -> Self {
        ArrayKey::Int(i64::from(value))
    }
}

impl From<&str> for ArrayKey {
    fn from(value: &str) -> Self {
        ArrayKey::Str(value.to_string())
    }
}

impl From<String> for ArrayKey {
    fn from(value: String) -> Self {
        ArrayKey::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_keys_order_before_string_keys() {
        let mut keys = vec![
            ArrayKey::from("b"),
            ArrayKey::from(2),
            ArrayKey::from("a"),
            ArrayKey::from(-1),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                ArrayKey::Int(-1),
                ArrayKey::Int(2),
                ArrayKey::from("a"),
                ArrayKey::from("b"),
            ]
        );
    }

    #[test]
    fn display_quotes_string_keys() {
        assert_eq!(ArrayKey::from(7).to_string(), "7");
        assert_eq!(ArrayKey::from("x").to_string(), "'x'");
    }

    #[test]
    fn deserializes_untagged() {
        let keys: Vec<ArrayKey> = serde_json::from_value(serde_json::json!([1, "one"])).unwrap();
        assert_eq!(keys, vec![ArrayKey::Int(1), ArrayKey::from("one")]);
    }
}
