use serde::{Deserialize, Serialize};

/// Opaque identifier of a product, basket item or suggestion.
///
/// The recommendation service has used both integer and string ids, so both
/// are accepted. `5` and `"5"` are different identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl ItemId {
    /// Parses an identifier coming from a URL segment or form field.
    /// Anything that reads as an `i64` becomes a number.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(number) => ItemId::Number(number),
            Err(_) => ItemId::Text(raw.to_string()),
        }
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemId::Number(number) => write!(f, "{}", number),
            ItemId::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<i64> for ItemId {
    fn from(number: i64) -> Self {
        ItemId::Number(number)
    }
}

impl From<String> for ItemId {
    fn from(text: String) -> Self {
        ItemId::Text(text)
    }
}

impl From<&str> for ItemId {
    fn from(text: &str) -> Self {
        ItemId::Text(text.to_string())
    }
}

/// Records whose identity is their `ItemId` and nothing else.
///
/// Stores compare entries only through this trait; payload fields never take
/// part in equality.
pub trait Identified {
    fn identifier(&self) -> &ItemId;

    fn has_identifier(&self, identifier: &ItemId) -> bool {
        self.identifier() == identifier
    }
}
