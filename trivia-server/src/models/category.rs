//! Category records and the `{id: type}` mapping sent to clients

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use sqlx::FromRow;

/// Category record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i32,
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Category id to category type, serialized as a JSON object
pub type CategoryMap = BTreeMap<i32, String>;

/// Build the `{id: type}` mapping for a list of categories.
///
/// Later entries overwrite earlier ones with the same id.
pub fn category_map<'a, I>(categories: I) -> CategoryMap
where
    I: IntoIterator<Item = &'a Category>,
{
    categories
        .into_iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

/// Reference to a category as sent by clients.
///
/// Clients send either a JSON number or a string. Questions store the
/// reference as text, so both forms compare by their textual value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(i64),
    Text(String),
}

impl CategoryRef {
    /// Textual form used for storage and comparison.
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CategoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CategoryRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}
