//! Menu category model

use serde::{Deserialize, Serialize};

use super::Slug;

/// Menu category document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Unique across categories; doubles as the section anchor on /menu
    #[serde(default)]
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    /// Display order, ascending
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub icon: Option<CategoryIcon>,
}

/// Editorial icon hint for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryIcon {
    Coffee,
    Leaf,
    Pastry,
    Food,
    Bottle,
    Other(String),
}

impl CategoryIcon {
    pub fn value(&self) -> &str {
        match self {
            Self::Coffee => "coffee",
            Self::Leaf => "leaf",
            Self::Pastry => "pastry",
            Self::Food => "food",
            Self::Bottle => "bottle",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for CategoryIcon {
    fn from(s: String) -> Self {
        match s.as_str() {
            "coffee" => Self::Coffee,
            "leaf" => Self::Leaf,
            "pastry" => Self::Pastry,
            "food" => Self::Food,
            "bottle" => Self::Bottle,
            _ => Self::Other(s),
        }
    }
}

impl From<CategoryIcon> for String {
    fn from(i: CategoryIcon) -> Self {
        i.value().to_string()
    }
}
