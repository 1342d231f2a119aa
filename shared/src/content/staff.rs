//! Staff member model

use serde::{Deserialize, Serialize};

use super::ImageRef;

/// Team member document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photo: Option<ImageRef>,
    #[serde(default)]
    pub favorite_order: Option<String>,
    #[serde(default)]
    pub fun_fact: Option<String>,
    /// Display order, ascending
    #[serde(default)]
    pub order: i64,
}

impl StaffMember {
    /// Avatar fallback when no photo is set
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}
