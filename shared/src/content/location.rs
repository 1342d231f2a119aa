//! Location model

use serde::{Deserialize, Serialize};

use super::{Feature, ImageRef, Slug};

/// Shop location document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    /// Ordered as entered by the editor; no enforced time format
    #[serde(default)]
    pub hours: Vec<HoursBlock>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
    /// At most one primary location, by editorial convention
    #[serde(default)]
    pub is_primary: bool,
}

/// Street address, every part optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

impl Address {
    /// `"3847 SE Division Street, Portland, OR 97202"` — parts that are
    /// missing are simply skipped.
    pub fn single_line(&self) -> String {
        let mut out = String::new();
        let mut push = |part: &Option<String>| {
            if let Some(p) = part
                && !p.is_empty()
            {
                if !out.is_empty() {
                    out.push_str(", ");
                }
                out.push_str(p);
            }
        };
        push(&self.street);
        push(&self.city);
        push(&self.state);
        if let Some(zip) = &self.zip
            && !zip.is_empty()
        {
            if out.is_empty() {
                out.push_str(zip);
            } else {
                out.push(' ');
                out.push_str(zip);
            }
        }
        out
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

/// Free-text day-range / hour-range pair ("Monday - Friday", "6:30 AM - 6:00 PM")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoursBlock {
    #[serde(default)]
    pub days: String,
    #[serde(default)]
    pub hours: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_single_line_skips_missing_parts() {
        let addr = Address {
            street: Some("2215 NE Alberta Street".to_string()),
            city: Some("Portland".to_string()),
            state: None,
            zip: Some("97211".to_string()),
        };
        assert_eq!(addr.single_line(), "2215 NE Alberta Street, Portland 97211");
        assert_eq!(Address::default().single_line(), "");
    }
}
