//! Controlled vocabularies
//!
//! The editorial tool constrains these fields to fixed option lists, but
//! the vocabulary is only enforced there. Serving-side they are closed
//! enums with an `Other` arm so an unrecognized value still renders as
//! its raw string instead of failing the whole document.

use serde::{Deserialize, Serialize};

/// Dietary / merchandising tag on a menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    Vegan,
    GlutenFree,
    DairyFree,
    Seasonal,
    StaffPick,
    New,
    /// Value outside the editorial vocabulary
    Other(String),
}

impl Tag {
    /// Stored string value
    pub fn value(&self) -> &str {
        match self {
            Self::Vegan => "vegan",
            Self::GlutenFree => "gluten-free",
            Self::DairyFree => "dairy-free",
            Self::Seasonal => "seasonal",
            Self::StaffPick => "staff-pick",
            Self::New => "new",
            Self::Other(s) => s,
        }
    }

    /// Short display label (badge text)
    pub fn label(&self) -> &str {
        match self {
            Self::Vegan => "Vegan",
            Self::GlutenFree => "GF",
            Self::DairyFree => "DF",
            Self::Seasonal => "Seasonal",
            Self::StaffPick => "Staff Pick",
            Self::New => "New",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        match s.as_str() {
            "vegan" => Self::Vegan,
            "gluten-free" => Self::GlutenFree,
            "dairy-free" => Self::DairyFree,
            "seasonal" => Self::Seasonal,
            "staff-pick" => Self::StaffPick,
            "new" => Self::New,
            _ => Self::Other(s),
        }
    }
}

impl From<Tag> for String {
    fn from(t: Tag) -> Self {
        t.value().to_string()
    }
}

/// Location amenity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Feature {
    Wifi,
    Outdoor,
    DriveThrough,
    MeetingRoom,
    Accessible,
    DogFriendly,
    /// Value outside the editorial vocabulary
    Other(String),
}

impl Feature {
    pub fn value(&self) -> &str {
        match self {
            Self::Wifi => "wifi",
            Self::Outdoor => "outdoor",
            Self::DriveThrough => "drive-through",
            Self::MeetingRoom => "meeting-room",
            Self::Accessible => "accessible",
            Self::DogFriendly => "dog-friendly",
            Self::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Wifi => "Free WiFi",
            Self::Outdoor => "Outdoor Seating",
            Self::DriveThrough => "Drive-Through",
            Self::MeetingRoom => "Meeting Room",
            Self::Accessible => "Wheelchair Accessible",
            Self::DogFriendly => "Dog Friendly Patio",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Feature {
    fn from(s: String) -> Self {
        match s.as_str() {
            "wifi" => Self::Wifi,
            "outdoor" => Self::Outdoor,
            "drive-through" => Self::DriveThrough,
            "meeting-room" => Self::MeetingRoom,
            "accessible" => Self::Accessible,
            "dog-friendly" => Self::DogFriendly,
            _ => Self::Other(s),
        }
    }
}

impl From<Feature> for String {
    fn from(f: Feature) -> Self {
        f.value().to_string()
    }
}

/// Drink size on a price variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Size {
    Small,
    Medium,
    Large,
    /// Value outside the editorial vocabulary
    Other(String),
}

impl Size {
    pub fn value(&self) -> &str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Other(s) => s,
        }
    }

    /// One-letter abbreviation used in price strings; unknown sizes
    /// render their raw value, matching the editorial preview.
    pub fn abbrev(&self) -> &str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
            Self::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Small => "Small (8oz)",
            Self::Medium => "Medium (12oz)",
            Self::Large => "Large (16oz)",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Size {
    fn from(s: String) -> Self {
        match s.as_str() {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            _ => Self::Other(s),
        }
    }
}

impl From<Size> for String {
    fn from(s: Size) -> Self {
        s.value().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        for value in ["vegan", "gluten-free", "dairy-free", "seasonal", "staff-pick", "new"] {
            let tag = Tag::from(value.to_string());
            assert!(!matches!(tag, Tag::Other(_)), "{value} should be known");
            assert_eq!(tag.value(), value);
        }
    }

    #[test]
    fn unknown_tag_keeps_raw_value() {
        let tag = Tag::from("limited-run".to_string());
        assert_eq!(tag, Tag::Other("limited-run".to_string()));
        assert_eq!(tag.label(), "limited-run");
    }

    #[test]
    fn size_abbreviations() {
        assert_eq!(Size::Small.abbrev(), "S");
        assert_eq!(Size::Medium.abbrev(), "M");
        assert_eq!(Size::Large.abbrev(), "L");
        assert_eq!(Size::from("tub".to_string()).abbrev(), "tub");
    }

    #[test]
    fn deserializes_from_store_strings() {
        let tags: Vec<Tag> = serde_json::from_str(r#"["vegan", "mystery"]"#).unwrap();
        assert_eq!(tags, vec![Tag::Vegan, Tag::Other("mystery".to_string())]);
    }
}
