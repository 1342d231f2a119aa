//! Event model

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Address, Block, ImageRef, Slug};

/// Event document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<Slug>,
    /// Full rich-text description (detail views only)
    #[serde(default)]
    pub description: Option<Vec<Block>>,
    #[serde(default)]
    pub short_description: Option<String>,
    /// Start date-time; the only required field besides the title
    pub date: DateTime<FixedOffset>,
    #[serde(default)]
    pub end_date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub recurring: Recurrence,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub featured: bool,
    /// Expanded location reference
    #[serde(default)]
    pub location: Option<EventLocation>,
}

impl Event {
    /// Inclusive "upcoming" check: an event starting exactly now is kept.
    pub fn starts_at_or_after(&self, now: DateTime<FixedOffset>) -> bool {
        self.date >= now
    }
}

/// The slice of a location that event queries expand inline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLocation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub slug: Option<Slug>,
}

/// Recurrence cadence; unknown values collapse to one-time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Recurrence {
    #[default]
    None,
    Weekly,
    Monthly,
}

impl From<String> for Recurrence {
    fn from(s: String) -> Self {
        match s.as_str() {
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            _ => Self::None,
        }
    }
}

impl From<Recurrence> for String {
    fn from(r: Recurrence) -> Self {
        match r {
            Recurrence::None => "none",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
        }
        .to_string()
    }
}

impl Recurrence {
    /// Badge text; one-time events show no badge
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Weekly => Some("Every Week"),
            Self::Monthly => Some("Monthly"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_at(date: &str) -> Event {
        serde_json::from_str(&format!(
            r#"{{"_id": "e", "title": "Cupping", "date": "{date}"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn upcoming_boundary_is_inclusive() {
        let now: DateTime<FixedOffset> = "2026-01-15T10:00:00Z".parse().unwrap();
        assert!(event_at("2026-01-15T10:00:00.000Z").starts_at_or_after(now));
        assert!(event_at("2026-01-15T10:00:01.000Z").starts_at_or_after(now));
        assert!(!event_at("2026-01-15T09:59:59.000Z").starts_at_or_after(now));
    }

    #[test]
    fn recurrence_defaults_and_labels() {
        let e = event_at("2026-01-15T10:00:00Z");
        assert_eq!(e.recurring, Recurrence::None);
        assert_eq!(Recurrence::None.label(), None);
        assert_eq!(Recurrence::Weekly.label(), Some("Every Week"));
        assert_eq!(Recurrence::Monthly.label(), Some("Monthly"));
    }

    #[test]
    fn unknown_recurrence_collapses_to_none() {
        let e: Event = serde_json::from_str(
            r#"{"_id": "e", "title": "T", "date": "2026-01-15T10:00:00Z", "recurring": "daily"}"#,
        )
        .unwrap();
        assert_eq!(e.recurring, Recurrence::None);
    }
}
