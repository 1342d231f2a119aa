//! Content document models
//!
//! Every type here mirrors a document or object shape in the content
//! store. Deserialization is deliberately lenient: the editorial tool
//! enforces validation at write time, but the serving path must render
//! something sensible for any document it is handed, so optional fields
//! stay `Option` and lists default to empty.

pub mod category;
pub mod event;
pub mod image;
pub mod location;
pub mod menu;
pub mod pages;
pub mod staff;
pub mod text;
pub mod vocab;

pub use category::{Category, CategoryIcon};
pub use event::{Event, EventLocation, Recurrence};
pub use image::{Hotspot, ImageRef};
pub use location::{Address, Coordinates, HoursBlock, Location};
pub use menu::{MenuItem, MenuItemCategory, PriceVariant};
pub use pages::{AboutPage, HomePage, SiteSettings};
pub use staff::StaffMember;
pub use text::Block;
pub use vocab::{Feature, Size, Tag};

use serde::{Deserialize, Serialize};

/// URL slug as stored (`{"current": "espresso"}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    #[serde(default)]
    pub current: String,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }
}
