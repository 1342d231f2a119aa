//! Shared types for the Ember & Oak site
//!
//! Content document types as they come back from the content store,
//! plus the controlled vocabularies used across the serving and
//! editorial crates.

pub mod content;

// Re-exports for convenient access
pub use content::{
    AboutPage, Address, Category, CategoryIcon, Coordinates, Event, EventLocation, Feature,
    HomePage, HoursBlock, Hotspot, ImageRef, Location, MenuItem, PriceVariant, Recurrence,
    SiteSettings, Size, Slug, StaffMember, Tag,
};
