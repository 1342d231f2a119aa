//! HTML rendering
//!
//! - [`layout`] - shared page shell (header, footer, chrome data)
//! - [`components`] - badges, chips, cards and image helpers
//! - [`format`] - currency, date and phone formatting

pub mod components;
pub mod format;
pub mod layout;

pub use layout::{Chrome, page};
