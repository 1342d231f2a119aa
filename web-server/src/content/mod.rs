//! Content store access
//!
//! - [`client`] - read client for the headless content store
//! - [`queries`] - declarative query definitions, one per data need
//! - [`image_url`] - media URL construction for the image CDN

pub mod client;
pub mod image_url;
pub mod queries;

pub use client::{ContentClient, ContentError};
pub use image_url::ImageUrlBuilder;
