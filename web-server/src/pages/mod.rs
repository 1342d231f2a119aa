//! Page modules
//!
//! One module per route. Each module exposes a `router()` and keeps its
//! handlers plus any page-specific view helpers private. Every page
//! follows the same shape: issue its queries concurrently, map documents
//! into display data with fallbacks, render markup inside the shared
//! shell.
//!
//! - [`home`] - `/`
//! - [`menu`] - `/menu`
//! - [`about`] - `/about`
//! - [`locations`] - `/locations`
//! - [`events`] - `/events`
//! - [`contact`] - `/contact` (GET + POST)
//! - [`health`] - `/health`

pub mod about;
pub mod contact;
pub mod events;
pub mod health;
pub mod home;
pub mod locations;
pub mod menu;

use axum::Router;

use crate::core::ServerState;

/// All page routes (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(home::router())
        .merge(menu::router())
        .merge(about::router())
        .merge(locations::router())
        .merge(events::router())
        .merge(contact::router())
        .merge(health::router())
}
