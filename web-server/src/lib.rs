//! Ember & Oak web server
//!
//! Server-rendered marketing site for the coffee shop. All content lives
//! in an external headless content store; this server reads documents,
//! maps them into view models and renders HTML. It never writes content.
//!
//! # Module structure
//!
//! ```text
//! web-server/src/
//! ├── core/          # Config, state, server, errors
//! ├── content/       # Store client, query definitions, image URLs
//! ├── render/        # Layout, components, formatting
//! ├── pages/         # One module per route
//! ├── middleware/    # Request logging
//! └── utils/         # Errors, logger, validation
//! ```

pub mod content;
pub mod core;
pub mod middleware;
pub mod pages;
pub mod render;
pub mod routes;
pub mod utils;

// Re-export public types
pub use content::{ContentClient, ContentError};
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;

/// Load `.env` and initialize logging from `LOG_LEVEL` / `LOG_DIR`.
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
    ______        __                  ____    ____        __
   / ____/___ ___/ /_  ___  _____   ( __ )  / __ \____ _/ /__
  / __/ / __ `__ \ __ \/ _ \/ ___/  / __  | / / / / __ `/ //_/
 / /___/ / / / / / /_/ /  __/ /    / /_/ / / /_/ / /_/ / ,<
/_____/_/ /_/ /_/_.___/\___/_/     \____/  \____/\__,_/_/|_|
    "#
    );
}
