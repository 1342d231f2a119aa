use thiserror::Error;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | SANITY_PROJECT_ID | (required) | Content store project identifier |
/// | SANITY_DATASET | production | Content store dataset |
/// | SANITY_API_VERSION | 2024-01-01 | Content store API version |
/// | HTTP_PORT | 3000 | HTTP service port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_LEVEL | info | tracing level filter |
/// | LOG_DIR | (none) | Daily-rolling log file directory |
///
/// A missing `SANITY_PROJECT_ID` is a fatal startup error: without a
/// store identifier every page would render nothing but fallbacks, which
/// is a deployment mistake rather than a degraded state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Content store project identifier
    pub project_id: String,
    /// Content store dataset name
    pub dataset: String,
    /// Content store API version (date form)
    pub api_version: String,
    /// HTTP service port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SANITY_PROJECT_ID is not set; the content store identifier is required")]
    MissingProjectId,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let project_id = std::env::var("SANITY_PROJECT_ID")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingProjectId)?;

        Ok(Self {
            project_id,
            dataset: std::env::var("SANITY_DATASET").unwrap_or_else(|_| "production".into()),
            api_version: std::env::var("SANITY_API_VERSION")
                .unwrap_or_else(|_| "2024-01-01".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        })
    }

    /// Fixed values for tests - no environment access
    pub fn for_tests(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: "production".into(),
            api_version: "2024-01-01".into(),
            http_port: 0,
            environment: "test".into(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
