use crate::content::ContentClient;
use crate::core::Config;

/// Server state - shared by every request handler
///
/// Cheap to clone: the config is small and the content client shares its
/// connection pool internally. There is no mutable cross-request state;
/// the server never writes and holds only request-scoped document copies.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Content store read client
    pub content: ContentClient,
}

impl ServerState {
    /// Initialize server state from configuration
    pub fn initialize(config: &Config) -> Self {
        Self {
            config: config.clone(),
            content: ContentClient::new(config),
        }
    }

    /// State wired to an explicit store endpoint (tests)
    pub fn with_content(config: Config, content: ContentClient) -> Self {
        Self { config, content }
    }
}
