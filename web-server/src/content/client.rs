//! Content store read client
//!
//! Thin wrapper holding the connection parameters (project id, dataset,
//! API version) and executing GROQ queries over HTTP. Lookups always go
//! to the live API host, never the CDN host - fresh content on every
//! request, trading latency for up-to-date pages.
//!
//! Two calling conventions:
//!
//! - `fetch` / `fetch_list` return `Result` for callers that care about
//!   the distinction between "absent" and "failed" (tools, tests).
//! - `singleton_or_default` / `optional` / `list_or_empty` never fail:
//!   a network/config/decode error is logged at `warn` and collapses to
//!   the empty value, so every page renders its fallbacks instead of
//!   erroring. "No results" is an expected state, not an error.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::Config;

/// Errors from the content store read path
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content store returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode content store response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ContentResult<T> = Result<T, ContentError>;

/// Read client for the headless content store
#[derive(Clone, Debug)]
pub struct ContentClient {
    http: reqwest::Client,
    /// Full query endpoint: `{host}/v{version}/data/query/{dataset}`
    query_url: String,
    project_id: String,
    dataset: String,
}

impl ContentClient {
    /// Client for the configured project, talking to the live API host
    pub fn new(config: &Config) -> Self {
        let host = format!("https://{}.api.sanity.io", config.project_id);
        Self::with_endpoint(host, config)
    }

    /// Client against an explicit host (tests point this at an
    /// unreachable address to drive the degradation path)
    pub fn with_endpoint(host: impl Into<String>, config: &Config) -> Self {
        let host = host.into();
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            query_url: format!(
                "{}/v{}/data/query/{}",
                host.trim_end_matches('/'),
                config.api_version,
                config.dataset
            ),
            project_id: config.project_id.clone(),
            dataset: config.dataset.clone(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// Execute a query; the store wraps the payload as `{"result": ...}`
    async fn query_raw(&self, query: &str, params: &[(&str, Value)]) -> ContentResult<Value> {
        let mut pairs: Vec<(String, String)> = vec![("query".to_string(), query.to_string())];
        for (name, value) in params {
            // Parameters are passed JSON-encoded under a `$`-prefixed name
            pairs.push((format!("${name}"), value.to_string()));
        }

        let response = self.http.get(&self.query_url).query(&pairs).send().await?;
        if !response.status().is_success() {
            return Err(ContentError::Status(response.status()));
        }

        let mut envelope: Value = response.json().await?;
        Ok(envelope
            .get_mut("result")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }

    /// Fetch a single document (`[0]` queries); `None` when absent
    pub async fn fetch<T: DeserializeOwned>(&self, query: &str) -> ContentResult<Option<T>> {
        self.fetch_with(query, &[]).await
    }

    /// Fetch a single document with query parameters
    pub async fn fetch_with<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, Value)],
    ) -> ContentResult<Option<T>> {
        let result = self.query_raw(query, params).await?;
        if result.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(result)?))
    }

    /// Fetch a document list; absent result decodes as the empty list
    pub async fn fetch_list<T: DeserializeOwned>(&self, query: &str) -> ContentResult<Vec<T>> {
        self.fetch_list_with(query, &[]).await
    }

    /// Fetch a document list with query parameters
    pub async fn fetch_list_with<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, Value)],
    ) -> ContentResult<Vec<T>> {
        let result = self.query_raw(query, params).await?;
        if result.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(result)?)
    }

    // ── Degradation wrappers (page renderers) ───────────────────────

    /// Singleton fetch that never fails: absent or errored becomes the
    /// type's default and the page renders fallback copy.
    pub async fn singleton_or_default<T>(&self, what: &str, query: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.fetch::<T>(query).await {
            Ok(Some(doc)) => doc,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(what = %what, error = %e, "Content fetch failed, using fallback content");
                T::default()
            }
        }
    }

    /// Optional singleton fetch that never fails
    pub async fn optional<T: DeserializeOwned>(&self, what: &str, query: &str) -> Option<T> {
        match self.fetch::<T>(query).await {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(what = %what, error = %e, "Content fetch failed, treating as absent");
                None
            }
        }
    }

    /// List fetch that never fails; errors collapse to the empty list
    pub async fn list_or_empty<T: DeserializeOwned>(&self, what: &str, query: &str) -> Vec<T> {
        match self.fetch_list::<T>(query).await {
            Ok(docs) => docs,
            Err(e) => {
                tracing::warn!(what = %what, error = %e, "Content fetch failed, treating as empty");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ContentClient {
        // Port 9 (discard) is never listening; requests fail fast
        ContentClient::with_endpoint("http://127.0.0.1:9", &Config::for_tests("testproj"))
    }

    #[tokio::test]
    async fn unreachable_store_degrades_to_defaults() {
        let c = client();
        let settings: shared::SiteSettings = c
            .singleton_or_default("siteSettings", super::super::queries::SITE_SETTINGS)
            .await;
        assert!(settings.shop_name.is_none());

        let items: Vec<shared::MenuItem> = c
            .list_or_empty("menuItems", super::super::queries::MENU_ITEMS)
            .await;
        assert!(items.is_empty());

        let primary: Option<shared::Location> = c
            .optional("primaryLocation", super::super::queries::PRIMARY_LOCATION)
            .await;
        assert!(primary.is_none());
    }

    #[tokio::test]
    async fn parameterized_fetch_surfaces_the_error() {
        let c = client();
        let result: ContentResult<Option<shared::Location>> = c
            .fetch_with(
                super::super::queries::LOCATION_BY_SLUG,
                &[("slug", serde_json::json!("division"))],
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn raw_fetch_surfaces_the_error() {
        let c = client();
        let result: ContentResult<Option<shared::SiteSettings>> =
            c.fetch(super::super::queries::SITE_SETTINGS).await;
        assert!(result.is_err());
    }

    #[test]
    fn query_url_includes_version_and_dataset() {
        let c = client();
        assert_eq!(c.query_url, "http://127.0.0.1:9/v2024-01-01/data/query/production");
        assert_eq!(c.project_id(), "testproj");
    }
}
