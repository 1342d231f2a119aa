//! One-off content seeding
//!
//! Writes the demo content set into a dataset through the mutation API.
//! Idempotent: every document is created-or-replaced under a stable id.
//!
//! Required environment: `SANITY_PROJECT_ID`, `SANITY_TOKEN`
//! Optional: `SANITY_DATASET` (production), `SANITY_API_VERSION` (2024-01-01)

use anyhow::{Context, bail};
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let project_id =
        std::env::var("SANITY_PROJECT_ID").context("SANITY_PROJECT_ID is not set")?;
    let token = std::env::var("SANITY_TOKEN")
        .context("SANITY_TOKEN is not set (a write token is required to seed)")?;
    let dataset = std::env::var("SANITY_DATASET").unwrap_or_else(|_| "production".into());
    let api_version =
        std::env::var("SANITY_API_VERSION").unwrap_or_else(|_| "2024-01-01".into());

    let documents = studio::seed::documents();
    tracing::info!(
        project_id = %project_id,
        dataset = %dataset,
        count = documents.len(),
        "Seeding content store"
    );

    let mutations: Vec<Value> = documents
        .into_iter()
        .map(|doc| json!({ "createOrReplace": doc }))
        .collect();

    let url = format!(
        "https://{project_id}.api.sanity.io/v{api_version}/data/mutate/{dataset}"
    );
    let response = reqwest::Client::new()
        .post(&url)
        .bearer_auth(&token)
        .json(&json!({ "mutations": mutations }))
        .send()
        .await
        .context("mutation request failed")?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("content store returned {status}: {body}");
    }

    tracing::info!("Done! Seeded all content.");
    Ok(())
}
