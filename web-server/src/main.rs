use web_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    setup_environment();

    print_banner();

    tracing::info!("☕ Ember & Oak web server starting...");

    // 2. Load configuration (fatal if the store identifier is missing)
    let config = Config::from_env()?;

    // 3. Initialize server state
    let state = ServerState::initialize(&config);

    // 4. Start the HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
