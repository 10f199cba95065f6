use bella_site::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment and logging
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )?;

    print_banner();
    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "Bella Vista site starting..."
    );

    // 2. Content and form sessions
    let state = ServerState::initialize(&config)?;

    // 3. Serve until Ctrl-C
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
