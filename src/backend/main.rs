/**
 * Chat Feed Server Entry Point
 *
 * Loads configuration, initializes tracing and serves the Axum app.
 */

use chat_feed::backend::server::{config::load_config, init::create_app};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "chat_feed=debug,tower_http=info".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = load_config()?;
    let addr = config.bind_addr();

    tracing::info!("Starting chat feed server on {}", addr);

    let app = create_app(config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Chat feed server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
