mod calc;
mod config;
mod error;
mod quotes;
mod routes;
mod services;
mod state;
mod views;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let quotes = match quotes::QuoteClient::new(&config.quotes) {
        Ok(quotes) => quotes,
        Err(e) => {
            tracing::error!(error = %e, "quote client init failed");
            std::process::exit(1);
        }
    };
    tracing::info!(url = quotes.url(), "quote feed configured");

    let state = state::AppState::new(Arc::new(quotes), config.sessions);

    // Spawn background sweep of idle calculator sessions.
    let _sweeper = services::sweep::spawn_sweep_task(state.clone());

    let app = routes::app(state, &config.static_dir);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "math-magicians listening");
    axum::serve(listener, app).await.expect("server failed");
}
