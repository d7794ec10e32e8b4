mod api_doc;
mod config;
mod error;
mod handlers;
mod id;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Context;
use config::Config;
use state::AppState;
use store::BookStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("books_api=info,tower_http=info")),
        )
        .init();

    tracing::info!("books-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = BookStore::load(&config.db_path)?;
    tracing::info!("Serving books from {}", store.path().display());
    let addr = config.bind_addr();
    let app = routes::app(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
