use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use game_recommender::{
    api::{create_router, AppState},
    config::Config,
    data::{EngineContext, JsonFileSource},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "game_recommender=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Artifacts are loaded once and shared read-only for the life of the process
    let source = JsonFileSource::from_config(&config);
    let context = EngineContext::load(&source)
        .await
        .context("Failed to load recommendation artifacts")?;

    let state = AppState::new(context, &config);
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!(
        address = %address,
        fallback_policy = ?config.fallback_policy,
        "Game recommender listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
