use campus_leaderboard::{
    app,
    profile::{InMemoryProfileRepository, PostgresProfileRepository, ProfileRepository},
    AppConfig, AppState, PracticeStatsClient,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campus_leaderboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting campus leaderboard service");

    let config = AppConfig::from_env()?;

    let profile_repository: Arc<dyn ProfileRepository + Send + Sync> = match &config.database_url
    {
        Some(database_url) => {
            let pool = sqlx::PgPool::connect(database_url).await?;
            info!("Connected to profile database");
            Arc::new(PostgresProfileRepository::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set, serving an empty in-memory profile store");
            Arc::new(InMemoryProfileRepository::new())
        }
    };

    let stats_client = PracticeStatsClient::new(
        &config.practice_stats_base_url,
        config.practice_stats_timeout,
    )?;
    info!(
        base_url = %config.practice_stats_base_url,
        timeout_secs = config.practice_stats_timeout.as_secs(),
        "Practice statistics client configured"
    );

    let app_state = AppState::new(profile_repository, Arc::new(stats_client));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
