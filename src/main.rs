use std::sync::Arc;
use tracing::info;

use courtside::config::Config;
use courtside::roster::RosterStore;
use courtside::schedule::ScheduleBook;
use courtside::seed::SeedData;
use courtside::web::server::{AppState, WebServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courtside=info".into()),
        )
        .init();

    info!("🏀 courtside v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "courtside.toml".to_string());

    let config = Arc::new(Config::load(&config_path)?);
    info!("Config loaded from {}", config_path);

    let seed = SeedData::load(config.roster.seed_path.as_deref())?;
    info!("Roster seeded with {} players, {} games today", seed.players.len(), seed.games.len());

    let roster = Arc::new(RosterStore::new(seed.players));
    let schedule = Arc::new(ScheduleBook::new(seed.games));

    let web = WebServer::new(AppState::new(roster, schedule), config);
    web.run().await
}
