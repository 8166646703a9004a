use std::collections::HashSet;

use chrono::NaiveTime;
use serde::Deserialize;
use tracing::info;

use crate::model::PlayerSnapshot;

const EMBEDDED_SEED: &str = include_str!("../data/seed.json");

/// Initial league data: the roster and today's slate
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub players: Vec<PlayerSnapshot>,
    #[serde(default)]
    pub games: Vec<GameSeed>,
}

/// A scheduled game with only a wall-clock tip-off; the date is today's.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSeed {
    pub id: i64,
    pub home_team: String,
    pub away_team: String,
    pub tip_off: NaiveTime,
    #[serde(default = "default_game_status")]
    pub status: String,
}

fn default_game_status() -> String { "Scheduled".to_string() }

impl SeedData {
    /// Load from a JSON file, or the bundled dataset when no path is given
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("Failed to read seed file '{}': {}", path, e))?;
                let seed = Self::parse(&content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse seed '{}': {}", path, e))?;
                info!(
                    "Seed loaded from {} ({} players, {} games)",
                    path,
                    seed.players.len(),
                    seed.games.len()
                );
                Ok(seed)
            }
            None => Self::embedded(),
        }
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::parse(EMBEDDED_SEED)
            .map_err(|e| anyhow::anyhow!("Bundled seed is invalid: {}", e))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let seed: SeedData = serde_json::from_str(content)?;
        seed.check_unique_ids()?;
        Ok(seed)
    }

    fn check_unique_ids(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for player in &self.players {
            if !seen.insert(player.id) {
                return Err(anyhow::anyhow!("Duplicate player id {} in seed", player.id));
            }
        }
        Ok(())
    }
}
