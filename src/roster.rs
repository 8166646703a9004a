use parking_lot::RwLock;
use serde::Serialize;
use tracing::debug;

use crate::model::PlayerSnapshot;

/// Read-only roster query capability.
///
/// The recommendation endpoint only needs this; any backing store works.
pub trait RosterSource: Send + Sync {
    fn list_all_players(&self) -> anyhow::Result<Vec<PlayerSnapshot>>;
}

/// Starting five and bench split
#[derive(Debug, Clone, Serialize)]
pub struct Lineup {
    pub starting: Vec<PlayerSnapshot>,
    pub bench: Vec<PlayerSnapshot>,
}

/// In-memory roster. Keeps players in insertion order.
pub struct RosterStore {
    players: RwLock<Vec<PlayerSnapshot>>,
}

impl RosterStore {
    pub fn new(players: Vec<PlayerSnapshot>) -> Self {
        Self {
            players: RwLock::new(players),
        }
    }

    pub fn all(&self) -> Vec<PlayerSnapshot> {
        self.players.read().clone()
    }

    pub fn get(&self, id: i64) -> Option<PlayerSnapshot> {
        self.players.read().iter().find(|p| p.id == id).cloned()
    }

    pub fn with_games_today(&self) -> Vec<PlayerSnapshot> {
        self.players
            .read()
            .iter()
            .filter(|p| p.has_game_today())
            .cloned()
            .collect()
    }

    /// Case-insensitive team code filter
    pub fn filter_by_team(&self, team: &str) -> Vec<PlayerSnapshot> {
        self.players
            .read()
            .iter()
            .filter(|p| p.team.eq_ignore_ascii_case(team.trim()))
            .cloned()
            .collect()
    }

    pub fn lineup(&self) -> Lineup {
        let (starting, bench): (Vec<_>, Vec<_>) = self
            .players
            .read()
            .iter()
            .cloned()
            .partition(|p| p.is_starting);
        Lineup { starting, bench }
    }

    /// Returns false when no player has this id
    pub fn move_to_starting(&self, id: i64) -> bool {
        self.set_starting(id, true)
    }

    /// Returns false when no player has this id
    pub fn move_to_bench(&self, id: i64) -> bool {
        self.set_starting(id, false)
    }

    fn set_starting(&self, id: i64, starting: bool) -> bool {
        let mut players = self.players.write();
        match players.iter_mut().find(|p| p.id == id) {
            Some(player) => {
                player.is_starting = starting;
                debug!("Player {} ({}) starting={}", player.id, player.name, starting);
                true
            }
            None => false,
        }
    }
}

impl RosterSource for RosterStore {
    fn list_all_players(&self) -> anyhow::Result<Vec<PlayerSnapshot>> {
        Ok(self.all())
    }
}
