use chrono::{Local, NaiveDate, TimeZone};
use tracing::warn;

use crate::model::NbaGame;
use crate::seed::GameSeed;

/// Today's league slate. Seeds carry only tip-off times, so each call
/// anchors them to the current local date.
pub struct ScheduleBook {
    games: Vec<GameSeed>,
}

impl ScheduleBook {
    pub fn new(games: Vec<GameSeed>) -> Self {
        Self { games }
    }

    pub fn todays_games(&self) -> Vec<NbaGame> {
        self.games_on(Local::now().date_naive(), &Local)
    }

    /// Resolve the slate on a given date in a given timezone, ordered by tip-off.
    /// Tip-offs that fall in a DST gap are dropped.
    pub fn games_on<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Vec<NbaGame> {
        let mut games: Vec<NbaGame> = self
            .games
            .iter()
            .filter_map(|g| {
                let Some(at) = tz.from_local_datetime(&date.and_time(g.tip_off)).earliest() else {
                    warn!("Game {} tip-off {} does not exist on {}", g.id, g.tip_off, date);
                    return None;
                };
                Some(NbaGame {
                    id: g.id,
                    home_team: g.home_team.clone(),
                    away_team: g.away_team.clone(),
                    game_time: at.fixed_offset(),
                    status: g.status.clone(),
                })
            })
            .collect();
        games.sort_by(|a, b| a.game_time.cmp(&b.game_time).then(a.id.cmp(&b.id)));
        games
    }
}
