use std::fmt;

use serde::{Deserialize, Serialize};

/// Point-in-time view of a rostered player.
///
/// Owned by the roster store; the evaluator only ever sees clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub id: i64,
    pub name: String,
    pub team: String,
    pub position: String,
    #[serde(default)]
    pub is_starting: bool,
    #[serde(default)]
    pub stats: Option<StatLine>,
    #[serde(default)]
    pub injury: Option<InjuryRecord>,
    #[serde(default)]
    pub game_today: Option<ScheduleEntry>,
}

impl PlayerSnapshot {
    /// True only when a schedule entry exists and says there is a game
    pub fn has_game_today(&self) -> bool {
        self.game_today.as_ref().is_some_and(|g| g.has_game)
    }
}

/// Season / rolling averages
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatLine {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub field_goal_percentage: f64,
    pub three_point_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryRecord {
    #[serde(default)]
    pub status: InjuryStatus,
    #[serde(default)]
    pub description: Option<String>,
}

/// Injury designation, parsed case-insensitively from free text.
///
/// Anything outside the four known designations (including padded or empty
/// text) is kept verbatim as `Unrecognized` so it round-trips through the
/// API unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InjuryStatus {
    Healthy,
    Questionable,
    Doubtful,
    Out,
    Unrecognized(String),
}

impl InjuryStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "healthy" => InjuryStatus::Healthy,
            "questionable" => InjuryStatus::Questionable,
            "doubtful" => InjuryStatus::Doubtful,
            "out" => InjuryStatus::Out,
            _ => InjuryStatus::Unrecognized(raw.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            InjuryStatus::Healthy => "Healthy",
            InjuryStatus::Questionable => "Questionable",
            InjuryStatus::Doubtful => "Doubtful",
            InjuryStatus::Out => "Out",
            InjuryStatus::Unrecognized(raw) => raw,
        }
    }
}

impl Default for InjuryStatus {
    fn default() -> Self {
        InjuryStatus::Unrecognized(String::new())
    }
}

impl From<String> for InjuryStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<InjuryStatus> for String {
    fn from(status: InjuryStatus) -> Self {
        status.name().to_string()
    }
}

impl fmt::Display for InjuryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Today's fixture for a player. When `has_game` is false the
/// opponent/time fields carry no meaning.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    #[serde(default)]
    pub has_game: bool,
    #[serde(default)]
    pub opponent: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub is_home_game: bool,
}

/// A league game on today's slate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NbaGame {
    pub id: i64,
    pub home_team: String,
    pub away_team: String,
    pub game_time: chrono::DateTime<chrono::FixedOffset>,
    pub status: String,
}
