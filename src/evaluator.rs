//! Start/Sit evaluator
//!
//! Every player starts from a neutral 50 and picks up fixed deltas from
//! today's schedule, injury designation and stat profile:
//!
//!   schedule   : no game -40 / game +20
//!   injury     : healthy +20, questionable -15, doubtful -30, out -50
//!   stats      : >25 PPG +10, >50% FG +5, >7 REB and >5 AST +10
//!
//! The sum is clamped to [0, 100] and a score of 50 or more means Start.
//! Stateless: the same snapshots always produce the same ranking.

use serde::Serialize;

use crate::model::{InjuryStatus, PlayerSnapshot, StatLine};

pub const BASE_SCORE: f64 = 50.0;
pub const START_THRESHOLD: f64 = 50.0;

const NO_GAME_PENALTY: f64 = -40.0;
const GAME_TODAY_BONUS: f64 = 20.0;

const HEALTHY_BONUS: f64 = 20.0;
const QUESTIONABLE_PENALTY: f64 = -15.0;
const DOUBTFUL_PENALTY: f64 = -30.0;
const OUT_PENALTY: f64 = -50.0;

const SCORER_PPG: f64 = 25.0;
const SCORER_BONUS: f64 = 10.0;
const EFFICIENT_FG_PCT: f64 = 50.0;
const EFFICIENT_BONUS: f64 = 5.0;
const ALL_AROUND_REBOUNDS: f64 = 7.0;
const ALL_AROUND_ASSISTS: f64 = 5.0;
const ALL_AROUND_BONUS: f64 = 10.0;

/// Rendered in place of an opponent or tip-off time the schedule left out
pub const MISSING_FIXTURE_FIELD: &str = "TBD";
/// Rendered in place of a missing injury description
pub const MISSING_INJURY_DETAIL: &str = "no details";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Start,
    Sit,
}

impl Verdict {
    pub fn from_score(score: f64) -> Self {
        if score >= START_THRESHOLD {
            Verdict::Start
        } else {
            Verdict::Sit
        }
    }
}

/// Outcome for one player. Built only through [`Recommendation::new`], so
/// the score is always clamped and the verdict always follows from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    player_id: i64,
    player_name: String,
    #[serde(rename = "recommendation")]
    verdict: Verdict,
    confidence_score: f64,
    reasons: Vec<String>,
}

impl Recommendation {
    pub fn new(player_id: i64, player_name: String, raw_score: f64, reasons: Vec<String>) -> Self {
        let confidence_score = raw_score.clamp(0.0, 100.0);
        Self {
            player_id,
            player_name,
            verdict: Verdict::from_score(confidence_score),
            confidence_score,
            reasons,
        }
    }

    pub fn player_id(&self) -> i64 {
        self.player_id
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn confidence_score(&self) -> f64 {
        self.confidence_score
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }
}

/// Running total plus the reasons trail, in firing order
struct Tally {
    score: f64,
    reasons: Vec<String>,
}

impl Tally {
    fn new() -> Self {
        Self {
            score: BASE_SCORE,
            reasons: Vec::new(),
        }
    }

    fn apply(&mut self, delta: f64, reason: String) {
        self.score += delta;
        self.reasons.push(reason);
    }
}

/// Score every player and rank them by confidence, highest first.
/// Equal scores are ordered by player id ascending.
pub fn evaluate(snapshots: &[PlayerSnapshot]) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = snapshots.iter().map(score_player).collect();
    recommendations.sort_by(|a, b| {
        b.confidence_score
            .total_cmp(&a.confidence_score)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    recommendations
}

/// Score a single player in isolation
pub fn score_player(player: &PlayerSnapshot) -> Recommendation {
    let mut tally = Tally::new();

    apply_schedule(&mut tally, player);
    if let Some(ref injury) = player.injury {
        apply_injury(&mut tally, &injury.status, injury.description.as_deref());
    }
    if let Some(ref stats) = player.stats {
        apply_stats(&mut tally, stats);
    }

    Recommendation::new(player.id, player.name.clone(), tally.score, tally.reasons)
}

fn apply_schedule(tally: &mut Tally, player: &PlayerSnapshot) {
    match player.game_today {
        Some(ref game) if game.has_game => {
            let opponent = game.opponent.as_deref().unwrap_or(MISSING_FIXTURE_FIELD);
            let time = game.time.as_deref().unwrap_or(MISSING_FIXTURE_FIELD);
            tally.apply(GAME_TODAY_BONUS, format!("Playing vs {} at {}", opponent, time));
        }
        _ => tally.apply(NO_GAME_PENALTY, "No game scheduled today".to_string()),
    }
}

fn apply_injury(tally: &mut Tally, status: &InjuryStatus, description: Option<&str>) {
    let detail = description.unwrap_or(MISSING_INJURY_DETAIL);
    match status {
        InjuryStatus::Healthy => tally.apply(HEALTHY_BONUS, "Fully healthy".to_string()),
        InjuryStatus::Questionable => {
            tally.apply(QUESTIONABLE_PENALTY, format!("Questionable: {}", detail))
        }
        InjuryStatus::Doubtful => tally.apply(DOUBTFUL_PENALTY, format!("Doubtful: {}", detail)),
        InjuryStatus::Out => tally.apply(OUT_PENALTY, format!("Out: {}", detail)),
        InjuryStatus::Unrecognized(_) => {}
    }
}

fn apply_stats(tally: &mut Tally, stats: &StatLine) {
    if stats.points > SCORER_PPG {
        tally.apply(SCORER_BONUS, format!("Strong scorer ({:.1} PPG)", stats.points));
    }

    if stats.field_goal_percentage > EFFICIENT_FG_PCT {
        tally.apply(
            EFFICIENT_BONUS,
            format!("Efficient shooter ({:.1}% FG)", stats.field_goal_percentage),
        );
    }

    if stats.rebounds > ALL_AROUND_REBOUNDS && stats.assists > ALL_AROUND_ASSISTS {
        tally.apply(ALL_AROUND_BONUS, "Well-rounded stat line".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InjuryRecord, ScheduleEntry};

    fn player(id: i64) -> PlayerSnapshot {
        PlayerSnapshot {
            id,
            name: format!("Player {}", id),
            team: "LAL".to_string(),
            position: "SF".to_string(),
            is_starting: false,
            stats: None,
            injury: None,
            game_today: None,
        }
    }

    fn game(opponent: &str, time: &str) -> Option<ScheduleEntry> {
        Some(ScheduleEntry {
            has_game: true,
            opponent: Some(opponent.to_string()),
            time: Some(time.to_string()),
            is_home_game: true,
        })
    }

    fn injury(status: &str, description: Option<&str>) -> Option<InjuryRecord> {
        Some(InjuryRecord {
            status: InjuryStatus::parse(status),
            description: description.map(str::to_string),
        })
    }

    #[test]
    fn test_no_game_no_extras_sits() {
        let mut p = player(1);
        p.game_today = Some(ScheduleEntry {
            has_game: false,
            ..Default::default()
        });
        let rec = score_player(&p);
        assert_eq!(rec.confidence_score(), 10.0);
        assert_eq!(rec.verdict(), Verdict::Sit);
        assert_eq!(rec.reasons(), ["No game scheduled today"]);
    }

    #[test]
    fn test_absent_schedule_counts_as_no_game() {
        let rec = score_player(&player(1));
        assert_eq!(rec.confidence_score(), 10.0);
        assert_eq!(rec.reasons(), ["No game scheduled today"]);
    }

    #[test]
    fn test_no_game_ignores_stale_opponent() {
        let mut p = player(1);
        p.game_today = Some(ScheduleEntry {
            has_game: false,
            opponent: Some("BOS".to_string()),
            time: Some("7:00 PM".to_string()),
            is_home_game: true,
        });
        let rec = score_player(&p);
        assert_eq!(rec.reasons(), ["No game scheduled today"]);
    }

    #[test]
    fn test_everything_fires_and_clamps_to_100() {
        let mut p = player(2);
        p.game_today = game("GSW", "7:30 PM");
        p.injury = injury("Healthy", None);
        p.stats = Some(StatLine {
            points: 30.0,
            field_goal_percentage: 55.0,
            rebounds: 8.0,
            assists: 6.0,
            ..Default::default()
        });
        let rec = score_player(&p);
        assert_eq!(rec.confidence_score(), 100.0);
        assert_eq!(rec.verdict(), Verdict::Start);
        assert_eq!(
            rec.reasons(),
            [
                "Playing vs GSW at 7:30 PM",
                "Fully healthy",
                "Strong scorer (30.0 PPG)",
                "Efficient shooter (55.0% FG)",
                "Well-rounded stat line",
            ]
        );
    }

    #[test]
    fn test_out_player_sits() {
        let mut p = player(5);
        p.game_today = game("BOS", "7:00 PM");
        p.injury = injury("Out", Some("Knee injury"));
        let rec = score_player(&p);
        assert_eq!(rec.confidence_score(), 20.0);
        assert_eq!(rec.verdict(), Verdict::Sit);
        assert_eq!(rec.reasons(), ["Playing vs BOS at 7:00 PM", "Out: Knee injury"]);
    }

    #[test]
    fn test_unrecognized_injury_is_ignored() {
        let mut p = player(7);
        p.game_today = game("DAL", "8:30 PM");
        p.injury = injury("Day-to-Day", Some("Hamstring"));
        p.stats = Some(StatLine {
            points: 26.0,
            ..Default::default()
        });
        let rec = score_player(&p);
        assert_eq!(rec.confidence_score(), 80.0);
        assert_eq!(
            rec.reasons(),
            ["Playing vs DAL at 8:30 PM", "Strong scorer (26.0 PPG)"]
        );
    }

    #[test]
    fn test_padded_injury_status_is_ignored() {
        let mut p = player(5);
        p.game_today = game("BOS", "7:00 PM");
        p.injury = injury(" out ", Some("Knee injury"));
        let rec = score_player(&p);
        assert_eq!(rec.confidence_score(), 70.0);
        assert_eq!(rec.reasons(), ["Playing vs BOS at 7:00 PM"]);
    }

    #[test]
    fn test_empty_injury_status_is_ignored() {
        let mut p = player(4);
        p.game_today = game("MIL", "8:00 PM");
        p.injury = injury("", None);
        let rec = score_player(&p);
        assert_eq!(rec.confidence_score(), 70.0);
        assert_eq!(rec.reasons().len(), 1);
    }

    #[test]
    fn test_injury_deltas() {
        let cases = [
            ("questionable", "Questionable: Ankle soreness", 55.0),
            ("DOUBTFUL", "Doubtful: Ankle soreness", 40.0),
            ("Out", "Out: Ankle soreness", 20.0),
        ];
        for (status, reason, expected) in cases {
            let mut p = player(3);
            p.game_today = game("DEN", "9:00 PM");
            p.injury = injury(status, Some("Ankle soreness"));
            let rec = score_player(&p);
            assert_eq!(rec.confidence_score(), expected, "status {}", status);
            assert_eq!(rec.reasons()[1], reason);
        }
    }

    #[test]
    fn test_missing_details_use_placeholders() {
        let mut p = player(4);
        p.game_today = Some(ScheduleEntry {
            has_game: true,
            ..Default::default()
        });
        p.injury = injury("Questionable", None);
        let rec = score_player(&p);
        assert_eq!(rec.reasons(), ["Playing vs TBD at TBD", "Questionable: no details"]);
    }

    #[test]
    fn test_blank_fixture_fields_kept_verbatim() {
        let mut p = player(4);
        p.game_today = game("", "");
        let rec = score_player(&p);
        assert_eq!(rec.reasons(), ["Playing vs  at "]);
    }

    #[test]
    fn test_stat_thresholds_are_strict() {
        let mut p = player(6);
        p.game_today = game("SAS", "8:30 PM");
        p.stats = Some(StatLine {
            points: 25.0,
            field_goal_percentage: 50.0,
            rebounds: 7.0,
            assists: 9.0,
            ..Default::default()
        });
        let rec = score_player(&p);
        assert_eq!(rec.confidence_score(), 70.0);
        assert_eq!(rec.reasons().len(), 1);
    }

    #[test]
    fn test_rule_isolation() {
        let mut p = player(8);
        p.game_today = game("PHI", "7:00 PM");
        let rec = score_player(&p);
        assert_eq!(rec.reasons(), ["Playing vs PHI at 7:00 PM"]);
        assert_eq!(rec.confidence_score(), 70.0);
    }

    #[test]
    fn test_score_floor_at_zero() {
        let mut p = player(9);
        p.injury = injury("out", None);
        let rec = score_player(&p);
        // 50 - 40 - 50 = -40
        assert_eq!(rec.confidence_score(), 0.0);
        assert_eq!(rec.verdict(), Verdict::Sit);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(Verdict::from_score(50.0), Verdict::Start);
        assert_eq!(Verdict::from_score(49.999), Verdict::Sit);
        assert_eq!(Recommendation::new(1, "x".into(), 150.0, vec![]).confidence_score(), 100.0);
    }

    #[test]
    fn test_evaluate_ranks_descending_with_id_tiebreak() {
        let mut a = player(3);
        a.game_today = game("DEN", "9:00 PM");
        let b = player(1);
        let mut c = player(2);
        c.game_today = game("LAL", "7:30 PM");

        let ranked = evaluate(&[a, b, c]);
        let ids: Vec<i64> = ranked.iter().map(|r| r.player_id()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_evaluate_properties() {
        let mut players = Vec::new();
        let statuses = ["Healthy", "Questionable", "Doubtful", "Out", "GTD"];
        for i in 0..40i64 {
            let mut p = player(i);
            if i % 2 == 0 {
                p.game_today = game("BOS", "7:00 PM");
            }
            if i % 3 != 0 {
                p.injury = injury(statuses[(i as usize) % statuses.len()], Some("x"));
            }
            if i % 4 != 0 {
                p.stats = Some(StatLine {
                    points: (i as f64) * 0.9,
                    field_goal_percentage: 40.0 + i as f64 / 2.0,
                    rebounds: (i % 11) as f64,
                    assists: (i % 9) as f64,
                    ..Default::default()
                });
            }
            players.push(p);
        }

        let first = evaluate(&players);
        let second = evaluate(&players);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        assert_eq!(first.len(), players.len());

        let mut ids: Vec<i64> = first.iter().map(|r| r.player_id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..40).collect::<Vec<_>>());

        for rec in &first {
            assert!((0.0..=100.0).contains(&rec.confidence_score()));
            assert_eq!(rec.verdict() == Verdict::Start, rec.confidence_score() >= 50.0);
            assert!(!rec.reasons().is_empty());
        }
        for pair in first.windows(2) {
            assert!(pair[0].confidence_score() >= pair[1].confidence_score());
        }
    }

    #[test]
    fn test_evaluate_empty() {
        assert!(evaluate(&[]).is_empty());
    }

    #[test]
    fn test_wire_shape() {
        let mut p = player(5);
        p.name = "Joel Embiid".to_string();
        p.game_today = game("BOS", "7:00 PM");
        p.injury = injury("Out", Some("Knee injury"));
        let value = serde_json::to_value(score_player(&p)).unwrap();
        assert_eq!(value["playerId"], 5);
        assert_eq!(value["playerName"], "Joel Embiid");
        assert_eq!(value["recommendation"], "Sit");
        assert_eq!(value["confidenceScore"], 20.0);
        assert_eq!(value["reasons"][1], "Out: Knee injury");
    }
}
