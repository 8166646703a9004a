use std::sync::Arc;
use axum::{
    Router,
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode},
    response::{Html, Json},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::evaluator::{self, Recommendation};
use crate::model::{NbaGame, PlayerSnapshot};
use crate::roster::{Lineup, RosterSource, RosterStore};
use crate::sanitize;
use crate::schedule::ScheduleBook;

type ApiError = (StatusCode, Json<serde_json::Value>);

/// Web API server - roster, schedule and start/sit recommendations
pub struct WebServer {
    state: AppState,
    config: Arc<Config>,
}

#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterStore>,
    /// Snapshot provider for the evaluator; normally the roster store itself
    pub source: Arc<dyn RosterSource>,
    pub schedule: Arc<ScheduleBook>,
}

impl AppState {
    pub fn new(roster: Arc<RosterStore>, schedule: Arc<ScheduleBook>) -> Self {
        Self {
            source: roster.clone(),
            roster,
            schedule,
        }
    }
}

#[derive(Deserialize)]
struct PlayerQuery {
    team: Option<String>,
}

impl WebServer {
    pub fn new(state: AppState, config: Arc<Config>) -> Self {
        Self { state, config }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        if !self.config.web.enabled {
            info!("Web API disabled");
            return Ok(());
        }

        let app = router(self.state.clone(), &self.config)?;

        let addr = format!("{}:{}", self.config.web.address, self.config.web.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", addr, e))?;
        info!("🏀 Web API listening on http://{}", addr);

        axum::serve(listener, app).await?;
        Ok(())
    }
}

pub fn router(state: AppState, config: &Config) -> anyhow::Result<Router> {
    let mut app = Router::new()
        .route("/", get(dashboard))
        .route("/api/players", get(api_players))
        .route("/api/players/with-games-today", get(api_players_with_games_today))
        .route("/api/players/:id", get(api_player))
        .route("/api/roster", get(api_roster))
        .route("/api/roster/move-to-starting/:id", post(api_move_to_starting))
        .route("/api/roster/move-to-bench/:id", post(api_move_to_bench))
        .route("/api/schedule/today", get(api_schedule_today))
        .route("/api/analysis/start-sit-recommendations", get(api_recommendations));

    if let Some(ref dir) = config.web.client_dir {
        info!("Serving browser client from {}", dir);
        app = app.nest_service("/client", ServeDir::new(dir));
    }

    Ok(app.layer(cors_layer(&config.cors.allowed_origins)?).with_state(state))
}

fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o)
                .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

fn not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": "Player not found" })),
    )
}

/// Dashboard HTML - embedded single-page roster view
async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../../static/dashboard.html"))
}

/// All players, optionally narrowed to one team
async fn api_players(
    State(state): State<AppState>,
    Query(params): Query<PlayerQuery>,
) -> Json<Vec<PlayerSnapshot>> {
    match params.team.as_deref() {
        Some(team) => {
            debug!("Player list filtered by team {}", sanitize::for_log(team));
            Json(state.roster.filter_by_team(team))
        }
        None => Json(state.roster.all()),
    }
}

async fn api_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PlayerSnapshot>, ApiError> {
    state.roster.get(id).map(Json).ok_or_else(not_found)
}

async fn api_players_with_games_today(
    State(state): State<AppState>,
) -> Json<Vec<PlayerSnapshot>> {
    Json(state.roster.with_games_today())
}

async fn api_roster(State(state): State<AppState>) -> Json<Lineup> {
    Json(state.roster.lineup())
}

async fn api_move_to_starting(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.roster.move_to_starting(id) {
        return Err(not_found());
    }
    info!("Player {} moved to starting lineup", id);
    Ok(Json(serde_json::json!({ "message": "Player moved to starting lineup" })))
}

async fn api_move_to_bench(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.roster.move_to_bench(id) {
        return Err(not_found());
    }
    info!("Player {} moved to bench", id);
    Ok(Json(serde_json::json!({ "message": "Player moved to bench" })))
}

async fn api_schedule_today(State(state): State<AppState>) -> Json<Vec<NbaGame>> {
    Json(state.schedule.todays_games())
}

/// Ranked start/sit list. A roster that cannot be read is a 503, an empty
/// roster is just an empty list.
async fn api_recommendations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Recommendation>>, ApiError> {
    let players = state.source.list_all_players().map_err(|e| {
        error!("Roster unavailable for recommendations: {}", e);
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "message": "Roster is unavailable" })),
        )
    })?;

    let recommendations = evaluator::evaluate(&players);
    debug!("Evaluated {} players", recommendations.len());
    Ok(Json(recommendations))
}
