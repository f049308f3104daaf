//! HTTP API for Lightquest
//!
//! Endpoints:
//! - GET /health - Health check
//! - GET /stages - Stage catalog (prompts, options, expected answers)
//! - GET /stages/:id - One stage by slug
//! - GET /animation - Decorative header descriptor ({} if unavailable)
//! - POST /session/new - Create new session
//! - GET /session/:id - Get session state
//! - DELETE /session/:id - End session
//! - POST /session/:id/action - Dispatch one action, get a verdict

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::Config;
use crate::core::animation;
use crate::core::catalog::{standard_catalog, Catalog};
use crate::core::{SessionStore, StageController};
use crate::error::{QuestError, QuestResult};
use crate::types::{Action, SessionSnapshot, StageDefinition, StageId, Verdict};
use crate::TUBE_COUNT;

/// One browser session
#[derive(Debug)]
pub struct Session {
    pub id: String,
    pub store: SessionStore,
    /// Burn selection source, owned by this session only
    pub rng: StdRng,
    pub created_at: DateTime<Utc>,
    pub action_count: u64,
}

/// App state
pub struct AppState {
    pub sessions: RwLock<HashMap<String, Session>>,
    pub catalog: &'static Catalog,
    pub animation: Value,
    /// Seed every session's RNG with this (reproducible demos/tests)
    pub burn_seed: Option<u64>,
}

impl AppState {
    pub fn new(animation: Value, burn_seed: Option<u64>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            catalog: standard_catalog(),
            animation,
            burn_seed,
        }
    }

    fn new_rng(&self) -> StdRng {
        match self.burn_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Create new session response
#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: String,
    pub stage_count: usize,
}

/// Session status response
#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub action_count: u64,
    pub state: SessionSnapshot,
}

/// Action response
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub session_id: String,
    pub verdict: Verdict,
    pub banner: String,
    pub state: SessionSnapshot,
}

/// End session response
#[derive(Debug, Serialize)]
pub struct EndSessionResponse {
    pub session_id: String,
    pub action_count: u64,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions_active: usize,
    pub animation_loaded: bool,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for QuestError {
    fn into_response(self) -> Response {
        let status = match &self {
            QuestError::SessionNotFound { .. } | QuestError::StageNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            QuestError::TubeIndexOutOfRange { .. }
            | QuestError::UnknownCommand { .. }
            | QuestError::InvalidArguments { .. } => StatusCode::BAD_REQUEST,
            QuestError::Config { .. } | QuestError::Http(_) | QuestError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stages", get(list_stages))
        .route("/stages/:id", get(get_stage))
        .route("/animation", get(get_animation))
        .route("/session/new", post(create_session))
        .route("/session/:id", get(get_session).delete(end_session))
        .route("/session/:id/action", post(handle_action))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = state.sessions.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        sessions_active: sessions.len(),
        animation_loaded: state
            .animation
            .as_object()
            .map(|m| !m.is_empty())
            .unwrap_or(true),
    })
}

/// Stage catalog
async fn list_stages(State(state): State<Arc<AppState>>) -> Json<Vec<StageDefinition>> {
    Json(state.catalog.stages().to_vec())
}

/// One stage by slug
async fn get_stage(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> QuestResult<Json<StageDefinition>> {
    StageId::ALL
        .into_iter()
        .find(|id| id.slug() == slug)
        .and_then(|id| state.catalog.definition(id))
        .cloned()
        .map(Json)
        .ok_or(QuestError::StageNotFound { stage: slug })
}

/// Decorative animation descriptor
async fn get_animation(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(state.animation.clone())
}

/// Create new session with an initialized store
async fn create_session(State(state): State<Arc<AppState>>) -> Json<NewSessionResponse> {
    let session_id = uuid::Uuid::new_v4().to_string();
    let mut store = SessionStore::new();
    store.initialize();

    let session = Session {
        id: session_id.clone(),
        store,
        rng: state.new_rng(),
        created_at: Utc::now(),
        action_count: 0,
    };

    let mut sessions = state.sessions.write().await;
    sessions.insert(session_id.clone(), session);
    info!(session_id = %session_id, active = sessions.len(), "Session created");

    Json(NewSessionResponse {
        session_id,
        stage_count: state.catalog.stages().len(),
    })
}

/// Get session state
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> QuestResult<Json<SessionStatusResponse>> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| QuestError::SessionNotFound { session_id: id.clone() })?;

    Ok(Json(SessionStatusResponse {
        session_id: session.id.clone(),
        created_at: session.created_at,
        action_count: session.action_count,
        state: session.store.snapshot(),
    }))
}

/// End a session and drop its state
async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> QuestResult<Json<EndSessionResponse>> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .remove(&id)
        .ok_or_else(|| QuestError::SessionNotFound { session_id: id.clone() })?;
    info!(session_id = %session.id, active = sessions.len(), "Session ended");

    Ok(Json(EndSessionResponse {
        session_id: session.id,
        action_count: session.action_count,
    }))
}

/// Dispatch one action; the write lock serializes actions per session
async fn handle_action(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<Action>, JsonRejection>,
) -> QuestResult<Json<ActionResponse>> {
    let Json(action) =
        body.map_err(|rejection| QuestError::invalid_arguments("action", rejection.body_text()))?;
    if let Action::ToggleTube { index } = action {
        if index >= TUBE_COUNT {
            return Err(QuestError::TubeIndexOutOfRange {
                index,
                count: TUBE_COUNT,
            });
        }
    }

    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| QuestError::SessionNotFound { session_id: id.clone() })?;

    let controller = StageController::new(state.catalog);
    let verdict = controller.handle(&mut session.store, &mut session.rng, action);
    session.action_count += 1;

    Ok(Json(ActionResponse {
        session_id: session.id.clone(),
        banner: verdict.outcome.banner().to_string(),
        verdict,
        state: session.store.snapshot(),
    }))
}

/// Run the API server: fetch the decoration once, then serve
pub async fn run_server(config: &Config) -> QuestResult<()> {
    let animation =
        animation::load_optional(config.animation_url.as_deref(), config.fetch_timeout_ms).await;
    let state = Arc::new(AppState::new(animation, config.burn_seed));
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!(addr = %config.addr, "Lightquest API listening");
    println!("🌌 Lightquest API running on {}", config.addr);
    println!("  GET  /health              - Health check");
    println!("  GET  /stages              - Stage catalog");
    println!("  GET  /animation           - Header animation");
    println!("  POST /session/new         - Create session");
    println!("  GET  /stages/:id          - One stage");
    println!("  GET  /session/:id         - Session state");
    println!("  DELETE /session/:id       - End session");
    println!("  POST /session/:id/action  - Submit an action");
    axum::serve(listener, router).await?;
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
