//! API routes

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::conversation::{ChatSession, Message, MessageOption};
use crate::engine::{ChatEngine, TurnInput};
use crate::storage::{DiagnosisEntry, Language, StorageError, Theme, UserProfile};
use crate::AppState;

/// Idle contexts are dropped once the map holds this many sessions.
const MAX_SESSIONS: usize = 1024;
const SESSION_IDLE_HOURS: i64 = 1;

type SessionMap = HashMap<String, ChatSession>;

/// A panic while holding the session lock poisons it; the map itself is
/// still consistent, so recover the guard instead of propagating.
fn lock_sessions(sessions: &Mutex<SessionMap>) -> MutexGuard<'_, SessionMap> {
    sessions.lock().unwrap_or_else(PoisonError::into_inner)
}

fn prune_idle_sessions(sessions: &mut SessionMap, now: DateTime<Utc>) {
    if sessions.len() < MAX_SESSIONS {
        return;
    }
    let cutoff = now - chrono::Duration::hours(SESSION_IDLE_HOURS);
    sessions.retain(|_, session| session.last_active() > cutoff);
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    NotFound(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Storage(error) => {
                tracing::error!(%error, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
            ApiError::Invalid(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string()),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// -- chat ---------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatOptionRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub id: String,
    pub label: String,
    pub action: String,
}

#[derive(Debug, Serialize)]
pub struct ChatTurnResponse {
    pub session_id: String,
    /// Messages appended by this turn, transcript order. Empty for the
    /// blank-input no-op.
    pub messages: Vec<Message>,
}

async fn chat_message(
    State(state): State<AppState>,
    Json(request): Json<ChatMessageRequest>,
) -> Result<Json<ChatTurnResponse>, ApiError> {
    run_turn(state, request.session_id, TurnInput::Text(request.text)).await
}

async fn chat_option(
    State(state): State<AppState>,
    Json(request): Json<ChatOptionRequest>,
) -> Result<Json<ChatTurnResponse>, ApiError> {
    let option = MessageOption {
        id: request.id,
        label: request.label,
        action: request.action,
    };
    run_turn(state, request.session_id, TurnInput::Option(option)).await
}

async fn run_turn(
    state: AppState,
    session_id: Option<String>,
    input: TurnInput,
) -> Result<Json<ChatTurnResponse>, ApiError> {
    let session_id = session_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let profile = state.store.user_profile().await?;
    let history = state.store.chat_history().await?;
    let now = Utc::now();

    let (outcome, welcome) = {
        let mut sessions = lock_sessions(&state.sessions);
        prune_idle_sessions(&mut sessions, now);
        let session = sessions.entry(session_id.clone()).or_default();
        if let Some(last) = history.last() {
            session.observe_id(last.id);
        }

        // A fresh transcript is seeded with Luna's greeting before the
        // first turn lands.
        let welcome = history.is_empty().then(|| Message {
            id: session.next_id(now),
            text: ChatEngine::welcome_message(profile.as_ref()),
            is_bot: true,
            timestamp: now,
            options: None,
        });

        let outcome = state.engine.take_turn(session, input, profile.as_ref(), now);
        (outcome, welcome)
    };

    let mut appended = Vec::new();
    if let Some(welcome) = welcome {
        appended.push(welcome);
    }
    if let Some(outcome) = outcome {
        appended.push(outcome.user_message);
        appended.push(outcome.bot_message);

        if let Some(follow_up) = outcome.follow_up {
            // Fire-and-forget: the remark lands after its delay even when a
            // newer turn gets there first.
            let store = state.store.clone();
            let sessions = state.sessions.clone();
            let session_id = session_id.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(follow_up.delay_ms)).await;
                let now = Utc::now();
                let id = lock_sessions(&sessions)
                    .get_mut(&session_id)
                    .map(|session| session.next_id(now))
                    .unwrap_or_else(|| now.timestamp_millis());
                let message = Message {
                    id,
                    text: follow_up.text,
                    is_bot: true,
                    timestamp: now,
                    options: None,
                };
                if let Err(error) = store.append_chat_messages(&[message]).await {
                    tracing::warn!(%error, "failed to persist closing remark");
                }
            });
        }
    }

    if !appended.is_empty() {
        state.store.append_chat_messages(&appended).await?;
    }

    Ok(Json(ChatTurnResponse {
        session_id,
        messages: appended,
    }))
}

async fn chat_history(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ApiError> {
    let history = state.store.chat_history().await?;
    if !history.is_empty() {
        return Ok(Json(history));
    }

    let profile = state.store.user_profile().await?;
    let welcome = Message {
        id: Utc::now().timestamp_millis(),
        text: ChatEngine::welcome_message(profile.as_ref()),
        is_bot: true,
        timestamp: Utc::now(),
        options: None,
    };
    state.store.save_chat_history(std::slice::from_ref(&welcome)).await?;
    Ok(Json(vec![welcome]))
}

async fn clear_chat_history(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.store.clear_chat_history().await?;
    lock_sessions(&state.sessions).clear();
    Ok(StatusCode::NO_CONTENT)
}

// -- profile ------------------------------------------------------------

async fn get_profile(State(state): State<AppState>) -> Result<Json<UserProfile>, ApiError> {
    state
        .store
        .user_profile()
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("no profile registered"))
}

async fn put_profile(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<StatusCode, ApiError> {
    if !profile.is_registered() {
        return Err(ApiError::Invalid("firstName must not be empty".into()));
    }
    state.store.put_user_profile(&profile).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_profile(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.store.delete_user_profile().await?;
    Ok(StatusCode::NO_CONTENT)
}

// -- daily diagnosis ----------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DiagnosisRequest {
    pub mood: u8,
    pub energy: u8,
    pub stress: u8,
    pub sleep: u8,
    pub social: u8,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DiagnosisQuery {
    /// `YYYY-MM` calendar filter
    #[serde(default)]
    pub month: Option<String>,
}

async fn submit_diagnosis(
    State(state): State<AppState>,
    Json(request): Json<DiagnosisRequest>,
) -> Result<StatusCode, ApiError> {
    let scales = [
        ("mood", request.mood),
        ("energy", request.energy),
        ("stress", request.stress),
        ("sleep", request.sleep),
        ("social", request.social),
    ];
    for (name, value) in scales {
        if !(1..=10).contains(&value) {
            return Err(ApiError::Invalid(format!("{name} must be between 1 and 10")));
        }
    }

    let now = Utc::now();
    let entry = DiagnosisEntry {
        mood: request.mood,
        energy: request.energy,
        stress: request.stress,
        sleep: request.sleep,
        social: request.social,
        notes: request.notes,
        date: request
            .date
            .unwrap_or_else(|| now.format("%Y-%m-%d").to_string()),
        timestamp: now,
    };
    state.store.append_diagnosis(&entry).await?;
    Ok(StatusCode::CREATED)
}

async fn list_diagnosis(
    State(state): State<AppState>,
    Query(query): Query<DiagnosisQuery>,
) -> Result<Json<Vec<DiagnosisEntry>>, ApiError> {
    let mut entries = state.store.diagnosis_entries().await?;
    if let Some(month) = query.month {
        entries.retain(|entry| entry.date.starts_with(&month));
    }
    Ok(Json(entries))
}

// -- settings & data ----------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub theme: Option<Theme>,
    pub language: Option<Language>,
    pub onboarding_completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct SettingsRequest {
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub language: Option<Language>,
}

async fn get_settings(State(state): State<AppState>) -> Result<Json<SettingsResponse>, ApiError> {
    Ok(Json(SettingsResponse {
        theme: state.store.theme().await?,
        language: state.store.language().await?,
        onboarding_completed: state.store.onboarding_completed().await?,
    }))
}

async fn put_settings(
    State(state): State<AppState>,
    Json(request): Json<SettingsRequest>,
) -> Result<StatusCode, ApiError> {
    if let Some(theme) = request.theme {
        state.store.set_theme(theme).await?;
    }
    if let Some(language) = request.language {
        state.store.set_language(language).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn complete_onboarding(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.store.complete_onboarding().await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn export_data(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let user = state.store.user_profile().await?;
    let diagnosis = state.store.diagnosis_entries().await?;
    Ok(Json(json!({
        "user": user,
        "dailyDiagnosis": diagnosis,
        "exportDate": Utc::now(),
    })))
}

async fn delete_user_data(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.store.delete_user_data().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/v1/chat/message", post(chat_message))
        .route("/v1/chat/option", post(chat_option))
        .route(
            "/v1/chat/history",
            get(chat_history).delete(clear_chat_history),
        )
        .route(
            "/v1/profile",
            get(get_profile).put(put_profile).delete(delete_profile),
        )
        .route("/v1/diagnosis", post(submit_diagnosis).get(list_diagnosis))
        .route("/v1/settings", get(get_settings).put(put_settings))
        .route("/v1/onboarding/complete", post(complete_onboarding))
        .route("/v1/export", get(export_data))
        .route("/v1/data", delete(delete_user_data))
}
