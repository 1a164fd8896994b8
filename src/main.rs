//! MentalLink - emotional support chat API
//!
//! Backend for the MentalLink companion app. The core is Luna, a
//! rule-based support chatbot: keyword classification into emotion flows,
//! canned branching scripts, and escalation to trusted contacts or
//! professional help. Everything is stored locally; there is no AI model
//! and no outbound network traffic.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod conversation;
mod engine;
mod flows;
mod routes;
mod storage;

use config::Config;
use conversation::ChatSession;
use engine::{ChatEngine, TracingNotifier};
use storage::KvStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ChatEngine>,
    pub store: Arc<KvStore>,
    /// Transient per-session conversation contexts; the transcript itself
    /// lives in the store.
    pub sessions: Arc<Mutex<HashMap<String, ChatSession>>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mental_link=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let store = Arc::new(KvStore::new(&config.data_dir.join("mental-link.db")).await?);
    let engine = Arc::new(ChatEngine::new(Arc::new(TracingNotifier)));

    let state = AppState {
        engine,
        store,
        sessions: Arc::new(Mutex::new(HashMap::new())),
    };

    let app = Router::new()
        .merge(routes::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("🌙 MentalLink API running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
