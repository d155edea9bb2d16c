use crate::error::WebhookError;
use crate::normalize;
use crate::store::EventStore;
use crate::verification::{self, SIGNATURE_HEADER};
use crate::view;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use chrono_tz::Tz;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared, read-only request context plus the event store.
#[derive(Clone)]
pub struct AppState {
    secret: Arc<[u8]>,
    timezone: Tz,
    store: Arc<EventStore>,
}

impl AppState {
    pub fn new(secret: impl Into<Arc<[u8]>>, timezone: Tz, store: Arc<EventStore>) -> Self {
        Self {
            secret: secret.into(),
            timezone,
            store,
        }
    }

    pub fn store(&self) -> &Arc<EventStore> {
        &self.store
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/webhook", get(handle_challenge).post(handle_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn start(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "webhook receiver listening");
    axum::serve(listener, build_router(state)).await
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(view::render_events(&state.store.snapshot()))
}

/// Nylas ownership handshake: echo `challenge` back untouched.
async fn handle_challenge(Query(params): Query<Vec<(String, String)>>) -> Response {
    // First occurrence wins when the key is repeated
    let challenge = params
        .into_iter()
        .find_map(|(key, value)| (key == "challenge").then_some(value));

    match challenge {
        Some(challenge) => {
            tracing::info!("Nylas connected to the webhook");
            challenge.into_response()
        }
        None => (StatusCode::BAD_REQUEST, "Missing challenge parameter").into_response(),
    }
}

async fn handle_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, WebhookError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok());

    let verified = match signature {
        Some(sig) => verification::verify(&body, &state.secret, sig),
        None => false,
    };

    if !verified {
        tracing::warn!(
            signature_present = signature.is_some(),
            body_len = body.len(),
            "webhook signature verification failed"
        );
        return Err(WebhookError::AuthenticationFailure);
    }

    let event = normalize::parse_envelope(&body)
        .and_then(|envelope| normalize::normalize(&envelope, state.timezone))
        .inspect_err(|e| tracing::warn!(error = %e, "rejecting webhook payload"))?;

    tracing::info!(
        id = %event.id,
        occurred_at = %event.occurred_at,
        from = %event.from_email,
        "received webhook"
    );
    state.store.append(event);

    Ok("Webhook received")
}
