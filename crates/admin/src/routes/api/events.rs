//! Server-sent event stream of relayed permission errors.
//!
//! The panel's toast layer subscribes here; each relayed error arrives as
//! one `permission-error` event carrying the serialized payload.

use async_stream::stream;
use axum::{
    Router,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
};
use futures::Stream;
use tokio::sync::broadcast;

use noor_relay::PERMISSION_ERROR_EVENT;

use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Build the events router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/events", get(events))
}

/// GET /api/events - SSE stream of permission errors.
async fn events(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = std::result::Result<Event, std::convert::Infallible>>> {
    let mut receiver = state.relay().subscribe();

    let stream = stream! {
        loop {
            match receiver.recv().await {
                Ok(error) => {
                    match serde_json::to_string(&error) {
                        Ok(payload) => {
                            yield Ok(Event::default()
                                .event(PERMISSION_ERROR_EVENT)
                                .data(payload));
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "failed to serialize permission error");
                        }
                    }
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "events stream lagged behind the relay");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}
