//! Shared plumbing for the typed CRUD screens.
//!
//! Programs, news, board members and organizational documents all edit one
//! collection of one payload type. Creates and updates are fire-and-forget
//! (202 with the id the record will have); deletes are confirmed in the UI
//! and therefore block until the store answers.

use axum::http::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::PgPool;

use noor_core::DocId;
use noor_relay::PermissionRelay;

use crate::db::{RepositoryError, detach_create, detach_update, documents};
use crate::error::{AppError, Result};

/// A typed payload together with its document id.
#[derive(Debug, Clone, Serialize)]
pub struct Keyed<T> {
    pub id: String,
    #[serde(flatten)]
    pub item: T,
}

/// Response for an accepted fire-and-forget write.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteAccepted {
    /// The id the record has (or will have) once the write lands.
    pub id: String,
}

/// List a collection as typed payloads, newest first.
pub async fn list_typed<T: DeserializeOwned>(
    pool: &PgPool,
    collection: &'static str,
) -> Result<Vec<Keyed<T>>> {
    let rows = documents::list_documents(pool, collection).await?;
    rows.into_iter()
        .map(|row| {
            let item = serde_json::from_value(row.data).map_err(|e| {
                AppError::Database(RepositoryError::DataCorruption(format!(
                    "{collection}/{}: {e}",
                    row.id
                )))
            })?;
            Ok(Keyed { id: row.id, item })
        })
        .collect()
}

/// Fetch one typed payload.
pub async fn get_typed<T: DeserializeOwned>(
    pool: &PgPool,
    collection: &'static str,
    id: &str,
) -> Result<Keyed<T>> {
    let row = documents::get_document(pool, collection, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{collection}/{id}")))?;

    let item = serde_json::from_value(row.data).map_err(|e| {
        AppError::Database(RepositoryError::DataCorruption(format!(
            "{collection}/{id}: {e}"
        )))
    })?;
    Ok(Keyed {
        id: id.to_string(),
        item,
    })
}

/// Validate and dispatch a fire-and-forget create.
pub fn accept_create<T: Serialize>(
    pool: PgPool,
    relay: PermissionRelay,
    collection: &'static str,
    item: &T,
) -> Result<(StatusCode, axum::Json<WriteAccepted>)> {
    let data = serde_json::to_value(item).map_err(|e| AppError::Internal(e.to_string()))?;
    let id = DocId::generate();
    let accepted = WriteAccepted { id: id.to_string() };

    detach_create(pool, relay, collection, id, data);
    Ok((StatusCode::ACCEPTED, axum::Json(accepted)))
}

/// Validate and dispatch a fire-and-forget merge-update.
pub fn accept_update<T: Serialize>(
    pool: PgPool,
    relay: PermissionRelay,
    collection: &'static str,
    id: String,
    item: &T,
) -> Result<(StatusCode, axum::Json<WriteAccepted>)> {
    let data = serde_json::to_value(item).map_err(|e| AppError::Internal(e.to_string()))?;
    let accepted = WriteAccepted { id: id.clone() };

    detach_update(pool, relay, collection, DocId::from_key(id), data);
    Ok((StatusCode::ACCEPTED, axum::Json(accepted)))
}

/// Blocking delete, mapped to 404 when the document is missing.
pub async fn delete_blocking(
    pool: &PgPool,
    collection: &'static str,
    id: &str,
) -> Result<StatusCode> {
    match documents::delete_document(pool, collection, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(RepositoryError::NotFound(what)) => Err(AppError::NotFound(what)),
        Err(err) => Err(AppError::Database(err)),
    }
}

/// Define the standard CRUD router for one `(path, collection, payload)`.
macro_rules! crud_routes {
    ($path:literal, $collection:expr, $payload:ty) => {
        use axum::{
            Json, Router,
            extract::{Path, State},
            http::StatusCode,
            routing::{get, put},
        };

        use crate::middleware::RequireAdmin;
        use crate::routes::crud::{self, Keyed, WriteAccepted};
        use crate::state::AppState;

        /// Build the router for this collection.
        pub fn router() -> Router<AppState> {
            Router::new()
                .route($path, get(list).post(create))
                .route(concat!($path, "/{id}"), put(update).delete(remove))
        }

        async fn list(
            RequireAdmin(_identity): RequireAdmin,
            State(state): State<AppState>,
        ) -> crate::error::Result<Json<Vec<Keyed<$payload>>>> {
            Ok(Json(crud::list_typed(state.pool(), $collection).await?))
        }

        async fn create(
            RequireAdmin(_identity): RequireAdmin,
            State(state): State<AppState>,
            Json(item): Json<$payload>,
        ) -> crate::error::Result<(StatusCode, Json<WriteAccepted>)> {
            crud::accept_create(
                state.pool().clone(),
                state.relay().clone(),
                $collection,
                &item,
            )
        }

        async fn update(
            RequireAdmin(_identity): RequireAdmin,
            State(state): State<AppState>,
            Path(id): Path<String>,
            Json(item): Json<$payload>,
        ) -> crate::error::Result<(StatusCode, Json<WriteAccepted>)> {
            crud::accept_update(
                state.pool().clone(),
                state.relay().clone(),
                $collection,
                id,
                &item,
            )
        }

        async fn remove(
            RequireAdmin(_identity): RequireAdmin,
            State(state): State<AppState>,
            Path(id): Path<String>,
        ) -> crate::error::Result<StatusCode> {
            crud::delete_blocking(state.pool(), $collection, &id).await
        }
    };
}

pub(crate) use crud_routes;
