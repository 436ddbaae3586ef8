//! Application state shared across handlers.

use std::sync::Arc;

use noor_relay::PermissionRelay;
use sqlx::PgPool;

use crate::config::AdminConfig;
use crate::services::media::MediaStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    pool: PgPool,
    relay: PermissionRelay,
    media: MediaStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: AdminConfig, pool: PgPool, relay: PermissionRelay) -> Self {
        let media = MediaStore::new(
            config.media_root.clone(),
            config.media_public_base.clone(),
        );
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                relay,
                media,
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the permission-error relay.
    #[must_use]
    pub fn relay(&self) -> &PermissionRelay {
        &self.inner.relay
    }

    /// Get a reference to the blob store.
    #[must_use]
    pub fn media(&self) -> &MediaStore {
        &self.inner.media
    }
}
