//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use noor_core::ContentDocument;
use noor_relay::PermissionRelay;
use sqlx::PgPool;

use crate::config::SiteConfig;
use crate::services::SummarizerClient;

/// How long a resolved content document may be served without a re-fetch.
const CONTENT_CACHE_TTL: Duration = Duration::from_secs(60);

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration. The
/// relay is injected here rather than being a global so tests can stand
/// up a state with a private channel.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    pool: PgPool,
    relay: PermissionRelay,
    summarizer: Option<SummarizerClient>,
    /// Page-keyed cache of remote content documents. `None` entries cache
    /// the absence of an override so missing documents don't defeat it.
    content_cache: Cache<String, Option<ContentDocument>>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the summarizer client cannot be built from the
    /// configuration.
    pub fn new(
        config: SiteConfig,
        pool: PgPool,
        relay: PermissionRelay,
    ) -> Result<Self, crate::services::SummarizerError> {
        let summarizer = config
            .summarizer
            .as_ref()
            .map(SummarizerClient::new)
            .transpose()?;

        let content_cache = Cache::builder()
            .max_capacity(64)
            .time_to_live(CONTENT_CACHE_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                relay,
                summarizer,
                content_cache,
            }),
        })
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
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

    /// Get the summarizer client, when configured.
    #[must_use]
    pub fn summarizer(&self) -> Option<&SummarizerClient> {
        self.inner.summarizer.as_ref()
    }

    /// Get a reference to the content document cache.
    #[must_use]
    pub fn content_cache(&self) -> &Cache<String, Option<ContentDocument>> {
        &self.inner.content_cache
    }
}
