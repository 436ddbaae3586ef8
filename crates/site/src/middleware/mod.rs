//! HTTP middleware stack for the site.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Rate limiting on the public form routes (governor)

pub mod rate_limit;

pub use rate_limit::form_rate_limiter;
