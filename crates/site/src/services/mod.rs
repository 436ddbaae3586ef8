//! External service clients for the site.

pub mod summarizer;

pub use summarizer::{SummarizerClient, SummarizerError};
