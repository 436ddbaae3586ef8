//! JSON/streaming API routes consumed by the panel frontend.

pub mod events;
