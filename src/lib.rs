//! Profile Match - user profile service with interest-based matching
//!
//! This library provides the user store, the match finder and the HTTP
//! routes that expose them.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Matcher, MatchResult};
pub use error::ApiError;
pub use models::{User, UserPayload, ScoredMatch, ScoringWeights, MatchPolicy};
pub use routes::{configure_routes, AppState};
pub use services::{InMemoryUserStore, PostgresUserStore, StoreError, UserStore};
