// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::{is_candidate, meets_threshold};
pub use matcher::{Matcher, MatchResult};
pub use scoring::{calculate_match_score, shared_interests};
