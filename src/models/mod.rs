// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{User, ScoredMatch, ScoringWeights, MatchPolicy};
pub use requests::UserPayload;
pub use responses::{HealthResponse, ErrorResponse, DeleteUserResponse};
