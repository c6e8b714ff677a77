use serde::{Deserialize, Serialize};
use crate::models::requests::UserPayload;

/// Stored user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub email: String,
    pub city: String,
    pub interests: Vec<String>,
}

impl User {
    /// Build a user record from a validated payload and an assigned id
    pub fn from_payload(id: i64, payload: UserPayload) -> Self {
        Self {
            id,
            name: payload.name,
            age: payload.age,
            gender: payload.gender,
            email: payload.email,
            city: payload.city,
            interests: payload.interests,
        }
    }

    /// Replace every field except the id
    pub fn apply(&mut self, payload: UserPayload) {
        self.name = payload.name;
        self.age = payload.age;
        self.gender = payload.gender;
        self.email = payload.email;
        self.city = payload.city;
        self.interests = payload.interests;
    }
}

/// Candidate user together with its similarity to the target
#[derive(Debug, Clone)]
pub struct ScoredMatch {
    pub user: User,
    pub match_score: f64,
    pub shared_interests: Vec<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub interests: f64,
    pub city: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interests: 1.0,
            city: 0.0,
        }
    }
}

/// Scoring weights plus the inclusion threshold applied by the matcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPolicy {
    pub weights: ScoringWeights,
    /// Candidates sharing fewer interests than this are dropped
    pub min_shared_interests: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            min_shared_interests: 1,
        }
    }
}
