use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of create and update requests: every user field except the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserPayload {
    pub name: String,
    #[validate(range(min = 0, message = "age must be a non-negative integer"))]
    pub age: i32,
    pub gender: String,
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,
    pub city: String,
    pub interests: Vec<String>,
}
