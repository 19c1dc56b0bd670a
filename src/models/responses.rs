use serde::{Deserialize, Serialize};

/// Body of a successful signup or removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResult {
    pub message: String,
}

impl SignupResult {
    pub fn signed_up(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("{} signed up for {}", email, activity_name),
        }
    }

    pub fn removed(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("{} removed from {}", email, activity_name),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub detail: String,
}
