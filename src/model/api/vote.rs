use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Request body for casting a vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRequest {
    /// Label of the chosen option.
    pub option: String,
    pub voter_id: String,
}

impl VoteRequest {
    /// Check that both fields were filled in, returning the trimmed voter ID.
    ///
    /// The option is passed through untouched since it must match an
    /// existing label exactly.
    pub fn validate(&self) -> Result<&str> {
        let voter_id = self.voter_id.trim();
        if voter_id.is_empty() {
            return Err(Error::BadRequest("Please enter your Voter ID".to_string()));
        }
        if self.option.is_empty() {
            return Err(Error::BadRequest("Please select an option".to_string()));
        }
        Ok(voter_id)
    }
}

#[cfg(test)]
impl VoteRequest {
    pub fn example() -> Self {
        Self {
            option: "Turkey".to_string(),
            voter_id: "traveler9".to_string(),
        }
    }
}
