use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a poll operation may be rejected.
///
/// None of these are fatal: the poll is left exactly as it was and the caller
/// decides how to present the rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    /// An option label was empty after trimming.
    #[error("Option cannot be empty.")]
    EmptyOption,
    /// An option with this exact label already exists.
    #[error("Option \"{0}\" already exists.")]
    DuplicateOption(String),
    /// A vote referenced an option that does not exist.
    #[error("Option \"{0}\" does not exist.")]
    UnknownOption(String),
    /// This voter has already voted for this option.
    #[error("Voter {voter_id} has already voted for \"{option}\".")]
    DuplicateVote { option: String, voter_id: String },
}

impl PollError {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::EmptyOption => OutcomeKind::EmptyOption,
            Self::DuplicateOption(_) => OutcomeKind::DuplicateOption,
            Self::UnknownOption(_) => OutcomeKind::UnknownOption,
            Self::DuplicateVote { .. } => OutcomeKind::DuplicateVote,
        }
    }
}

/// A new option was added to the poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionAdded {
    /// The label as stored, i.e. after trimming.
    pub label: String,
}

impl Display for OptionAdded {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Option \"{}\" added to the poll.", self.label)
    }
}

/// A vote was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteCast {
    pub option: String,
    pub voter_id: String,
}

impl Display for VoteCast {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Voter {} voted for \"{}\".", self.voter_id, self.option)
    }
}

/// Structured status of a poll operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    OptionAdded,
    VoteCast,
    EmptyOption,
    DuplicateOption,
    UnknownOption,
    DuplicateVote,
    /// The request was incomplete, e.g. a missing voter ID.
    InvalidInput,
}

impl OutcomeKind {
    /// Whether this kind represents an accepted operation.
    pub fn is_success(self) -> bool {
        matches!(self, Self::OptionAdded | Self::VoteCast)
    }
}

/// The outcome of any poll operation, tagged with its kind so that callers
/// never need to inspect the message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub message: String,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.kind.is_success()
    }
}

impl From<OptionAdded> for Outcome {
    fn from(added: OptionAdded) -> Self {
        Self {
            kind: OutcomeKind::OptionAdded,
            message: added.to_string(),
        }
    }
}

impl From<VoteCast> for Outcome {
    fn from(cast: VoteCast) -> Self {
        Self {
            kind: OutcomeKind::VoteCast,
            message: cast.to_string(),
        }
    }
}

impl From<PollError> for Outcome {
    fn from(err: PollError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl<T: Into<Outcome>> From<Result<T, PollError>> for Outcome {
    fn from(result: Result<T, PollError>) -> Self {
        match result {
            Ok(success) => success.into(),
            Err(err) => err.into(),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(PollError::EmptyOption.to_string(), "Option cannot be empty.");
        assert_eq!(
            PollError::DuplicateOption("Turkey".to_string()).to_string(),
            "Option \"Turkey\" already exists."
        );
        assert_eq!(
            PollError::UnknownOption("Spain".to_string()).to_string(),
            "Option \"Spain\" does not exist."
        );
        assert_eq!(
            PollError::DuplicateVote {
                option: "Turkey".to_string(),
                voter_id: "traveler1".to_string(),
            }
            .to_string(),
            "Voter traveler1 has already voted for \"Turkey\"."
        );
    }

    #[test]
    fn outcome_from_result() {
        let accepted: Result<VoteCast, PollError> = Ok(VoteCast {
            option: "Morocco".to_string(),
            voter_id: "traveler2".to_string(),
        });
        let outcome = Outcome::from(accepted);
        assert_eq!(outcome.kind, OutcomeKind::VoteCast);
        assert_eq!(outcome.message, "Voter traveler2 voted for \"Morocco\".");
        assert!(outcome.is_success());

        let rejected: Result<OptionAdded, PollError> = Err(PollError::EmptyOption);
        let outcome = Outcome::from(rejected);
        assert_eq!(outcome.kind, OutcomeKind::EmptyOption);
        assert!(!outcome.is_success());
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        let outcome = Outcome::from(PollError::DuplicateOption("Algeria".to_string()));
        let json = rocket::serde::json::serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "duplicate_option");
        assert_eq!(json["message"], "Option \"Algeria\" already exists.");
    }
}
