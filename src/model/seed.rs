use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rocket::serde::json::serde_json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::poll::{Outcome, PollError, PollStore};

/// A single vote to apply while seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedVote {
    pub option: String,
    pub voter_id: String,
}

/// Options and votes to bulk-insert into a poll, e.g. for demos and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSpec {
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub votes: Vec<SeedVote>,
}

/// Errors loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse seed file: {0}")]
    Format(#[from] serde_json::Error),
}

impl SeedSpec {
    /// The sample poll: three destinations with one vote each.
    pub fn sample() -> Self {
        Self {
            options: vec![
                "Turkey".to_string(),
                "Morocco".to_string(),
                "Algeria".to_string(),
            ],
            votes: vec![
                SeedVote {
                    option: "Turkey".to_string(),
                    voter_id: "traveler1".to_string(),
                },
                SeedVote {
                    option: "Morocco".to_string(),
                    voter_id: "traveler2".to_string(),
                },
                SeedVote {
                    option: "Algeria".to_string(),
                    voter_id: "traveler3".to_string(),
                },
            ],
        }
    }

    /// Load a seed from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// What happened when a seed was applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Every outcome, in the order the operations were applied.
    pub outcomes: Vec<Outcome>,
    /// Operations that were rejected.
    pub rejected: Vec<PollError>,
}

impl SeedReport {
    /// Number of accepted operations.
    pub fn applied(&self) -> usize {
        self.outcomes.len() - self.rejected.len()
    }

    fn record<T: Into<Outcome>>(&mut self, result: Result<T, PollError>) {
        if let Err(ref err) = result {
            self.rejected.push(err.clone());
        }
        self.outcomes.push(result.into());
    }
}

impl PollStore {
    /// Apply all options and then all votes from `seed`.
    ///
    /// Rejected operations are logged and reported but do not stop seeding.
    pub fn seed(&mut self, seed: &SeedSpec) -> SeedReport {
        let mut report = SeedReport::default();
        for label in seed.options.iter() {
            report.record(self.add_option(label));
        }
        for vote in seed.votes.iter() {
            report.record(self.vote(&vote.option, &vote.voter_id));
        }

        for err in report.rejected.iter() {
            warn!("Seed operation rejected: {err}");
        }
        info!(
            "Seeded poll: {} operations applied, {} rejected",
            report.applied(),
            report.rejected.len()
        );
        report
    }
}
