use indexmap::{IndexMap, IndexSet};

use super::{
    outcome::{OptionAdded, PollError, VoteCast},
    results::{OptionTally, PollResults},
};

/// An in-memory poll: a set of uniquely labelled options, each holding the
/// set of voters that voted for it.
///
/// Options keep their insertion order. A voter may vote for any number of
/// different options, but only once per option.
///
/// The store has no internal synchronisation; shared users must serialise
/// access themselves, e.g. by wrapping it in a mutex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollStore {
    options: IndexMap<String, IndexSet<String>>,
}

impl PollStore {
    /// Create an empty poll.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new option with no votes.
    ///
    /// Surrounding whitespace is trimmed; the remaining label must be
    /// non-empty and must not exactly match an existing option.
    pub fn add_option(&mut self, label: &str) -> Result<OptionAdded, PollError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(PollError::EmptyOption);
        }
        if self.options.contains_key(label) {
            return Err(PollError::DuplicateOption(label.to_string()));
        }

        self.options.insert(label.to_string(), IndexSet::new());
        debug!("Added poll option \"{label}\"");
        Ok(OptionAdded {
            label: label.to_string(),
        })
    }

    /// Record a vote by `voter_id` for the option labelled `label`.
    ///
    /// The label must match an existing option exactly. Voting twice for the
    /// same option is rejected and leaves the poll unchanged.
    pub fn vote(&mut self, label: &str, voter_id: &str) -> Result<VoteCast, PollError> {
        let voters = self
            .options
            .get_mut(label)
            .ok_or_else(|| PollError::UnknownOption(label.to_string()))?;
        if !voters.insert(voter_id.to_string()) {
            return Err(PollError::DuplicateVote {
                option: label.to_string(),
                voter_id: voter_id.to_string(),
            });
        }

        debug!("Voter {voter_id} voted for \"{label}\"");
        Ok(VoteCast {
            option: label.to_string(),
            voter_id: voter_id.to_string(),
        })
    }

    /// Snapshot the current tallies.
    pub fn results(&self) -> PollResults {
        let tallies = self
            .options
            .iter()
            .map(|(label, voters)| OptionTally {
                label: label.clone(),
                votes: voters.len(),
            })
            .collect();
        PollResults {
            tallies,
            unique_voters: self.unique_voters(),
        }
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    /// Sum of all per-option vote counts.
    pub fn total_votes(&self) -> usize {
        self.options.values().map(IndexSet::len).sum()
    }

    /// Number of distinct voters across every option.
    pub fn unique_voters(&self) -> usize {
        self.options
            .values()
            .flatten()
            .collect::<IndexSet<_>>()
            .len()
    }

    /// Whether `voter_id` has voted for the option labelled `label`.
    pub fn has_voted(&self, label: &str, voter_id: &str) -> bool {
        self.options
            .get(label)
            .map_or(false, |voters| voters.contains(voter_id))
    }
}
