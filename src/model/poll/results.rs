use std::fmt::{Display, Formatter};

/// Vote count for a single option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionTally {
    pub label: String,
    pub votes: usize,
}

/// A snapshot of the poll's tallies, in the order the options were added.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PollResults {
    pub tallies: Vec<OptionTally>,
    /// Number of distinct voters across all options.
    pub unique_voters: usize,
}

impl PollResults {
    /// Total votes across all options.
    pub fn total_votes(&self) -> usize {
        self.tallies.iter().map(|t| t.votes).sum()
    }

    pub fn total_options(&self) -> usize {
        self.tallies.len()
    }

    /// Share of all votes going to `tally`, as a percentage rounded to one
    /// decimal place. Zero if nobody has voted yet.
    pub fn percentage(&self, tally: &OptionTally) -> f64 {
        let total = self.total_votes();
        if total == 0 {
            return 0.0;
        }
        (tally.votes as f64 * 1000.0 / total as f64).round() / 10.0
    }

    /// `(label, votes)` pairs, in order.
    pub fn pairs(&self) -> Vec<(&str, usize)> {
        self.tallies
            .iter()
            .map(|t| (t.label.as_str(), t.votes))
            .collect()
    }
}

impl Display for PollResults {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Poll Results:")?;
        for tally in self.tallies.iter() {
            write!(f, "\n{}: {} votes", tally.label, tally.votes)?;
        }
        Ok(())
    }
}
