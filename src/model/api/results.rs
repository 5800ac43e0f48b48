use serde::{Deserialize, Serialize};

use crate::model::poll::PollResults;

/// API-friendly tally for a single option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionTallyDesc {
    pub label: String,
    pub votes: usize,
    /// Share of all votes, to one decimal place.
    pub percentage: f64,
}

/// API-friendly poll results, including the aggregate statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsDesc {
    pub options: Vec<OptionTallyDesc>,
    pub total_options: usize,
    pub total_votes: usize,
    pub unique_voters: usize,
}

impl From<PollResults> for ResultsDesc {
    fn from(results: PollResults) -> Self {
        let options = results
            .tallies
            .iter()
            .map(|tally| OptionTallyDesc {
                label: tally.label.clone(),
                votes: tally.votes,
                percentage: results.percentage(tally),
            })
            .collect();
        Self {
            options,
            total_options: results.total_options(),
            total_votes: results.total_votes(),
            unique_voters: results.unique_voters,
        }
    }
}
