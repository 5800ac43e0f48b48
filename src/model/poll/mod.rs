pub mod outcome;
pub mod results;
pub mod store;

pub use outcome::{OptionAdded, Outcome, OutcomeKind, PollError, VoteCast};
pub use results::{OptionTally, PollResults};
pub use store::PollStore;
