//! A simple CLI tool for tallying a poll offline.
//! This applies a seed file to a fresh in-memory poll using the same core as
//! the server, so its output matches what the server would report.

use std::fmt::{Display, Formatter};

use clap::{Arg, ArgAction, ArgMatches, Command};

use poll_backend::model::{
    poll::{Outcome, PollResults, PollStore},
    seed::{SeedError, SeedSpec},
};

const PROGRAM_NAME: &str = "poll-cli";

const ABOUT_TEXT: &str = "Apply poll options and votes, then print the results.

EXIT CODES:
     0: Every operation was accepted.
   255: Ran successfully, but some operations were rejected.
 Other: Error.";

const SEED_PATH: &str = "SEED_PATH";

const SEED_PATH_HELP: &str = "Path to a JSON seed file of the form\n\
`{\"options\": [...], \"votes\": [{\"option\": ..., \"voter_id\": ...}]}`.\n\
If omitted, the built-in sample poll is used.";

/// Construct the CLI configuration.
fn cli() -> Command {
    // Make the build dirty when the toml changes.
    include_str!("../Cargo.toml");

    clap::command!(PROGRAM_NAME).about(ABOUT_TEXT).arg(
        Arg::new(SEED_PATH)
            .help(SEED_PATH_HELP)
            .action(ArgAction::Set)
            .required(false),
    )
}

/// Everything the tool reports after applying a seed.
#[derive(Debug, Clone, PartialEq)]
struct Report {
    outcomes: Vec<Outcome>,
    results: PollResults,
}

impl Report {
    fn all_accepted(&self) -> bool {
        self.outcomes.iter().all(Outcome::is_success)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for outcome in self.outcomes.iter() {
            let marker = if outcome.is_success() { "ok " } else { "ERR" };
            writeln!(f, "[{marker}] {outcome}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.results)?;
        writeln!(f)?;
        writeln!(f, "Total options: {}", self.results.total_options())?;
        writeln!(f, "Total votes: {}", self.results.total_votes())?;
        write!(f, "Unique voters: {}", self.results.unique_voters)
    }
}

/// Load the seed (or the sample) and apply it to an empty poll.
fn tally(path: Option<&str>) -> Result<Report, SeedError> {
    let seed = match path {
        Some(path) => SeedSpec::from_file(path)?,
        None => SeedSpec::sample(),
    };
    let mut poll = PollStore::new();
    let report = poll.seed(&seed);
    Ok(Report {
        outcomes: report.outcomes,
        results: poll.results(),
    })
}

/// Run the tool, returning the exit code.
fn run(args: &ArgMatches) -> u8 {
    let path = args.get_one::<String>(SEED_PATH).map(String::as_str);
    match tally(path) {
        Ok(report) => {
            println!("{report}");
            if report.all_accepted() {
                0
            } else {
                255
            }
        }
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}

fn main() {
    let args = cli().get_matches();
    let exit_code = run(&args);
    std::process::exit(exit_code.into())
}

#[cfg(test)]
mod tests {
    use poll_backend::model::poll::OutcomeKind;

    use super::*;

    #[test]
    fn sample() {
        let report = tally(None).unwrap();
        assert!(report.all_accepted());
        assert_eq!(
            report.results.pairs(),
            vec![("Turkey", 1), ("Morocco", 1), ("Algeria", 1)]
        );
    }

    #[test]
    fn travel_seed() {
        // This test actually enters backend code, so enable logging.
        log4rs_test_utils::test_logging::init_logging_once_for(["poll_backend"], None, None);

        let report = tally(Some("example_seeds/travel.json")).unwrap();
        assert!(report.all_accepted());
        assert_eq!(
            report.results.pairs(),
            vec![
                ("Turkey", 4),
                ("Morocco", 2),
                ("Algeria", 1),
                ("Tunisia", 0),
                ("Egypt", 1),
            ]
        );
        assert_eq!(report.results.total_votes(), 8);
        assert_eq!(report.results.unique_voters, 5);

        let text = report.to_string();
        assert!(text.contains("Poll Results:\nTurkey: 4 votes\n"));
        assert!(text.ends_with("Unique voters: 5"));
    }

    #[test]
    fn conflicting_seed() {
        let report = tally(Some("example_seeds/conflicting.json")).unwrap();
        assert!(!report.all_accepted());
        let rejected = report
            .outcomes
            .iter()
            .filter(|o| !o.is_success())
            .map(|o| o.kind)
            .collect::<Vec<_>>();
        assert_eq!(
            rejected,
            vec![
                OutcomeKind::DuplicateOption,
                OutcomeKind::DuplicateVote,
                OutcomeKind::UnknownOption,
            ]
        );
        assert!(report
            .to_string()
            .contains("[ERR] Option \"Spain\" does not exist."));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            tally(Some("example_seeds/missing.json")),
            Err(SeedError::Io(_))
        ));
    }

    #[test]
    fn correct_cli_usage() {
        let command_line = [PROGRAM_NAME];
        let args = cli().try_get_matches_from(command_line).unwrap();
        assert_eq!(run(&args), 0);

        let command_line = [PROGRAM_NAME, "example_seeds/travel.json"];
        let args = cli().try_get_matches_from(command_line).unwrap();
        assert_eq!(run(&args), 0);

        let command_line = [PROGRAM_NAME, "example_seeds/conflicting.json"];
        let args = cli().try_get_matches_from(command_line).unwrap();
        assert_eq!(run(&args), 255);

        let command_line = [PROGRAM_NAME, "example_seeds/malformed.json"];
        let args = cli().try_get_matches_from(command_line).unwrap();
        assert_eq!(run(&args), 1);

        let command_line = [PROGRAM_NAME, "not a real file"];
        let args = cli().try_get_matches_from(command_line).unwrap();
        assert_eq!(run(&args), 1);
    }

    #[test]
    fn bad_cli_usage() {
        let command_line = [PROGRAM_NAME, "this", "invocation", "is", "incorrect"];
        cli().try_get_matches_from(command_line).unwrap_err();
    }
}
