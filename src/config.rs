use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rocket::{
    fairing::{Fairing, Info, Kind},
    Build, Rocket,
};
use serde::Deserialize;

use crate::model::{poll::PollStore, seed::SeedSpec};

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_seed_sample_data")]
    seed_sample_data: bool,
    #[serde(default)]
    seed_file: Option<PathBuf>,
}

fn default_seed_sample_data() -> bool {
    true
}

impl Config {
    /// Whether to insert the built-in sample options and votes at startup.
    /// Configured via `SEED_SAMPLE_DATA`.
    pub fn seed_sample_data(&self) -> bool {
        self.seed_sample_data
    }

    /// JSON seed file applied at startup, after the sample data.
    /// Configured via `SEED_FILE`.
    pub fn seed_file(&self) -> Option<&Path> {
        self.seed_file.as_deref()
    }
}

/// A fairing that loads the application config and puts it in managed state.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };

        // Manage the state.
        rocket = rocket.manage(config);
        Ok(rocket)
    }
}

/// A fairing that creates the poll, seeds it as configured, and places it
/// into managed state. Must be attached after [`ConfigFairing`].
pub struct PollFairing;

#[rocket::async_trait]
impl Fairing for PollFairing {
    fn info(&self) -> Info {
        Info {
            name: "Poll",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        let (seed_sample_data, seed_file) = match rocket.state::<Config>() {
            Some(config) => (
                config.seed_sample_data(),
                config.seed_file().map(Path::to_path_buf),
            ),
            None => {
                error!("Application config missing, cannot create poll");
                return Err(rocket);
            }
        };

        let mut poll = PollStore::new();
        if seed_sample_data {
            poll.seed(&SeedSpec::sample());
        }
        if let Some(path) = seed_file {
            info!("Loading seed file {}", path.display());
            match SeedSpec::from_file(&path) {
                Ok(seed) => {
                    poll.seed(&seed);
                }
                Err(e) => {
                    error!("{e}");
                    return Err(rocket);
                }
            }
        }
        info!("Poll ready with {} options", poll.len());

        // Manage the state.
        rocket = rocket.manage(Mutex::new(poll));
        Ok(rocket)
    }
}

#[cfg(test)]
mod tests {
    use rocket::{error::ErrorKind, figment::Figment, Ignite};

    use super::*;
    use crate::SharedPoll;

    async fn ignite_with(figment: Figment) -> Result<Rocket<Ignite>, rocket::Error> {
        crate::build().configure(figment).ignite().await
    }

    fn pairs(rocket: &Rocket<Ignite>) -> Vec<(String, usize)> {
        let poll = rocket.state::<SharedPoll>().unwrap().lock();
        poll.results()
            .tallies
            .into_iter()
            .map(|t| (t.label, t.votes))
            .collect()
    }

    fn travel_pairs() -> Vec<(String, usize)> {
        [
            ("Turkey", 4),
            ("Morocco", 2),
            ("Algeria", 1),
            ("Tunisia", 0),
            ("Egypt", 1),
        ]
        .into_iter()
        .map(|(label, votes)| (label.to_string(), votes))
        .collect()
    }

    #[rocket::async_test]
    async fn sample_seeded_by_default() {
        let rocket = ignite_with(rocket::Config::figment()).await.unwrap();
        assert!(rocket.state::<Config>().unwrap().seed_sample_data());
        assert_eq!(
            pairs(&rocket),
            vec![
                ("Turkey".to_string(), 1),
                ("Morocco".to_string(), 1),
                ("Algeria".to_string(), 1),
            ]
        );
    }

    #[rocket::async_test]
    async fn seeding_disabled() {
        let figment = rocket::Config::figment().merge(("seed_sample_data", false));
        let rocket = ignite_with(figment).await.unwrap();
        assert!(pairs(&rocket).is_empty());
    }

    #[rocket::async_test]
    async fn seed_file_only() {
        let figment = rocket::Config::figment()
            .merge(("seed_sample_data", false))
            .merge(("seed_file", "example_seeds/travel.json"));
        let rocket = ignite_with(figment).await.unwrap();
        assert_eq!(pairs(&rocket), travel_pairs());
    }

    #[rocket::async_test]
    async fn seed_file_after_sample() {
        // The sample options and votes are already present, so the file's
        // copies of them are rejected without aborting.
        let figment = rocket::Config::figment().merge(("seed_file", "example_seeds/travel.json"));
        let rocket = ignite_with(figment).await.unwrap();
        assert_eq!(pairs(&rocket), travel_pairs());
        let poll = rocket.state::<SharedPoll>().unwrap().lock();
        assert_eq!(poll.unique_voters(), 5);
    }

    #[rocket::async_test]
    async fn unreadable_seed_file_aborts_ignition() {
        let figment = rocket::Config::figment().merge(("seed_file", "example_seeds/missing.json"));
        let err = match ignite_with(figment).await {
            Ok(_) => panic!("Ignition should have failed"),
            Err(err) => err,
        };
        match err.kind() {
            ErrorKind::FailedFairings(failed) => {
                assert!(failed.iter().any(|info| info.name == "Poll"));
            }
            kind => panic!("Unexpected ignition error: {kind}"),
        }
    }

    #[rocket::async_test]
    async fn malformed_seed_file_aborts_ignition() {
        let figment = rocket::Config::figment().merge(("seed_file", "example_seeds/malformed.json"));
        let err = match ignite_with(figment).await {
            Ok(_) => panic!("Ignition should have failed"),
            Err(err) => err,
        };
        assert!(matches!(err.kind(), ErrorKind::FailedFairings(_)));
    }
}
