#[macro_use]
extern crate rocket;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use parking_lot::Mutex;
use rocket::{Build, Rocket};

use crate::config::{ConfigFairing, PollFairing};
use crate::logging::LoggerFairing;
use crate::model::poll::PollStore;

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;

/// The poll as held in managed state. Every endpoint locks it for the
/// duration of a single operation.
pub type SharedPoll = Mutex<PollStore>;

/// Build a server whose poll is created and seeded from the configuration.
pub fn build() -> Rocket<Build> {
    rocket::build()
        .mount("/", api::routes())
        .attach(ConfigFairing)
        .attach(PollFairing)
        .attach(LoggerFairing)
}

/// Build a server around an existing poll, bypassing configured seeding.
pub fn rocket_for_store(poll: PollStore) -> Rocket<Build> {
    rocket::build()
        .mount("/", api::routes())
        .attach(ConfigFairing)
        .attach(LoggerFairing)
        .manage(SharedPoll::new(poll))
}
