use rocket::{http::Status, response::Responder, serde::json::Json, Request};
use thiserror::Error;

use crate::logging::RequestId;
use crate::model::poll::{Outcome, OutcomeKind, PollError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Poll(#[from] PollError),
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl Error {
    pub fn status(&self) -> Status {
        match self {
            Self::Poll(PollError::EmptyOption) | Self::BadRequest(_) => Status::BadRequest,
            Self::Poll(PollError::UnknownOption(_)) => Status::NotFound,
            Self::Poll(PollError::DuplicateOption(_) | PollError::DuplicateVote { .. }) => {
                Status::Conflict
            }
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> rocket::response::Result<'o> {
        let id = RequestId::of(req);
        let status = self.status();
        let outcome = match self {
            Self::Poll(err) => {
                debug!("req{id} rejected poll operation: {err}");
                Outcome::from(err)
            }
            Self::BadRequest(message) => {
                debug!("req{id} bad request: {message}");
                Outcome {
                    kind: OutcomeKind::InvalidInput,
                    message,
                }
            }
        };
        (status, Json(outcome)).respond_to(req)
    }
}
