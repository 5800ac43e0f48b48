use rocket::{serde::json::Json, Route, State};

use crate::error::Result;
use crate::model::{api::vote::VoteRequest, poll::Outcome};
use crate::SharedPoll;

pub fn routes() -> Vec<Route> {
    routes![cast_vote]
}

#[post("/votes", data = "<vote>", format = "json")]
async fn cast_vote(
    vote: Json<VoteRequest>,
    poll: &State<SharedPoll>,
) -> Result<Json<Outcome>> {
    let voter_id = vote.validate()?;
    let cast = poll.lock().vote(&vote.option, voter_id)?;
    info!("Vote recorded for \"{}\"", cast.option);
    Ok(Json(cast.into()))
}
