use rocket::{serde::json::Json, Route, State};

use crate::error::Result;
use crate::model::{api::option::NewOption, poll::Outcome};
use crate::SharedPoll;

pub fn routes() -> Vec<Route> {
    routes![list_options, add_option]
}

#[get("/options")]
async fn list_options(poll: &State<SharedPoll>) -> Json<Vec<String>> {
    let poll = poll.lock();
    Json(poll.labels().map(str::to_string).collect())
}

#[post("/options", data = "<new_option>", format = "json")]
async fn add_option(
    new_option: Json<NewOption>,
    poll: &State<SharedPoll>,
) -> Result<Json<Outcome>> {
    let added = poll.lock().add_option(&new_option.label)?;
    info!("Option \"{}\" added", added.label);
    Ok(Json(added.into()))
}
