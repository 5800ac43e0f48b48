use rocket::{serde::json::Json, Route, State};

use crate::model::api::results::ResultsDesc;
use crate::SharedPoll;

pub fn routes() -> Vec<Route> {
    routes![results, results_text]
}

#[get("/results")]
async fn results(poll: &State<SharedPoll>) -> Json<ResultsDesc> {
    let results = poll.lock().results();
    Json(results.into())
}

/// Plain-text dump of the tallies.
#[get("/results/text")]
async fn results_text(poll: &State<SharedPoll>) -> String {
    poll.lock().results().to_string()
}
