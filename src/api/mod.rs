use rocket::Route;

mod options;
mod results;
mod votes;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(options::routes());
    routes.extend(votes::routes());
    routes.extend(results::routes());
    routes
}
