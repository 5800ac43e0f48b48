use rocket::{
    fairing::{Fairing, Info, Kind},
    http::StatusClass,
    Data, Orbit, Request, Response, Rocket,
};
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::SharedPoll;

/// Identifies a single request in the logs, so that each response line can
/// be matched back to its request.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct RequestId(pub usize);

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl RequestId {
    /// Atomically allocate the next ID, wrapping to zero on overflow.
    pub fn next() -> RequestId {
        static NEXT_REQUEST_ID: AtomicUsize = AtomicUsize::new(0);
        RequestId(NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The ID cached for `req`, allocating one on first use.
    pub fn of<'r>(req: &'r Request<'_>) -> &'r RequestId {
        req.local_cache(RequestId::next)
    }
}

/// Describe the route that handled `req`, e.g. `add_option (/options)`.
fn route_name(req: &Request<'_>) -> String {
    match req.route() {
        Some(route) => match route.name {
            Some(ref name) => format!("{name} ({})", route.uri),
            None => route.uri.to_string(),
        },
        None => "UNKNOWN ROUTE".to_string(),
    }
}

/// Logs server lifecycle events and every request/response pair.
#[derive(Debug, Copy, Clone)]
pub struct LoggerFairing;

#[rocket::async_trait]
impl Fairing for LoggerFairing {
    fn info(&self) -> Info {
        Info {
            name: "Logger",
            kind: Kind::Liftoff | Kind::Request | Kind::Response | Kind::Shutdown,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let protocol = if rocket.config().tls_enabled() {
            "https"
        } else {
            "http"
        };
        let ip = &rocket.config().address;
        let port = &rocket.config().port;
        info!("Server launched on {protocol}://{ip}:{port}");
        if let Some(poll) = rocket.state::<SharedPoll>() {
            let poll = poll.lock();
            info!(
                "Serving poll with {} options and {} votes",
                poll.len(),
                poll.total_votes()
            );
        }
    }

    async fn on_request(&self, req: &mut Request<'_>, _data: &mut Data<'_>) {
        let id = RequestId::of(req);
        info!("->req{id} {} {}", req.method(), req.uri());
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let id = RequestId::of(req);
        let code = res.status();
        let log_msg = format!("<-rsp{id} {code} {}", route_name(req));
        match code.class() {
            StatusClass::ServerError => error!("{log_msg}"),
            StatusClass::ClientError => warn!("{log_msg}"),
            _ => info!("{log_msg}"),
        }
    }

    async fn on_shutdown(&self, _rocket: &Rocket<Orbit>) {
        warn!("Shutdown requested, stopping gracefully...");
    }
}

#[cfg(test)]
mod tests {
    use rocket::local::asynchronous::Client;

    use super::*;

    #[backend_test]
    async fn request_id_is_stable_per_request(client: Client) {
        let first = client.get("/options");
        let second = client.get("/results");

        let id = *RequestId::of(&first);
        assert_eq!(id, *RequestId::of(&first));
        assert_ne!(id, *RequestId::of(&second));
    }
}
