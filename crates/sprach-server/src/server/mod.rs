//! HTTP front end.
//!
//! One `tiny_http` listener is shared by a fixed pool of worker threads. Each
//! worker pulls requests, hands them to [`router::route`] and writes the
//! response back with CORS headers for the configured origins.

pub mod deck;
mod response;
pub mod router;
#[cfg(test)]
mod test_support;

use std::io::Read;
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use sprach_config::ServerConfig;
use sprach_core::{Annotator, Dictionary};
use sprach_eval::Evaluator;
use tiny_http::{Header, Method, Request, Response, Server};

pub use deck::Deck;
pub use response::ApiResponse;

/// Evaluator with type-erased collaborators, shared by all workers.
pub type SharedEvaluator = Evaluator<Arc<dyn Annotator>, Arc<dyn Dictionary>>;

const ALLOWED_METHODS: &str = "GET, POST, DELETE, OPTIONS";

/// Largest request body accepted; anything longer is answered with 413.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Everything a request handler can reach.
pub struct AppState {
    pub evaluator: SharedEvaluator,
    pub deck: Deck,
    pub server: ServerConfig,
}

/// Bind and serve until every worker exits.
pub fn run(state: AppState) -> anyhow::Result<()> {
    let bind = state.server.bind.clone();
    let workers = state.server.workers;
    let server = Server::http(&bind)
        .map_err(|error| anyhow::anyhow!("failed to bind {bind}: {error}"))?;
    let server = Arc::new(server);
    let state = Arc::new(state);

    tracing::info!(%bind, workers, cards = state.deck.count(), "sprach listening");

    let handles = (0..workers)
        .map(|id| {
            let server = Arc::clone(&server);
            let state = Arc::clone(&state);
            thread::Builder::new()
                .name(format!("sprach-worker-{id}"))
                .spawn(move || serve_requests(&server, &state))
                .with_context(|| format!("failed to spawn worker {id}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    for handle in handles {
        if handle.join().is_err() {
            tracing::error!("worker thread panicked");
        }
    }
    Ok(())
}

fn serve_requests(server: &Server, state: &AppState) {
    for request in server.incoming_requests() {
        handle(request, state);
    }
}

fn handle(mut request: Request, state: &AppState) {
    let method = request.method().clone();
    let url = request.url().to_string();
    let origin = header_value(&request, "Origin");

    let api_response = match read_body(request.as_reader()) {
        Ok(body) => router::route(state, &method, &url, &body),
        Err(response) => response,
    };

    tracing::info!(%method, %url, status = api_response.status, "request");

    let preflight = method == Method::Options;
    let mut response = Response::from_string(api_response.body.unwrap_or_default())
        .with_status_code(api_response.status);
    if api_response.status != 204 {
        push_header(&mut response, "Content-Type", "application/json");
    }
    for (name, value) in cors_headers(&state.server, origin.as_deref(), preflight) {
        push_header(&mut response, name, &value);
    }

    if let Err(error) = request.respond(response) {
        tracing::warn!(%error, "failed to write response");
    }
}

/// Read at most [`MAX_BODY_BYTES`] of UTF-8 text.
fn read_body(reader: impl Read) -> Result<String, ApiResponse> {
    let mut bytes = Vec::new();
    reader
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|error| {
            tracing::warn!(%error, "failed to read request body");
            ApiResponse::error(400, "failed to read request body")
        })?;
    if bytes.len() as u64 > MAX_BODY_BYTES {
        return Err(ApiResponse::error(
            413,
            format!("request body exceeds {MAX_BODY_BYTES} bytes"),
        ));
    }
    String::from_utf8(bytes).map_err(|_| ApiResponse::error(400, "request body is not valid UTF-8"))
}

fn header_value(request: &Request, name: &'static str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv(name))
        .map(|h| h.value.as_str().to_string())
}

fn push_header<R: Read>(response: &mut Response<R>, name: &str, value: &str) {
    match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
        Ok(header) => response.add_header(header),
        Err(()) => tracing::warn!(name, "skipping invalid header"),
    }
}

/// CORS headers for a request from `origin`. Empty when the origin is absent
/// or not allowed.
pub fn cors_headers(
    config: &ServerConfig,
    origin: Option<&str>,
    preflight: bool,
) -> Vec<(&'static str, String)> {
    let Some(origin) = origin.filter(|o| config.allows_origin(o)) else {
        return Vec::new();
    };
    let mut headers = vec![
        ("Access-Control-Allow-Origin", origin.to_string()),
        ("Access-Control-Allow-Credentials", "true".to_string()),
        ("Vary", "Origin".to_string()),
    ];
    if preflight {
        headers.push(("Access-Control-Allow-Methods", ALLOWED_METHODS.to_string()));
        headers.push(("Access-Control-Allow-Headers", "Content-Type".to_string()));
    }
    headers
}
