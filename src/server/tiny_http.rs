//! tiny_http server adapter
//!
//! Binds the listener, runs a fixed pool of worker threads, and converts
//! between `tiny_http` requests/responses and [`Reply`].

use std::io::{Cursor, Read as _};
use std::sync::Arc;
use std::thread;

use log::{error, info, warn};
use ::tiny_http::{Header, Request, Response, Server, StatusCode};

use crate::api::{ApiError, ReceiptApi};
use crate::config::ServerConfig;

use super::{Reply, dispatch};

/// Start the HTTP service and block until every worker exits
pub fn serve(api: ReceiptApi, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.addr();
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server on {addr}: {e}"))?;
    info!("Listening on http://{addr} with {} worker(s)", config.workers);
    run(Arc::new(server), &api, config.workers)
}

/// Run `workers` threads that pull requests from a shared server
pub fn run(server: Arc<Server>, api: &ReceiptApi, workers: usize) -> anyhow::Result<()> {
    let handles = (0..workers)
        .map(|n| {
            let server = Arc::clone(&server);
            let api = api.clone();
            thread::Builder::new().name(format!("worker-{n}")).spawn(move || worker(&server, &api))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for handle in handles {
        handle.join().map_err(|_| anyhow::anyhow!("worker thread panicked"))?;
    }
    Ok(())
}

fn worker(server: &Server, api: &ReceiptApi) {
    loop {
        match server.recv() {
            Ok(mut request) => {
                let response = handle_request(api, &mut request);
                if let Err(e) = request.respond(response) {
                    warn!("Failed to send response: {e}");
                }
            },
            Err(e) => {
                error!("Listener failed: {e}");
                break;
            },
        }
    }
}

/// Handle one request end to end
pub fn handle_request(api: &ReceiptApi, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let method = request.method().clone();
    let url = request.url().to_string();

    let reply = match read_body(request) {
        Ok(body) => dispatch(api, &method, &url, &body),
        Err(e) => Reply::error(&e),
    };

    info!("{method} {url} -> {}", reply.status);
    into_response(reply)
}

// =============================================================================
// BODY PARSING
// =============================================================================

fn read_body(request: &mut Request) -> Result<String, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::malformed(format!("Failed to read request body: {e}")))?;
    Ok(body)
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

fn into_response(reply: Reply) -> Response<Cursor<Vec<u8>>> {
    let response =
        Response::from_data(reply.body.into_bytes()).with_status_code(StatusCode(reply.status));
    match Header::from_bytes("Content-Type", "application/json") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
