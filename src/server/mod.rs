//! HTTP server adapters
//!
//! This module translates between HTTP and the HTTP-agnostic API layer.
//! Routing lives in [`dispatch`] so it can be exercised without sockets;
//! the `tiny_http` submodule owns the listener and worker threads.
//!
//! Routes:
//! - `POST /receipts/process` - submit a receipt, returns `{"id": ...}`
//! - `GET /receipts/{id}/points` - fetch points, returns `{"points": ...}`

pub mod tiny_http;

use serde::Serialize;

use ::tiny_http::Method;

use crate::api::{ApiError, ErrorBody, ReceiptApi, parse_receipt};

/// A routed response, before it is bound to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: String,
}

impl Reply {
    /// Build the error response for an [`ApiError`]
    #[must_use]
    pub fn error(error: &ApiError) -> Self {
        Self::json(&ErrorBody::from(error), error.status_code())
    }

    fn json<T: Serialize>(data: &T, status: u16) -> Self {
        let body = serde_json::to_string(data)
            .unwrap_or_else(|_| r#"{"error":{"code":"INTERNAL_ERROR","message":"serialization failed"}}"#.to_string());
        Self { status, body }
    }
}

/// Route a request to its handler
///
/// `url` may carry a query string, which is ignored. `body` is only read for
/// `POST /receipts/process`.
pub fn dispatch(api: &ReceiptApi, method: &Method, url: &str, body: &str) -> Reply {
    let path = url.split_once('?').map_or(url, |(p, _)| p);
    let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };

    if path == "/receipts/process" {
        return match method {
            Method::Post => handle_result(parse_receipt(body).and_then(|r| api.process_receipt(&r))),
            _ => method_not_allowed(method, path),
        };
    }

    if let Some(id) = points_route_id(path) {
        return match method {
            Method::Get => handle_result(api.get_points(id)),
            _ => method_not_allowed(method, path),
        };
    }

    Reply::error(&ApiError::not_found(format!("Endpoint not found: {method} {path}")))
}

/// Extract `{id}` from `/receipts/{id}/points`
fn points_route_id(path: &str) -> Option<&str> {
    path.strip_prefix("/receipts/")
        .and_then(|rest| rest.strip_suffix("/points"))
        .filter(|id| !id.is_empty() && !id.contains('/'))
}

fn method_not_allowed(method: &Method, path: &str) -> Reply {
    Reply::error(&ApiError::method_not_allowed(format!("{method} is not supported on {path}")))
}

/// Convert a handler result to a reply
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Reply {
    match result {
        Ok(data) => Reply::json(&data, 200),
        Err(e) => {
            if e.status_code() >= 500 {
                log::error!("{e}");
            } else {
                log::debug!("request rejected: {e}");
            }
            Reply::error(&e)
        },
    }
}
