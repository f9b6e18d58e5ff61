//! Request dispatch.
//!
//! Incoming requests are matched against an ordered route table rather
//! than a framework router so that path normalization, method folding,
//! and the error-to-status conversions stay in one observable place.
//! The first route whose path and method both match wins.

use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::error;

use crate::core::error::Result;
use crate::core::types::SENTINEL;
use crate::server::ServerState;

/// Runs of slashes collapse to one before route matching, so `//summary//`
/// and `/summary/` name the same route.
static REPEATED_SLASHES: Lazy<Regex> =
    Lazy::new(|| Regex::new("/+").expect("repeated-slash pattern is valid"));

const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";
const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// A complete response produced by the dispatch table.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

impl ApiResponse {
    /// A 200 plain-text response.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: CONTENT_TYPE_TEXT,
            body: body.into(),
        }
    }

    /// A 200 response carrying an already-serialized JSON body.
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: CONTENT_TYPE_JSON,
            body: body.into(),
        }
    }

    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            content_type: CONTENT_TYPE_TEXT,
            body: "400: Bad Request".to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            content_type: CONTENT_TYPE_TEXT,
            body: "404: Not Found".to_string(),
        }
    }

    pub fn internal_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            content_type: CONTENT_TYPE_TEXT,
            body: "500: Internal Error".to_string(),
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body,
        )
            .into_response()
    }
}

type RouteHandler = Box<dyn Fn(&ServerState) -> Result<ApiResponse> + Send + Sync>;

/// One entry in the dispatch table: an exact normalized path, an
/// uppercase method, and the handler that serves the pair.
pub struct Route {
    path: &'static str,
    method: &'static str,
    handler: RouteHandler,
}

impl Route {
    pub fn new(
        path: &'static str,
        method: &'static str,
        handler: impl Fn(&ServerState) -> Result<ApiResponse> + Send + Sync + 'static,
    ) -> Self {
        Self {
            path,
            method,
            handler: Box::new(handler),
        }
    }
}

/// Ordered route table over the shared server state.
pub struct DispatchTable {
    routes: Vec<Route>,
    state: Arc<ServerState>,
}

impl DispatchTable {
    /// Build the standard table: the identity probe at `/`, the reset
    /// acknowledgement at `/reset/`, and the summary payload at
    /// `/summary/`.
    pub fn new(state: Arc<ServerState>) -> Self {
        let routes = vec![
            Route::new("/", "GET", |_| Ok(ApiResponse::ok(SENTINEL))),
            Route::new("/reset/", "GET", |_| Ok(ApiResponse::ok("200: OK"))),
            Route::new("/summary/", "GET", |state| {
                Ok(ApiResponse::json(state.cache.body()))
            }),
        ];
        Self::with_routes(state, routes)
    }

    /// Build a table from an explicit route list.
    pub fn with_routes(state: Arc<ServerState>, routes: Vec<Route>) -> Self {
        Self { routes, state }
    }

    /// Resolve a raw request target and method to a response.
    ///
    /// The target is taken as received, including any query string, so a
    /// request for `/summary/?x=1` does not match the `/summary/` route.
    /// An empty target or method is a malformed request and answers 400.
    /// A handler failure is logged and converted to a 500 response; it
    /// never propagates to the connection.
    pub fn dispatch(&self, target: &str, method: &str) -> ApiResponse {
        if target.is_empty() || method.is_empty() {
            return ApiResponse::bad_request();
        }
        let path = REPEATED_SLASHES.replace_all(target, "/");
        let method = method.to_uppercase();

        for route in &self.routes {
            if route.method == method && route.path == path.as_ref() {
                return match (route.handler)(&self.state) {
                    Ok(response) => response,
                    Err(e) => {
                        error!(path = %path, error = %e, "Route handler failed");
                        ApiResponse::internal_error()
                    }
                };
            }
        }
        ApiResponse::not_found()
    }
}
