//! JSON body parsing middleware.
//! Runs ahead of routing so a malformed body fails every request the same
//! way, whether or not the matched handler reads it.

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::request::parse_body;

pub async fn json_body_middleware(req: Request<Body>, next: Next) -> Response {
    match parse_body(req).await {
        Ok(req) => next.run(req).await,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected request body");
            e.into_response()
        }
    }
}
