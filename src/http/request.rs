//! Request body parsing.
//!
//! # Responsibilities
//! - Parse JSON bodies before any route runs, unknown routes included
//! - Treat non-JSON and empty bodies as an empty object so generators can
//!   report their own field errors
//! - Reject malformed JSON and top-level scalars (strict mode)
//!
//! # Design Decisions
//! - [`parse_body`] runs once in middleware and stores the result as a
//!   request extension; [`JsonBody`] only reads it back
//! - Size limit comes from axum's `DefaultBodyLimit` layer
//! - Content type matching accepts `application/json` and `application/*+json`

use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, FromRequestParts, Request},
    http::{header, request::Parts, HeaderMap},
};
use serde_json::{Map, Value};
use std::convert::Infallible;

use crate::http::response::ApiError;

/// Parsed JSON request body.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

impl JsonBody {
    fn empty() -> Self {
        JsonBody(Value::Object(Map::new()))
    }
}

impl<S> FromRequestParts<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .remove::<JsonBody>()
            .unwrap_or_else(JsonBody::empty))
    }
}

/// Parse a JSON body into a [`JsonBody`] extension and hand back the request
/// with its bytes intact. Requests without a JSON content type pass through
/// untouched.
pub async fn parse_body(req: Request) -> Result<Request, ApiError> {
    if !declares_json(req.headers()) {
        return Ok(req);
    }

    let (parts, body) = req.into_parts();
    // Parts carry the DefaultBodyLimit extension that caps the read.
    let bytes = Bytes::from_request(Request::from_parts(parts.clone(), body), &()).await?;
    let parsed = decode(&bytes)?;

    let mut req = Request::from_parts(parts, Body::from(bytes));
    req.extensions_mut().insert(parsed);
    Ok(req)
}

fn decode(bytes: &[u8]) -> Result<JsonBody, ApiError> {
    if bytes.is_empty() {
        return Ok(JsonBody::empty());
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| ApiError::MalformedBody(e.to_string()))?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(JsonBody(value)),
        _ => Err(ApiError::MalformedBody(
            "ожидается JSON-объект или массив".to_string(),
        )),
    }
}

fn declares_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
