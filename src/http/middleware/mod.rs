//! Cross-cutting request middleware: CORS first, then body parsing, then
//! access logging.

pub mod access_log;
pub mod body;
pub mod cors;

pub use access_log::access_log_middleware;
pub use body::json_body_middleware;
pub use cors::{cors_middleware, CorsPolicy};
