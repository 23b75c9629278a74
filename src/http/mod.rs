//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing, timeout)
//!     → middleware/cors.rs (CORS headers, preflight short-circuit)
//!     → middleware/access_log.rs (method, path, timestamp)
//!     → request.rs (JSON body parsing)
//!     → handlers.rs (validate, synthesize)
//!     → response.rs (400/404 error bodies)
//!     → Send to client
//! ```

pub mod handlers;
pub mod index;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::JsonBody;
pub use response::ApiError;
pub use server::{AppState, HttpServer};
