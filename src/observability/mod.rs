//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Middleware and handlers produce:
//!     → access log events (method, path, timestamp, status, latency)
//!     → payload events for mutating endpoints
//!     → tower-http spans carrying x-request-id
//!
//! Consumer:
//!     → logging.rs subscriber (stdout)
//! ```

pub mod logging;

pub use logging::init_logging;
