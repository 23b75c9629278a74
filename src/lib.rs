//! Fiscal Device Stub Library
//!
//! Simulates a cash register and a POS terminal behind a small REST
//! surface so client software can be integration-tested without fiscal
//! hardware or payment rails.

pub mod config;
pub mod devices;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::StubConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
