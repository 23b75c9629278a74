//! Routing subsystem.
//!
//! # Design Decisions
//! - Routes are method + exact path pairs; no wildcards or path parameters
//! - The table is static and shared by the router, the index page, the
//!   health report and the 404 listing
//! - Anything outside the table, wrong method included, gets the 404 fallback

pub mod table;

pub use table::{available_routes, Endpoint, Verb, ENDPOINTS};
