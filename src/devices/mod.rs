//! Simulated device fleet.
//!
//! # Data Flow
//! ```text
//! JSON body
//!     → requests.rs (truthiness checks, first failure wins)
//!     → cash_register.rs / pos.rs / catalog.rs (response synthesis)
//!     → types.rs (camelCase response shapes)
//! ```
//!
//! # Design Decisions
//! - Generators are plain functions of the validated request and a [`Synth`]
//! - No state survives a request: shift ids, document numbers and totals
//!   are drawn fresh every call
//! - Echoed values keep the JSON representation the client sent

pub mod cash_register;
pub mod catalog;
pub mod error;
pub mod pos;
pub mod requests;
pub mod synth;
pub mod types;

pub use error::ValidationError;
pub use synth::Synth;
