//! The shared library for Fitcoach, a browser client for a fitness-class
//! registration service.
//!
//! This crate holds everything the frontend needs that does not touch the DOM:
//! the HTTP API client, wire data structures, the session model and store,
//! the login/signup/registration flows, error handling, logging, and macros.
//! It compiles for both wasm32 and native so the flow logic stays
//! unit-testable off-browser.

pub mod api;
pub mod data;
pub mod errors;
pub mod log;
pub mod macros;
pub mod service;
pub mod session;

pub use serde;
pub use serde_json;
pub use tracing;
