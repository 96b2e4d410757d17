//! HTTP surface for sign-up and sign-in
//!
//! Library exports for the binary and for the integration tests.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState, Storage};
