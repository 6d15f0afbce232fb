//! HTTP surface for the response engine.

pub mod routes;

pub use routes::{app_router, AppState};
