//! HTTP surface for the quotd quote server.
//!
//! Axum router, shared state, and the three request handlers: the HTML
//! index page, the JSON refresh endpoint, and the health probe.

pub mod handlers;
pub mod page;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
