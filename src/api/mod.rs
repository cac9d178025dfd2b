//! HTTP query API.
//!
//! Exposes the imaging metadata store as read-only HTTP endpoints. The
//! router is composable — `api_router()` returns a `Router` that can be
//! mounted on any axum server instance; `server` owns the bind/spawn/
//! shutdown lifecycle.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::{start_api_server, ApiServer};
pub use types::ApiContext;
