//! HTTP adapter for authgate.
//!
//! Translates requests into [`AuthService`](crate::auth::AuthService)
//! calls and results into responses. Owns cookie mechanics entirely.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::{create_health_router, create_router};
pub use server::WebServer;
