//! Web layer for the transit catalogue.
//!
//! Provides HTTP endpoints for stat queries, the network map and routing.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
