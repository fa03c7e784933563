//! # pay-api
//!
//! HTTP API layer for payfast-redirect-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The `/initiate-payfast` redirect endpoint
//! - Return pages for the gateway callbacks
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/initiate-payfast` | Build a signed PayFast redirect URL |
//! | GET | `/success` | Return page after payment |
//! | GET | `/cancel` | Return page after cancellation |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
