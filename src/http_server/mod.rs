//! # submitdb HTTP Server Module
//!
//! Thin dispatch layer translating HTTP requests into submission store calls
//! and store results back into JSON responses.
//!
//! # Endpoints
//!
//! - `GET /ping` - liveness check
//! - `POST /submit` - append a record
//! - `GET /read?index=N` - fetch record N
//! - `PUT /edit?index=N` - replace record N
//! - `DELETE /delete?index=N` - remove record N
//! - `GET /search?query=Q` - substring filter across fields
//! - `GET /count` - total record count
//! - `GET /` - banner text

pub mod config;
pub mod errors;
pub mod server;
pub mod submission_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ErrorResponse};
pub use server::HttpServer;
pub use submission_routes::{submission_routes, SubmissionState};
