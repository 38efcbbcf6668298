//! submitdb - a small, self-hostable submission record service
//!
//! An ordered collection of contact/registration records persisted in a
//! single flat JSON file, exposed over a thin HTTP API.

pub mod cli;
pub mod http_server;
pub mod store;
