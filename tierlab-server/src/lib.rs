//! tierlab-server: HTTP API over a relational users store
//!
//! Three-tier reference service: health/readiness probes plus CRUD on a
//! single `users` table, backed by a Postgres connection pool.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{AppConfig, DbConfig};
pub use http::{run_server, ServerError};
