//! Relational store adapter
//!
//! Owns pool construction, the one-time schema bootstrap, and the
//! parameterized statements the handlers need. Stateless apart from the
//! bootstrap; failures surface as values, never retried here.

pub mod bootstrap;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::DbError;
