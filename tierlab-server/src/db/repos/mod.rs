//! Repository implementations for database access
//!
//! All statements are parameterized; conflicts and missing rows come back
//! as typed errors for the handler layer to map.

pub mod system;
pub mod users;

pub use system::{StoreStatus, SystemRepo};
pub use users::{DbError, UserRepo};
