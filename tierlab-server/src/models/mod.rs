//! Domain models and input validation

pub mod user;
pub mod validation;

pub use user::{NewUser, User};
pub use validation::ValidationError;
