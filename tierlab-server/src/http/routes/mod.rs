//! Route handlers organized by resource

pub mod health;
pub mod root;
pub mod status;
pub mod users;
