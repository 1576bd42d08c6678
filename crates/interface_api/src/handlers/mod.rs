//! Request handlers

pub mod health;
pub mod policies;
pub mod wizard;
