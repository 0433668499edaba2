//! Request handlers.

pub mod greet;
pub mod health;
pub mod pages;
