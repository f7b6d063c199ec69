//! Command handlers, one per service operation.

pub mod auth;
pub mod session;
