//! Domain layer - booking logic with no infrastructure dependencies.

pub mod foundation;
pub mod session;
pub mod user;
