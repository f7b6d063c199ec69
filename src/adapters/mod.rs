//! Adapters - concrete implementations of the port contracts.

pub mod auth;
pub mod http;
pub mod postgres;
pub mod storage;
