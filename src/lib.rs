//! Slotline - meeting session booking backend.
//!
//! Requesters propose time-bounded sessions; approvers confirm them onto
//! a shared calendar. The core guarantees that no two confirmed sessions
//! overlap, using half-open intervals so back-to-back bookings are legal.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
