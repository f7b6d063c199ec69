//! SessionStatus enum for tracking the booking lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::StateMachine;

/// Lifecycle status of a booking session.
///
/// Valid transitions:
/// - Pending -> Scheduled (confirmation)
/// - Scheduled -> Canceled (unschedule)
///
/// Only `Scheduled` sessions occupy calendar time and participate in the
/// no-overlap invariant. `Canceled` is terminal; deletion is a destructive
/// operation, not a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Pending,
    Scheduled,
    Canceled,
}

impl SessionStatus {
    /// Returns true if a session in this status occupies calendar time.
    pub fn occupies_calendar(&self) -> bool {
        matches!(self, SessionStatus::Scheduled)
    }

    /// Stable string form used for persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Pending => "pending",
            SessionStatus::Scheduled => "scheduled",
            SessionStatus::Canceled => "canceled",
        }
    }
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!((self, target), (Pending, Scheduled) | (Scheduled, Canceled))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionStatus::*;
        match self {
            Pending => vec![Scheduled],
            Scheduled => vec![Canceled],
            Canceled => vec![],
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SessionStatus::Pending),
            "scheduled" => Ok(SessionStatus::Scheduled),
            "canceled" => Ok(SessionStatus::Canceled),
            other => Err(format!("Unknown session status: {}", other)),
        }
    }
}
