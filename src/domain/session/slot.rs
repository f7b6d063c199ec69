//! Time slot value object and the overlap-conflict checker.
//!
//! Slots are half-open intervals `[start, end)`. Two slots overlap iff
//! `s1 < e2 && s2 < e1`; back-to-back slots (`e1 == s2`) do not conflict.
//! This is the sole comparison rule in the system.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Half-open time interval `[start, end)`.
///
/// # Invariants
///
/// - `start < end` (zero-duration and inverted intervals are rejected at
///   construction, so the overlap rule never sees them)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    start: Timestamp,
    end: Timestamp,
}

impl TimeSlot {
    /// Creates a slot, enforcing `start < end`.
    ///
    /// # Errors
    ///
    /// - `EmptyInterval` if `start >= end`
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, ValidationError> {
        if !start.is_before(&end) {
            return Err(ValidationError::EmptyInterval);
        }
        Ok(Self { start, end })
    }

    /// Returns the inclusive start instant.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Returns the exclusive end instant.
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Half-open overlap test. Symmetric; adjacency is not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start.is_before(&other.end) && other.start.is_before(&self.end)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Reports whether `candidate` overlaps any slot in `others`.
///
/// Pure and total over well-formed slots; the order of `others` cannot
/// affect the result. When checking an edit, the candidate's own prior
/// record must already be excluded from `others` by identity.
pub fn conflicts<'a>(
    candidate: &TimeSlot,
    others: impl IntoIterator<Item = &'a TimeSlot>,
) -> bool {
    others.into_iter().any(|other| candidate.overlaps(other))
}
