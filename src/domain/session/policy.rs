//! Authorization policy for session operations.
//!
//! All role and ownership gates live in one place so the operations cannot
//! drift apart. Handlers call [`can_perform`] before running a transition.

use crate::domain::foundation::Actor;

use super::aggregate::Session;

/// Operation being attempted against a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Propose,
    Confirm,
    Reschedule,
    Unschedule,
    Delete,
    ListAll,
    ListOwn,
}

/// Uniform authorization gate.
///
/// `session` is `None` for actions that are not about an existing record
/// (propose, list). Ownership-gated actions must pass the loaded session.
pub fn can_perform(actor: &Actor, action: SessionAction, session: Option<&Session>) -> bool {
    match action {
        SessionAction::Propose => actor.is_requester(),
        SessionAction::Confirm | SessionAction::Unschedule | SessionAction::ListAll => {
            actor.is_approver()
        }
        SessionAction::Reschedule => {
            actor.is_approver()
                || session.is_some_and(|s| s.is_created_by(&actor.id))
        }
        SessionAction::Delete => session.is_some_and(|s| s.is_created_by(&actor.id)),
        SessionAction::ListOwn => true,
    }
}
