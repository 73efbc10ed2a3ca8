use fsm_core::{Session, User};

/// Session lifecycle as a single explicit state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No session; tokens absent or purged.
    Anonymous,
    /// A restoration attempt is running.
    Restoring,
    /// A session is live; the user may still be stale if the last
    /// profile refresh failed softly.
    Authenticated(Session),
    /// The backend rejected the stored credentials outright; artifacts
    /// have been purged and the user must log in again.
    Failed { reason: String },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session().map(|s| &s.user)
    }
}
