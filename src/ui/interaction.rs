//! User-facing prompts and notifications.

/// Immediate message shown to the user after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(message) | Notice::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Collaborator that asks the user before deletes and reports outcomes.
///
/// `confirm` blocks until the user answers, so the coordinator calls it off
/// the async workers.
pub trait Interaction: Send + Sync {
    fn confirm(&self, message: &str) -> bool;

    fn notify(&self, notice: Notice);
}
