use std::fmt;

use tracing::Level;
use tracing::event;

/// Terminal state of one execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Succeeded,
    /// The budget ran out while the predicate still allowed retrying.
    Exhausted,
    /// The predicate refused to retry the latest error.
    Rejected,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Succeeded => write!(f, "succeeded"),
            Termination::Exhausted => write!(f, "exhausted"),
            Termination::Rejected => write!(f, "rejected"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryOutcome {
    pub termination: Termination,
    pub attempts: usize,
    pub max_attempts: usize,
}

impl RetryOutcome {
    pub fn success(&self) -> bool {
        self.termination == Termination::Succeeded
    }

    pub fn log(&self) {
        event!(
            Level::DEBUG,
            termination = %self.termination,
            attempts = self.attempts,
            max_attempts = self.max_attempts,
            "retry.outcome"
        );
    }
}
