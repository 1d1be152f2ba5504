use thiserror::Error;

use crate::session::Mode;

/// Everything that can go wrong during quiz play. `Persistence` errors are
/// logged and swallowed by the store so they never interrupt a session.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("invalid question file: {0}")]
    Format(String),
    #[error("no questions available for {0} mode")]
    EmptySelection(Mode),
    #[error("cannot {operation} while the session is {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
    #[error("mistake registry unavailable: {0}")]
    Persistence(String),
}
