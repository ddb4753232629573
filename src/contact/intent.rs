use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionIntent {
    /// A form field was edited.
    Edit,
    /// Validation passed and the request is about to be sent.
    Start,
    /// The request settled. `true` for a 2xx response.
    Settle { ok: bool },
}

impl Intent for SubmissionIntent {}
