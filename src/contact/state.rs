use crate::ui::mvi::UiState;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const FAILURE_MESSAGE: &str = "An error occurred. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// A request is in flight; further submits are ignored.
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl UiState for SubmissionStatus {}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Message shown under the form, if any.
    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::Succeeded(message) | Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
