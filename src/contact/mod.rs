//! Contact form controller: field edits, validation and the submission
//! state machine.
//!
//! The UI loop drives submissions in two halves: [`ContactForm::begin_submit`]
//! runs synchronously on a submit key press and hands back the payload to
//! send, and [`ContactForm::finish_submit`] applies the settled result when
//! it arrives as an event. [`ContactForm::submit`] chains both for callers
//! that can simply await.

pub mod form;
pub mod intent;
pub mod reducer;
pub mod state;
pub mod submit;

pub use form::{is_valid_email, validate, FieldErrors, FormField, FormState};
pub use intent::SubmissionIntent;
pub use reducer::SubmissionReducer;
pub use state::{SubmissionStatus, FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use submit::{FormSubmitter, HttpSubmitter, SubmitError};

use crate::sections::ContactDocument;
use crate::ui::mvi::Reducer;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    form: FormState,
    errors: FieldErrors,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    fn dispatch(&mut self, intent: SubmissionIntent) {
        self.status = SubmissionReducer::reduce(std::mem::take(&mut self.status), intent);
    }

    /// Replace `field`, clear its error and drop any settled notice.
    pub fn on_field_change(&mut self, field: FormField, value: impl Into<String>) {
        *self.form.get_mut(field) = value.into();
        self.errors.clear(field);
        self.dispatch(SubmissionIntent::Edit);
    }

    pub fn push_char(&mut self, field: FormField, ch: char) {
        let mut value = self.form.get(field).to_string();
        value.push(ch);
        self.on_field_change(field, value);
    }

    pub fn pop_char(&mut self, field: FormField) {
        let mut value = self.form.get(field).to_string();
        if value.pop().is_some() {
            self.on_field_change(field, value);
        }
    }

    /// Recompute every field error against the current input.
    pub fn validate(&mut self) -> bool {
        let (errors, valid) = validate(&self.form);
        self.errors = errors;
        valid
    }

    /// Validate and enter `Submitting`.
    ///
    /// Returns the payload to send, or `None` when a request is already in
    /// flight or validation failed (errors are then visible, status untouched).
    pub fn begin_submit(&mut self) -> Option<FormState> {
        if self.status.is_submitting() {
            tracing::debug!("Submit ignored, request already in flight");
            return None;
        }
        if !self.validate() {
            return None;
        }
        self.dispatch(SubmissionIntent::Start);
        Some(self.form.clone())
    }

    /// Apply the settled request. Success resets the form; failure keeps it.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        if !self.status.is_submitting() {
            return;
        }
        match result {
            Ok(()) => {
                tracing::info!("Contact form delivered");
                self.dispatch(SubmissionIntent::Settle { ok: true });
                self.form = FormState::default();
                self.errors = FieldErrors::default();
            }
            Err(err) => {
                tracing::warn!(error = %err, "Contact form submission failed");
                self.dispatch(SubmissionIntent::Settle { ok: false });
            }
        }
    }

    /// Validate and, if valid, send the form to `endpoint` and wait for it.
    pub async fn submit<S: FormSubmitter>(&mut self, submitter: &S, endpoint: &str) {
        let Some(payload) = self.begin_submit() else {
            return;
        };
        let result = submitter.submit(endpoint, &payload).await;
        self.finish_submit(result);
    }
}

/// Endpoint declared by the effective contact document, else `fallback`.
pub fn resolve_endpoint(document: Option<&ContactDocument>, fallback: &str) -> String {
    document
        .and_then(ContactDocument::endpoint)
        .unwrap_or(fallback)
        .to_string()
}
