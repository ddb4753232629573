use crate::contact::intent::SubmissionIntent;
use crate::contact::state::{SubmissionStatus, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use crate::ui::mvi::Reducer;

pub struct SubmissionReducer;

impl Reducer for SubmissionReducer {
    type State = SubmissionStatus;
    type Intent = SubmissionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            // Only the settling request clears Submitting.
            (SubmissionStatus::Submitting, SubmissionIntent::Edit) => SubmissionStatus::Submitting,
            (_, SubmissionIntent::Edit) => SubmissionStatus::Idle,
            (_, SubmissionIntent::Start) => SubmissionStatus::Submitting,
            (SubmissionStatus::Submitting, SubmissionIntent::Settle { ok: true }) => {
                SubmissionStatus::Succeeded(SUCCESS_MESSAGE.to_string())
            }
            (SubmissionStatus::Submitting, SubmissionIntent::Settle { ok: false }) => {
                SubmissionStatus::Failed(FAILURE_MESSAGE.to_string())
            }
            (other, SubmissionIntent::Settle { .. }) => other,
        }
    }
}
