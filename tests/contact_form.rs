//! Contact form submission against a mock form endpoint.

mod common;

use common::mock_cms::{MockCms, MockResponse};
use folio::config::NetworkConfig;
use folio::contact::{
    ContactForm, FormField, HttpSubmitter, SubmissionStatus, FAILURE_MESSAGE, SUCCESS_MESSAGE,
};

fn filled() -> ContactForm {
    let mut contact = ContactForm::new();
    contact.on_field_change(FormField::Name, "Ada Lovelace");
    contact.on_field_change(FormField::Email, "ada@example.com");
    contact.on_field_change(FormField::Message, "Hello there");
    contact
}

#[tokio::test]
async fn accepted_submission_resets_form() {
    let cms = MockCms::start().await;
    cms.enqueue_form_response(MockResponse::json(r#"{"ok": true}"#))
        .await;
    let submitter = HttpSubmitter::new(&NetworkConfig::default()).unwrap();

    let mut contact = filled();
    contact.submit(&submitter, &cms.form_url()).await;

    assert_eq!(
        contact.status(),
        &SubmissionStatus::Succeeded(SUCCESS_MESSAGE.to_string())
    );
    assert!(contact.form().name.is_empty());
    assert!(contact.form().email.is_empty());
    assert!(contact.form().message.is_empty());

    let requests = cms.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/f/test-form");
    assert_eq!(requests[0].header("accept"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "message": "Hello there"
        })
    );
}

#[tokio::test]
async fn rejected_submission_keeps_input() {
    let cms = MockCms::start().await;
    cms.enqueue_form_response(MockResponse::error(500, "boom"))
        .await;
    let submitter = HttpSubmitter::new(&NetworkConfig::default()).unwrap();

    let mut contact = filled();
    contact.submit(&submitter, &cms.form_url()).await;

    assert_eq!(
        contact.status(),
        &SubmissionStatus::Failed(FAILURE_MESSAGE.to_string())
    );
    assert_eq!(contact.form().name, "Ada Lovelace");
    assert_eq!(contact.form().message, "Hello there");
}

#[tokio::test]
async fn invalid_form_is_never_sent() {
    let cms = MockCms::start().await;
    let submitter = HttpSubmitter::new(&NetworkConfig::default()).unwrap();

    let mut contact = filled();
    contact.on_field_change(FormField::Email, "not-an-email");
    contact.submit(&submitter, &cms.form_url()).await;

    assert_eq!(contact.status(), &SubmissionStatus::Idle);
    assert_eq!(contact.errors().email, "Invalid email format");
    assert!(cms.captured_requests().await.is_empty());
}

#[tokio::test]
async fn editing_after_outcome_clears_notice() {
    let cms = MockCms::start().await;
    let submitter = HttpSubmitter::new(&NetworkConfig::default()).unwrap();

    let mut contact = filled();
    contact.submit(&submitter, &cms.form_url()).await;
    assert!(contact.status().notice().is_some());

    contact.push_char(FormField::Name, 'A');
    assert_eq!(contact.status(), &SubmissionStatus::Idle);
    assert!(contact.status().notice().is_none());
}
