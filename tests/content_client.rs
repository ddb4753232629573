//! HTTP content store against a mock query API.

mod common;

use common::mock_cms::{MockCms, MockResponse};
use common::http_store;
use folio::config::SecureString;
use folio::content::{ContentError, ContentStore, FetchErrorKind, HttpContentStore};
use folio::sections::{
    load_document, ContactDocument, LoadState, ProjectsDocument, SectionDocument,
};
use serde_json::json;

#[tokio::test]
async fn query_is_sent_as_groq_parameter() {
    let cms = MockCms::start().await;
    cms.set_document(
        "projects",
        MockResponse::document(json!({
            "title": "Projects",
            "description": "Things I built",
            "projectsList": [
                { "title": "Site", "description": "d", "image": null, "tags": ["React"], "link": "https://x" },
                { "title": "Tool", "description": null, "image": null, "tags": null, "link": null }
            ]
        })),
    )
    .await;

    let store = http_store(&cms.base_url());
    let state = load_document::<ProjectsDocument, _>(&store).await;
    let doc = state.document().expect("loaded");
    assert_eq!(doc.projects_list.len(), 2);
    assert_eq!(doc.projects_list[0].id, 1);
    assert_eq!(doc.projects_list[1].id, 2);
    assert!(doc.projects_list[1].tags.is_empty());

    let requests = cms.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/v2025-04-01/data/query/production");
    assert_eq!(
        requests[0].query.as_deref(),
        Some(ProjectsDocument::query().to_groq().as_str())
    );
    assert!(requests[0].header("authorization").is_none());
}

#[tokio::test]
async fn null_result_reads_as_none() {
    let cms = MockCms::start().await;
    let store = http_store(&cms.base_url());
    let value = store
        .fetch(&ContactDocument::query())
        .await
        .expect("request succeeds");
    assert!(value.is_none());
}

#[tokio::test]
async fn error_status_carries_description() {
    let cms = MockCms::start().await;
    cms.set_document("contact", MockResponse::error(401, "Unauthorized"))
        .await;
    let store = http_store(&cms.base_url());

    let err = store
        .fetch(&ContactDocument::query())
        .await
        .expect_err("status error");
    assert_eq!(err.kind(), FetchErrorKind::Failed);
    match err {
        ContentError::Status { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Unauthorized");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn failed_contact_load_keeps_fallback() {
    let cms = MockCms::start().await;
    cms.set_document("contact", MockResponse::json("not json"))
        .await;
    let store = http_store(&cms.base_url());

    let state = load_document::<ContactDocument, _>(&store).await;
    assert!(matches!(state, LoadState::Failed(ref msg) if msg.contains("contact")));
    let fallback = ContactDocument::fallback().expect("contact has fallback");
    assert_eq!(fallback.social_links.len(), 4);
}

#[tokio::test]
async fn token_is_sent_as_bearer() {
    let cms = MockCms::start().await;
    let mut config = common::config_for(&cms.base_url());
    config.content.token = Some(SecureString::new("sk-read".to_string()));
    let store = HttpContentStore::new(&config.content, &config.network).unwrap();

    let _ = store.fetch(&ContactDocument::query()).await;
    let requests = cms.captured_requests().await;
    assert_eq!(requests[0].header("authorization"), Some("Bearer sk-read"));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let port = common::free_port();
    let store = http_store(&format!("http://127.0.0.1:{port}"));
    let err = store
        .fetch(&ContactDocument::query())
        .await
        .expect_err("nothing listening");
    assert!(matches!(err, ContentError::Transport { .. }));
}
