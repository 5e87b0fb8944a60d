//! Share client tests against a mocked service

use chrono::{TimeZone, Utc};
use codecard::{CodeSettings, CodeSnippet, ShareClient, ShareError, default_theme};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn sample_snippet() -> CodeSnippet {
    CodeSnippet {
        id: "local-1".to_string(),
        code: "def greet():\n    return \"hi\"\n".to_string(),
        language: "python".to_string(),
        title: Some("Greeter".to_string()),
        author: None,
        created_at: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
        theme: default_theme(),
        settings: CodeSettings::default(),
    }
}

#[tokio::test]
async fn create_returns_short_link() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/share/create")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"success":true,"shortId":"Ab3dEf9_","shareUrl":"https://cards.example.com/share/Ab3dEf9_"}"#,
        )
        .create_async()
        .await;

    let client = ShareClient::new(&server.url()).unwrap();
    let created = client.create(&sample_snippet()).await.unwrap();

    assert_eq!(created.short_id, "Ab3dEf9_");
    assert_eq!(created.share_url, "https://cards.example.com/share/Ab3dEf9_");
    mock.assert_async().await;
}

#[tokio::test]
async fn create_refuses_incomplete_snippet_without_io() {
    // No mock registered: a request would fail the test via the error path.
    let server = mockito::Server::new_async().await;
    let client = ShareClient::new(&server.url()).unwrap();

    let mut snippet = sample_snippet();
    snippet.code.clear();
    assert!(matches!(
        client.create(&snippet).await,
        Err(ShareError::IncompleteSnippet)
    ));

    let mut snippet = sample_snippet();
    snippet.language.clear();
    assert!(matches!(
        client.create(&snippet).await,
        Err(ShareError::IncompleteSnippet)
    ));
}

#[tokio::test]
async fn create_surfaces_service_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/share/create")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"could not allocate a short id"}"#)
        .create_async()
        .await;

    let client = ShareClient::new(&server.url()).unwrap();
    let err = client.create(&sample_snippet()).await.unwrap_err();
    match &err {
        ShareError::Service { status, message } => {
            assert_eq!(*status, 500);
            assert_eq!(message, "could not allocate a short id");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.is_transient());
}

#[tokio::test]
async fn fetch_rebuilds_snippet_from_record() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/share/Ab3dEf9_")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "success": true,
                "data": {
                    "id": "rec-1",
                    "short_id": "Ab3dEf9_",
                    "snippet_data": {
                        "code": "def greet():\n    return \"hi\"\n",
                        "language": "python",
                        "title": "",
                        "author": "ada",
                        "createdAt": "2026-08-01T12:00:00Z"
                    },
                    "created_at": "2026-08-02T09:30:00Z",
                    "view_count": 3
                }
            }"#,
        )
        .create_async()
        .await;

    let client = ShareClient::new(&server.url()).unwrap();
    let shared = client.fetch("Ab3dEf9_").await.unwrap().expect("record");

    assert_eq!(shared.snippet.id, "shared-Ab3dEf9_");
    assert_eq!(shared.snippet.language, "python");
    // Empty stored title means "untitled", not an empty string.
    assert_eq!(shared.snippet.title, None);
    assert_eq!(shared.snippet.author.as_deref(), Some("ada"));
    // The row's created_at wins over the payload's.
    assert_eq!(
        shared.snippet.created_at,
        Utc.with_ymd_and_hms(2026, 8, 2, 9, 30, 0).unwrap()
    );
    // Missing theme and settings fall back to the defaults.
    assert_eq!(shared.snippet.theme, default_theme());
    assert_eq!(shared.snippet.settings, CodeSettings::default());
    assert_eq!(shared.view_count, 3);
    assert_eq!(shared.last_viewed_at, None);
}

#[tokio::test]
async fn fetch_maps_not_found_and_expired_to_none() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/share/missing1")
        .with_status(404)
        .with_body(r#"{"error":"share link not found"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/share/expired1")
        .with_status(410)
        .with_body(r#"{"error":"share link expired"}"#)
        .create_async()
        .await;

    let client = ShareClient::new(&server.url()).unwrap();
    assert!(client.fetch("missing1").await.unwrap().is_none());
    assert!(client.fetch("expired1").await.unwrap().is_none());
}

#[tokio::test]
async fn fetch_refuses_malformed_short_id() {
    let server = mockito::Server::new_async().await;
    let client = ShareClient::new(&server.url()).unwrap();

    let err = client.fetch("nope").await.unwrap_err();
    assert!(matches!(err, ShareError::InvalidShortId(_)));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn fetch_drops_records_missing_required_fields() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/share/Ab3dEf9_")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"data":{"id":"rec-2","short_id":"Ab3dEf9_","snippet_data":{"code":"","language":"python"},"view_count":0}}"#,
        )
        .create_async()
        .await;

    let client = ShareClient::new(&server.url()).unwrap();
    assert!(client.fetch("Ab3dEf9_").await.unwrap().is_none());
}
