//! Fetch tests against a local mock server.
//!
//! The fetcher is blocking, so each call runs on the blocking pool.

use std::time::Duration;

use reptile::{select_all, select_one, text, FetchConfig, FetchError, Fetcher, ReptileError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"<html><head><title>Ranking</title></head><body>
<ol class="rank"><li>One</li><li>Two</li><li>Three</li></ol>
</body></html>"#;

fn test_fetcher() -> Fetcher {
    Fetcher::new(
        FetchConfig::default()
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("reptile-test"),
    )
    .unwrap()
}

async fn serve(server: &MockServer, route: &str, body: Vec<u8>, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_bytes(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_returns_transform_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rank"))
        .and(header("user-agent", "reptile-test"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&server)
        .await;
    let url = format!("{}/rank", server.uri());

    let items = tokio::task::spawn_blocking(move || {
        test_fetcher().fetch(&url, None, |doc| {
            let mut items = Vec::new();
            select_all(&*doc, "ol.rank>li", |li| items.push(text(li)))?;
            Ok::<_, ReptileError>(items)
        })
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(
        items,
        vec![
            Some("One".to_string()),
            Some("Two".to_string()),
            Some("Three".to_string())
        ]
    );
}

#[tokio::test]
async fn test_fetch_document_sets_base_url() {
    let server = MockServer::start().await;
    serve(&server, "/rank", PAGE.as_bytes().to_vec(), 200).await;
    let url = format!("{}/rank", server.uri());
    let expected = url.clone();

    // Document is not Send; read it on the blocking thread
    let (base_url, title) = tokio::task::spawn_blocking(move || {
        let doc = test_fetcher().fetch_document(&url, None)?;
        let title = select_one(&doc, "title", text)?.flatten();
        Ok::<_, ReptileError>((doc.base_url().map(|u| u.to_string()), title))
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(base_url, Some(expected));
    assert_eq!(title, Some("Ranking".to_string()));
}

#[tokio::test]
async fn test_fetch_with_explicit_encoding() {
    let server = MockServer::start().await;
    let (body, _, _) = encoding_rs::GBK.encode("<html><body><h1>斗破苍穹</h1></body></html>");
    serve(&server, "/gbk", body.into_owned(), 200).await;
    let url = format!("{}/gbk", server.uri());

    let title = tokio::task::spawn_blocking(move || {
        let gbk = reptile::document::encoding_for_label("gbk")?;
        test_fetcher().fetch(&url, Some(gbk), |doc| {
            Ok::<_, ReptileError>(select_one(&*doc, "h1", text)?.flatten())
        })
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(title, Some("斗破苍穹".to_string()));
}

#[tokio::test]
async fn test_fetch_not_found_is_fetch_error() {
    let server = MockServer::start().await;
    serve(&server, "/missing", Vec::new(), 404).await;
    let url = format!("{}/missing", server.uri());

    let result = tokio::task::spawn_blocking(move || {
        let mut called = false;
        let result = test_fetcher().fetch(&url, None, |_| {
            called = true;
            Ok::<_, ReptileError>(())
        });
        (result, called)
    })
    .await
    .unwrap();

    let (result, called) = result;
    assert!(!called);
    match result {
        Err(ReptileError::Fetch(FetchError::Status { status, .. })) => {
            assert_eq!(status.as_u16(), 404);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_rejects_oversized_body() {
    let server = MockServer::start().await;
    serve(&server, "/big", vec![b'x'; 4096], 200).await;
    let url = format!("{}/big", server.uri());

    let result = tokio::task::spawn_blocking(move || {
        Fetcher::new(FetchConfig::default().with_max_response_size(1024))
            .unwrap()
            .fetch_document(&url, None)
            .map(|_| ())
    })
    .await
    .unwrap();

    assert!(matches!(
        result,
        Err(FetchError::ResponseTooLarge { limit: 1024, .. })
    ));
}

#[tokio::test]
async fn test_transform_error_passes_through() {
    let server = MockServer::start().await;
    serve(&server, "/rank", PAGE.as_bytes().to_vec(), 200).await;
    let url = format!("{}/rank", server.uri());

    let result = tokio::task::spawn_blocking(move || {
        test_fetcher().fetch(&url, None, |doc| {
            select_one(&*doc, "h1", text)?
                .flatten()
                .ok_or_else(|| ReptileError::MissingField("h1".to_string()))
        })
    })
    .await
    .unwrap();

    assert!(matches!(result, Err(ReptileError::MissingField(f)) if f == "h1"));
}

#[tokio::test]
async fn test_fetch_unreachable_host() {
    // Port 9 (discard) on localhost is not served in the test environment
    let result = tokio::task::spawn_blocking(|| {
        Fetcher::new(FetchConfig::default().with_timeout(Duration::from_secs(2)))
            .unwrap()
            .fetch_document("http://127.0.0.1:9/", None)
            .map(|_| ())
    })
    .await
    .unwrap();

    assert!(matches!(result, Err(FetchError::Http(_))));
}
