//! URL-based extraction against a local HTTP server.

#![cfg(feature = "remote")]

use doctext::{
    DoctextError, ExtractedText, ExtractionConfig, Extractor, FetchConfig, extract_url, extract_url_sync, fetch_document,
};

mod helpers;

#[cfg(feature = "excel")]
use helpers::build_xlsx;
use helpers::{Route, serve};

#[tokio::test]
async fn test_content_type_header_selects_format() {
    let base = serve(vec![Route::ok("/data", Some("text/csv; charset=utf-8"), "h1,h2\nx,y\n")]).await;

    let text = extract_url(&format!("{}/data", base), &ExtractionConfig::default())
        .await
        .unwrap();
    assert_eq!(text, "x, y\n");
}

#[tokio::test]
async fn test_header_wins_over_extension() {
    let base = serve(vec![Route::ok("/file.csv", Some("text/plain"), "a,b\n1,2\n")]).await;

    let text = extract_url(&format!("{}/file.csv", base), &ExtractionConfig::default())
        .await
        .unwrap();
    assert_eq!(text, "a,b\n1,2\n");
}

#[cfg(feature = "excel")]
#[tokio::test]
async fn test_extension_used_without_header() {
    let workbook = build_xlsx(&[("S", vec![vec!["k", "v"]])]);
    let base = serve(vec![Route::ok("/files/book.xlsx", None, workbook)]).await;

    let text = extract_url(&format!("{}/files/book.xlsx?version=2", base), &ExtractionConfig::default())
        .await
        .unwrap();
    assert_eq!(text, "k,v\n");
}

#[tokio::test]
async fn test_unknown_mime_type() {
    let base = serve(vec![Route::ok("/download", None, "???")]).await;

    let err = fetch_document(&format!("{}/download", base), &FetchConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DoctextError::UnknownMimeType(_)));
}

#[tokio::test]
async fn test_non_200_status_is_error_with_code() {
    let base = serve(vec![Route::status("/missing.pdf", 404)]).await;

    let err = extract_url(&format!("{}/missing.pdf", base), &ExtractionConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DoctextError::HttpStatus { status: 404, .. }));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_other_2xx_is_rejected() {
    let base = serve(vec![Route {
        status: 201,
        ..Route::ok("/created.txt", Some("text/plain"), "body")
    }])
    .await;

    let err = extract_url(&format!("{}/created.txt", base), &ExtractionConfig::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("201"));
}

#[tokio::test]
async fn test_redirect_not_followed_by_default() {
    let base = serve(vec![
        Route {
            extra_headers: vec![("Location", "/target.txt")],
            ..Route::status("/moved.txt", 302)
        },
        Route::ok("/target.txt", Some("text/plain"), "arrived"),
    ])
    .await;

    let url = format!("{}/moved.txt", base);

    let err = extract_url(&url, &ExtractionConfig::default()).await.unwrap_err();
    assert!(matches!(err, DoctextError::HttpStatus { status: 302, .. }));

    let config = ExtractionConfig {
        fetch: FetchConfig {
            follow_redirects: true,
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(extract_url(&url, &config).await.unwrap(), "arrived");
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = extract_url(&format!("http://{}/x.txt", addr), &ExtractionConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DoctextError::Http { .. }));
}

#[tokio::test]
async fn test_extract_url_with_mime_reports_resolved_type() {
    let base = serve(vec![Route::ok("/data", Some("Text/CSV; charset=utf-8"), "h\nv\n")]).await;

    let extracted = Extractor::default()
        .extract_url_with_mime(&format!("{}/data", base))
        .await
        .unwrap();
    assert_eq!(
        extracted,
        ExtractedText {
            mime_type: "text/csv".to_string(),
            content: "v\n".to_string(),
        }
    );
}

#[tokio::test]
async fn test_connection_dropped_mid_body_is_http_error() {
    let base = serve(vec![Route {
        cut_after: Some(10),
        ..Route::ok("/partial.txt", Some("text/plain"), vec![b'a'; 100])
    }])
    .await;

    let err = extract_url(&format!("{}/partial.txt", base), &ExtractionConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DoctextError::Http { .. }), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn test_fetch_returns_bytes_and_mime() {
    let base = serve(vec![Route::ok("/r.md", Some("Text/Markdown"), "# Remote")]).await;

    let document = fetch_document(&format!("{}/r.md", base), &FetchConfig::default())
        .await
        .unwrap();
    assert_eq!(document.mime_type, "text/markdown");
    assert_eq!(document.bytes, b"# Remote");
}

#[test]
fn test_extract_url_sync() {
    let server_runtime = tokio::runtime::Runtime::new().unwrap();
    let base = server_runtime.block_on(serve(vec![Route::ok("/hello.txt", None, "hello")]));

    let text = extract_url_sync(&format!("{}/hello.txt", base), &ExtractionConfig::default()).unwrap();
    assert_eq!(text, "hello");
}
