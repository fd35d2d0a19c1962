use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;

const STYLESHEET: &str = "body { color: #222; background: #fafafa; }\n";

fn options() -> LeptosOptions {
    LeptosOptions::builder().output_name("nanocut").build()
}

/// Site root with a `pkg/nanocut.css` big enough to be worth compressing.
fn site_with_bundle(tag: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("nanocut-routes-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(root.join("pkg")).unwrap();
    std::fs::write(root.join("pkg").join("nanocut.css"), STYLESHEET.repeat(64)).unwrap();
    root
}

fn host(site_root: PathBuf, compression: bool) -> HostConfig {
    HostConfig {
        port: 0,
        site_root: Some(site_root),
        compression,
    }
}

fn get_gzip(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::ACCEPT_ENCODING, "gzip")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn healthz_answers_ok() {
    let app = router(options(), &host(site_with_bundle("healthz"), true));
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn bundle_is_gzipped_when_compression_is_on() {
    let app = router(options(), &host(site_with_bundle("gzip-on"), true));
    let response = app.oneshot(get_gzip("/pkg/nanocut.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_ENCODING).map(|v| v.as_bytes()),
        Some(&b"gzip"[..])
    );
}

#[tokio::test]
async fn bundle_is_served_plain_when_compression_is_off() {
    let app = router(options(), &host(site_with_bundle("gzip-off"), false));
    let response = app.oneshot(get_gzip("/pkg/nanocut.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::CONTENT_ENCODING).is_none());

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, STYLESHEET.repeat(64).as_bytes());
}

#[tokio::test]
async fn missing_bundle_file_is_not_found() {
    let app = router(options(), &host(site_with_bundle("missing"), false));
    let response = app.oneshot(get_gzip("/pkg/absent.wasm")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
