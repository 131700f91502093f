use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use dumps_kernel::domain::config::{AppConfig, SslConfig};
use dumps_server::Server;
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

const ENGINES: &str = r#"[{"id":"ue4","name":"Unreal Engine 4","description":"d","games":[{"id":"g1","title":"Game One","platform":"PC","file":"g1.png"}]}]"#;

struct Site {
    _tmp: TempDir,
    app: Router,
}

async fn site() -> Site {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data");
    let images = tmp.path().join("images");
    fs::create_dir_all(data.join("ue4")).unwrap();
    fs::create_dir_all(&images).unwrap();
    fs::write(data.join("engines.json"), ENGINES).unwrap();
    fs::write(data.join("ue4").join("g1.json"), r#"{"id":"g1","title":"Game One"}"#).unwrap();
    fs::write(images.join("g1.png"), b"\x89PNG\r\n\x1a\n").unwrap();

    let mut cfg = AppConfig::default();
    cfg.content.root = data;
    cfg.content.images_dir = images;

    let server = Server::builder().config(cfg).build().await.unwrap();
    Site { app: server.router(), _tmp: tmp }
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response =
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

#[tokio::test]
async fn pages_health_and_api_are_mounted() {
    let site = site().await;

    for uri in ["/", "/ue4/g1", "/health", "/api/engines", "/api/engines/ue4/games/g1"] {
        let (status, _, _) = get(site.app.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn images_are_served_from_the_images_dir() {
    let site = site().await;

    let (status, content_type, body) = get(site.app.clone(), "/images/g1.png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
    assert!(body.starts_with(b"\x89PNG"));

    let (status, _, _) = get(site.app.clone(), "/images/missing.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_pages_are_404() {
    let site = site().await;

    for uri in ["/ue4/missing", "/nowhere/at/all", "/..%2F..%2Fetc/passwd"] {
        let (status, _, _) = get(site.app.clone(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn openapi_reference_is_served() {
    let site = site().await;

    let (status, content_type, _) = get(site.app.clone(), "/api").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn missing_content_root_fails_the_build() {
    let tmp = TempDir::new().unwrap();

    let result = Server::builder().content_root(tmp.path().join("absent")).build().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn missing_tls_files_fail_the_build() {
    let tmp = TempDir::new().unwrap();
    let mut cfg = AppConfig::default();
    cfg.content.root = tmp.path().to_path_buf();
    cfg.server.ssl = Some(SslConfig {
        cert: tmp.path().join("cert.pem"),
        key: tmp.path().join("key.pem"),
    });

    let err = Server::builder().config(cfg).build().await.unwrap_err();
    assert!(err.to_string().contains("SSL certificate not found"));
}
