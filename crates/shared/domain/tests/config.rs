use dumps_domain::config::{AppConfig, ContentConfig, ServerConfig, SiteConfig};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4583);
    assert!(server.ssl.is_none());

    let content = ContentConfig::default();
    assert_eq!(content.root, PathBuf::from("data"));
    assert_eq!(content.images_dir, PathBuf::from("public/images"));

    let site = SiteConfig::default();
    assert_eq!(site.title, "dumps.io");
    assert_eq!(site.description, "Game dumps");
}

#[test]
fn app_config_deserializes_partial_documents() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "content": { "root": "/srv/dumps/data" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.content.root, PathBuf::from("/srv/dumps/data"));
    assert_eq!(cfg.content.images_dir, PathBuf::from("public/images"));
    assert_eq!(cfg.site.title, "dumps.io");
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn app_config_clones_share_until_mutated() {
    let base = AppConfig::default();
    let mut changed = base.clone();
    changed.server.port = 9000;

    assert_eq!(base.server.port, 4583);
    assert_eq!(changed.server.port, 9000);
}
