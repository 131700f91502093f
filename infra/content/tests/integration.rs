use dumps_content::*;
use std::fs;
use tempfile::TempDir;

async fn store_with(files: &[(&str, &str)]) -> (TempDir, ContentStore) {
    let temp = TempDir::new().unwrap();
    for (path, body) in files {
        let full = temp.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, body).unwrap();
    }
    let store = ContentStore::builder().root(temp.path()).open().await.unwrap();
    (temp, store)
}

#[tokio::test]
async fn test_read_existing_document() {
    let (_temp, store) = store_with(&[("ue4/g1.json", r#"{"id":"g1"}"#)]).await;

    let bytes = store.read("ue4/g1.json").await.unwrap();
    assert_eq!(bytes, br#"{"id":"g1"}"#);
    assert!(store.exists("ue4/g1.json").unwrap());
}

#[tokio::test]
async fn test_read_missing_returns_document_not_found() {
    let (_temp, store) = store_with(&[]).await;

    let err = store.read("ue4/missing.json").await.expect_err("expected error");
    assert!(matches!(err, ContentError::DocumentNotFound { .. }), "unexpected: {err:?}");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_directory_is_not_a_document() {
    let (_temp, store) = store_with(&[("ue4/g1.json", "{}")]).await;

    let err = store.read("ue4").await.expect_err("directories are not documents");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_path_traversal_blocked() {
    let (_temp, store) = store_with(&[]).await;

    assert!(store.resolve("../etc/passwd").is_err());
    assert!(store.resolve("ue4/../../secret.json").is_err());
    assert!(store.resolve("/etc/passwd").is_err());

    let err = store.read("../engines.json").await.expect_err("escape must fail");
    assert!(matches!(err, ContentError::PathTraversalAttempt { .. }));
}

#[cfg(unix)]
#[tokio::test]
async fn test_symlink_outside_root_is_refused() {
    let outside = TempDir::new().unwrap();
    fs::write(outside.path().join("secret.json"), "{}").unwrap();

    let (temp, store) = store_with(&[]).await;
    std::os::unix::fs::symlink(outside.path(), temp.path().join("leak")).unwrap();

    let err = store.read("leak/secret.json").await.expect_err("symlink escape must fail");
    assert!(matches!(err, ContentError::PathTraversalAttempt { .. }), "unexpected: {err:?}");
}

#[tokio::test]
async fn test_document_path_composes_segments() {
    let path = ContentStore::document_path(&["ue4", "g1"], "json").unwrap();
    assert_eq!(path, std::path::PathBuf::from("ue4").join("g1.json"));

    let top = ContentStore::document_path(&["engines"], "json").unwrap();
    assert_eq!(top, std::path::PathBuf::from("engines.json"));

    assert!(ContentStore::document_path(&["..", "g1"], "json").is_err());
    assert!(ContentStore::document_path(&["ue4", "a/b"], "json").is_err());
    assert!(ContentStore::document_path(&[], "json").is_err());
}

#[tokio::test]
async fn test_missing_root_fails_without_create() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("absent");

    let err = ContentStore::builder().root(&root).open().await.expect_err("root is missing");
    assert!(matches!(err, ContentError::Io { .. }));

    let store = ContentStore::builder().root(&root).create(true).open().await.unwrap();
    assert!(store.root().is_dir());
}

#[tokio::test]
async fn test_paths_through_files_and_long_names_are_not_found() {
    let (_temp, store) = store_with(&[("engines.json", "[]")]).await;

    let err = store.read("engines.json/x.json").await.expect_err("a file is not a directory");
    assert!(matches!(err, ContentError::DocumentNotFound { .. }), "unexpected: {err:?}");

    let long = format!("ue4/{}.json", "a".repeat(300));
    let err = store.read(long).await.expect_err("name too long");
    assert!(err.is_not_found(), "unexpected: {err:?}");
}
