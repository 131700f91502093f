//! The [`ContentStore`] handle: resolves document paths inside the content root and
//! reads them.

use crate::builder::ContentStoreBuilder;
use crate::error::ContentError;
use crate::security;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::debug;

#[derive(Debug)]
pub struct ContentStoreInner {
    /// Canonical physical path of the content root.
    pub(crate) root: PathBuf,
}

/// A cheap-to-clone, read-only handle over the content directory.
///
/// Every path is resolved against the canonical root; absolute paths, `..` escapes
/// and symlinks leading outside the root are refused with
/// [`ContentError::PathTraversalAttempt`].
///
/// ```rust
/// use dumps_content::{ContentError, ContentStore};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), ContentError> {
///     # let tmp = tempfile::tempdir().unwrap();
///     # std::fs::write(tmp.path().join("engines.json"), b"[]").unwrap();
///     let store = ContentStore::builder().root(tmp.path()).open().await?;
///     let bytes = store.read("engines.json").await?;
///     assert_eq!(bytes, b"[]");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub(crate) inner: Arc<ContentStoreInner>,
}

impl Deref for ContentStore {
    type Target = ContentStoreInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl ContentStore {
    #[must_use = "The content store is not ready until you call .open()"]
    pub fn builder() -> ContentStoreBuilder {
        ContentStoreBuilder::new()
    }

    /// Canonical root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a relative path to a physical path inside the root.
    ///
    /// # Errors
    ///
    /// [`ContentError::PathTraversalAttempt`] if the path escapes the root,
    /// [`ContentError::Io`] if an ancestor cannot be verified.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<PathBuf, ContentError> {
        security::resolve_path(&self.root, path)
    }

    /// Builds the relative path `<segments...>.<extension>` after checking every segment.
    ///
    /// ```rust
    /// # use dumps_content::ContentStore;
    /// # use std::path::PathBuf;
    /// let path = ContentStore::document_path(&["ue4", "g1"], "json").unwrap();
    /// assert_eq!(path, PathBuf::from("ue4/g1.json"));
    /// ```
    ///
    /// # Errors
    ///
    /// [`ContentError::PathTraversalAttempt`] if a segment is empty, hidden, `.`/`..`,
    /// or contains a separator.
    pub fn document_path(segments: &[&str], extension: &str) -> Result<PathBuf, ContentError> {
        let Some((last, dirs)) = segments.split_last() else {
            return Err(ContentError::PathTraversalAttempt {
                message: "EMPTY".into(),
                context: Some("Document path needs at least one segment".into()),
            });
        };

        let mut path = PathBuf::new();
        for dir in dirs {
            path.push(security::validate_segment(dir)?);
        }
        path.push(format!("{}.{extension}", security::validate_segment(last)?));
        Ok(path)
    }

    /// Reads a whole document.
    ///
    /// # Errors
    ///
    /// [`ContentError::DocumentNotFound`] if nothing exists at the path (or it is a
    /// directory, sits below a file, or has an over-long name), [`ContentError::PathTraversalAttempt`] on escapes,
    /// [`ContentError::Io`] for any other I/O failure.
    pub async fn read(&self, path: impl AsRef<Path>) -> Result<Vec<u8>, ContentError> {
        let resolved = self.resolve(path)?;

        match fs::read(&resolved).await {
            Ok(data) => {
                debug!(path = %resolved.display(), bytes = data.len(), "Content document read");
                Ok(data)
            },
            Err(err) if security::is_missing(err.kind()) => Err(ContentError::DocumentNotFound {
                message: resolved.display().to_string().into(),
                context: None,
            }),
            Err(err) => Err(ContentError::Io {
                source: err,
                context: Some(format!("Read failed: {}", resolved.display()).into()),
            }),
        }
    }

    /// Whether a file exists at the path.
    ///
    /// # Errors
    ///
    /// Only for paths that fail resolution.
    pub fn exists(&self, path: impl AsRef<Path>) -> Result<bool, ContentError> {
        Ok(self.resolve(path)?.is_file())
    }
}
