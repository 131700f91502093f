use crate::error::{ContentError, ContentErrorExt};
use crate::store::{ContentStore, ContentStoreInner};
use private::Sealed;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tracing::info;

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct ContentStoreBuilder<S: Sealed = NoRoot> {
    state: S,
    create: bool,
}

#[allow(private_bounds)]
impl<S: Sealed> ContentStoreBuilder<S> {
    /// Creates the root directory when missing. Off by default: a content root
    /// is normally provisioned ahead of time.
    #[must_use = "Sets whether the content root should be created if it does not exist"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.create = enable;
        self
    }
}

impl ContentStoreBuilder<NoRoot> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the root directory of the content store"]
    pub fn root(self, path: impl Into<PathBuf>) -> ContentStoreBuilder<WithRoot> {
        ContentStoreBuilder { state: WithRoot(path.into()), create: self.create }
    }
}

impl ContentStoreBuilder<WithRoot> {
    /// Resolves the root to its canonical physical path and returns the store handle.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if the root does not exist (and `create` is off),
    /// cannot be created, or cannot be canonicalized.
    pub async fn open(self) -> Result<ContentStore, ContentError> {
        let root = self.state.0;

        if self.create {
            fs::create_dir_all(&root)
                .await
                .context(format!("Failed to create content root: {}", root.display()))?;
        }

        let canonical = fs::canonicalize(&root)
            .await
            .context(format!("Failed to resolve content root: {}", root.display()))?;

        if !fs::metadata(&canonical).await.context("Failed to inspect content root")?.is_dir() {
            return Err(ContentError::Io {
                source: std::io::Error::new(
                    std::io::ErrorKind::NotADirectory,
                    "content root is not a directory",
                ),
                context: Some(canonical.display().to_string().into()),
            });
        }

        info!(path = %canonical.display(), "Content store opened");

        Ok(ContentStore { inner: Arc::new(ContentStoreInner { root: canonical }) })
    }
}
