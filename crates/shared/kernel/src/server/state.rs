use axum::extract::FromRef;
use dumps_content::ContentStore;
use dumps_domain::config::AppConfig;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[dumps_derive::dumps_error]
pub enum AppStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct AppStateInner {
    pub config: AppConfig,
    pub content: ContentStore,
}

/// Shared handler state: the loaded configuration and the opened content store.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(state: &AppState) -> Self {
        state.inner.config.clone()
    }
}

impl FromRef<AppState> for ContentStore {
    fn from_ref(state: &AppState) -> Self {
        state.inner.content.clone()
    }
}

#[derive(Debug, Default)]
pub struct AppStateBuilder {
    config: Option<AppConfig>,
    content: Option<ContentStore>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn content(mut self, content: ContentStore) -> Self {
        self.content = Some(content);
        self
    }

    /// # Errors
    /// Returns [`AppStateError::Validation`] when the config or the content store is missing.
    pub fn build(self) -> Result<AppState, AppStateError> {
        let config = self.config.ok_or_else(|| AppStateError::Validation {
            message: "AppConfig not provided".into(),
            context: None,
        })?;
        let content = self.content.ok_or_else(|| AppStateError::Validation {
            message: "ContentStore not provided".into(),
            context: Some("open the content root before building the state".into()),
        })?;

        Ok(AppState { inner: Arc::new(AppStateInner { config, content }) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_content_store_is_rejected() {
        let err = AppState::builder().config(AppConfig::default()).build().unwrap_err();
        assert!(err.to_string().contains("ContentStore not provided"));
    }

    #[tokio::test]
    async fn state_exposes_config_and_content() {
        let tmp = tempfile::tempdir().unwrap();
        let content = ContentStore::builder().root(tmp.path()).open().await.unwrap();

        let state =
            AppState::builder().config(AppConfig::default()).content(content).build().unwrap();

        assert_eq!(state.config.site.title, "dumps.io");
        let store = ContentStore::from_ref(&state);
        assert_eq!(store.root(), state.content.root());
    }
}
