use dumps_content::ContentError;
use std::borrow::Cow;

/// A specialized [`CatalogError`] enum of this crate.
#[dumps_derive::dumps_error]
pub enum CatalogError {
    /// The requested document does not exist (or its ids are not safe path segments).
    #[error("Catalog document not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The document exists but is not valid JSON of the expected shape.
    #[error("Malformed catalog document{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
    /// The document could not be read.
    #[error("Catalog I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

impl CatalogError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status the serving layer answers with.
    #[cfg(feature = "server")]
    #[must_use]
    pub const fn status(&self) -> axum::http::StatusCode {
        match self {
            Self::NotFound { .. } => axum::http::StatusCode::NOT_FOUND,
            Self::Parse { .. } | Self::Io { .. } => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ContentError> for CatalogError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::Io { source, context } => Self::Io { source, context },
            other => Self::NotFound {
                message: other.to_string().into(),
                context: None,
            },
        }
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for CatalogError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        log_failure(&self);

        let body = serde_json::json!({
            "error": status.canonical_reason().unwrap_or("Error"),
        });
        (status, axum::Json(body)).into_response()
    }
}

/// Not-found is the caller's problem, everything else is ours.
#[cfg(feature = "server")]
pub(crate) fn log_failure(err: &CatalogError) {
    if err.is_not_found() {
        tracing::warn!(error = %err, "Catalog request for missing document");
    } else {
        tracing::error!(error = %err, "Catalog request failed");
    }
}
