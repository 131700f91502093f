use std::borrow::Cow;

/// Errors of the content store.
#[dumps_derive::dumps_error]
pub enum ContentError {
    #[error("Document not found{}: {message}", format_context(.context))]
    DocumentNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Path traversal security violation{}: {message}", format_context(.context))]
    PathTraversalAttempt { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Content I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

impl ContentError {
    /// True when the caller asked for something that is not (and cannot be) in the store.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::DocumentNotFound { .. } | Self::PathTraversalAttempt { .. })
    }
}
