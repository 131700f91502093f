//! Read-only, sandboxed access to the content directory that backs the catalog.
//!
//! The content root holds plain JSON documents; callers compose document paths from
//! untrusted identifiers (route parameters), so every path is checked before it
//! touches the filesystem:
//!
//! - **Segment validation**: identifiers must be a single, non-hidden path component
//!   ([`ContentStore::document_path`]).
//! - **Sandboxing**: resolved paths must stay inside the canonical root, including
//!   through symlinks ([`ContentStore::resolve`]).
//! - **Typed misses**: a missing document is [`ContentError::DocumentNotFound`], distinct
//!   from real I/O failures.
//!
//! Nothing is cached; each [`ContentStore::read`] goes to disk.

mod builder;
mod error;
mod security;
mod store;

pub use builder::ContentStoreBuilder;
pub use error::{ContentError, ContentErrorExt};
pub use store::ContentStore;
