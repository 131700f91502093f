#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the dumps workspace.
//!
//! * [`macro@main`] bootstraps the tuned Tokio runtime from `dumps-runtime`.
//! * [`macro@dumps_error`] turns an enum into a context-aware `thiserror` error.
//! * [`macro@content_model`] marks a struct as a content document record.
//! * [`macro@api_handler`] wires an Axum handler into the `OpenAPI` document.
//!
//! The examples below are `ignore`d; they only compile inside consuming crates.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the tuned Tokio runtime.
///
/// Turns an `async fn main` into a plain `fn main` that builds a runtime from one
/// of the `dumps_runtime::RuntimeConfig` presets and blocks on the body.
///
/// # Arguments
///
/// * `high_performance` - Server preset.
/// * `memory_efficient` - Small footprint preset.
/// * `default` (or no argument) - Auto-detected worker threads.
///
/// # Examples
///
/// ```rust,ignore
/// #[dumps_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Marks a struct as a record parsed from a content document.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Clone`, `PartialEq`, `Eq`, `Serialize` and `Deserialize`
///   when they are not already derived.
/// * **`OpenAPI`**: `utoipa::ToSchema` when the consuming crate enables `server`.
///
/// Unknown fields are ignored and field names are kept as written, so documents
/// are trusted as-is once they parse.
///
/// # Example
///
/// ```rust,ignore
/// #[dumps_derive::content_model]
/// pub struct Game {
///     pub id: String,
///     pub title: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn content_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_content_model(attr.into(), input).into()
}

/// Attribute macro to bridge Axum handlers with `OpenAPI` documentation.
///
/// Accepts standard `utoipa::path` arguments such as `get`, `path = "..."`,
/// `responses(...)` and `tag = "..."`. The `utoipa::path` attribute is only
/// emitted when the consuming crate enables its `server` feature.
///
/// # Example
///
/// ```rust,ignore
/// #[dumps_derive::api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = "System"
/// )]
/// pub async fn health_handler() -> impl IntoResponse {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Attribute macro for crate-level error enums.
///
/// # Features
///
/// * **Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context**: Generates a companion `<Name>Ext` trait with `.context(...)` for
///   `Result<T, Name>` and for `Result<T, Source>` of every variant with a source.
/// * **Conversions**: `From<Source>` for variants holding a `source` field (or a
///   field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an
///   `Internal` variant exists.
/// * A private `format_context` helper to render the optional context in messages.
///
/// # Requirements
///
/// 1. Applied to an **enum** with named-field variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[dumps_derive::dumps_error]
/// pub enum CatalogError {
///     #[error("Malformed document{}: {source}", format_context(.context))]
///     Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(bytes: &[u8]) -> Result<Vec<Engine>, CatalogError> {
///     serde_json::from_slice(bytes).context("engines.json")
/// }
/// ```
#[proc_macro_attribute]
pub fn dumps_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
