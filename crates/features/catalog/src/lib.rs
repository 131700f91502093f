//! Catalog feature slice: the engine listing and game detail pages.
//!
//! * [`loader`] reads `engines.json` and `<engine>/<game>.json` from the content store.
//! * [`view`] maps the records onto page view models.
//! * [`html`] serializes those views into complete HTML documents.
//!
//! With the `server` feature the slice also provides its axum routes: the two HTML
//! pages and their JSON mirrors under `/api`.

mod error;
#[cfg(feature = "server")]
mod handlers;
pub mod html;
pub mod loader;
pub mod view;

pub use crate::error::{CatalogError, CatalogErrorExt};
pub use crate::loader::{load_engines, load_game};
pub use crate::view::{
    DetailView, EngineSection, GameTile, ListingView, NavLink, render_detail, render_listing,
};

#[cfg(feature = "server")]
pub use crate::handlers::{PageError, not_found_handler, router};
