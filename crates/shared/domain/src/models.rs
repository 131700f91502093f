//! Records parsed from content documents.
//!
//! Documents are trusted once they parse: unknown fields are ignored and nothing is
//! sanitized here. Only identifiers and display names are mandatory.

use dumps_derive::content_model;

/// A game-engine category and the games dumped for it, in presentation order.
#[content_model]
pub struct Engine {
    /// Routing key, in-page anchor and content directory name.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub games: Vec<Game>,
}

impl Engine {
    /// In-page anchor of the engine's section. Always the id, never the display name.
    #[must_use]
    pub fn anchor(&self) -> &str {
        &self.id
    }
}

/// A single dumped title.
///
/// Per-game documents may carry only `id` and `title`, so `platform` and `file`
/// default to empty strings.
#[content_model]
pub struct Game {
    /// Routing key, unique within its engine.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub platform: String,
    /// Image asset name, relative to the images directory.
    #[serde(default)]
    pub file: String,
}

impl Game {
    /// Detail page route of this game under `engine_id`.
    #[must_use]
    pub fn route(&self, engine_id: &str) -> String {
        format!("/{engine_id}/{}", self.id)
    }
}
