//! Reads catalog documents from the content store.
//!
//! Every call reads the document afresh; nothing is cached between requests.

use crate::error::{CatalogError, CatalogErrorExt};
use dumps_content::ContentStore;
use dumps_domain::constants::{DOCUMENT_EXTENSION, ENGINES_DOCUMENT};
use dumps_domain::models::{Engine, Game};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, warn};

/// Loads every engine from `engines.json` at the content root, in document order.
///
/// # Errors
///
/// [`CatalogError::NotFound`] if the document is absent, [`CatalogError::Parse`] if it
/// is not a JSON array of engines, [`CatalogError::Io`] if it cannot be read.
pub async fn load_engines(store: &ContentStore) -> Result<Vec<Engine>, CatalogError> {
    let path = ContentStore::document_path(&[ENGINES_DOCUMENT], DOCUMENT_EXTENSION)?;
    let engines: Vec<Engine> = read_document(store, &path).await?;

    debug!(engines = engines.len(), "Engine listing loaded");
    Ok(engines)
}

/// Loads the game document `<engine_id>/<game_id>.json`.
///
/// Ids that are not a single safe path segment are reported as not found.
///
/// # Errors
///
/// [`CatalogError::NotFound`] if the document is absent or an id is unsafe,
/// [`CatalogError::Parse`] on malformed content, [`CatalogError::Io`] on read failure.
pub async fn load_game(
    store: &ContentStore,
    engine_id: &str,
    game_id: &str,
) -> Result<Game, CatalogError> {
    let path = ContentStore::document_path(&[engine_id, game_id], DOCUMENT_EXTENSION)?;
    let game: Game = read_document(store, &path).await?;

    if game.id != game_id {
        warn!(engine_id, game_id, document_id = %game.id, "Game document id differs from its file name");
    }
    debug!(engine_id, game_id, "Game loaded");
    Ok(game)
}

async fn read_document<T: DeserializeOwned>(
    store: &ContentStore,
    path: &Path,
) -> Result<T, CatalogError> {
    let bytes = store.read(path).await?;
    serde_json::from_slice(&bytes).context(path.display().to_string())
}
