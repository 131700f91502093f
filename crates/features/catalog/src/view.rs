//! View model of the two catalog pages.
//!
//! Both renderers are pure: the same records always produce the same view. Text is
//! carried verbatim; escaping belongs to the HTML serializer.

use dumps_domain::constants::IMAGES_ROUTE;
use dumps_domain::models::{Engine, Game};

/// The listing page: a jump-link strip followed by one section per engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingView {
    pub nav: Vec<NavLink>,
    pub sections: Vec<EngineSection>,
}

/// A jump link to an engine section on the same page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    /// `#` followed by the target section's anchor.
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSection {
    /// Element id of the section; the target of its [`NavLink`].
    pub anchor: String,
    pub heading_id: String,
    pub heading: String,
    pub description: String,
    pub tiles: Vec<GameTile>,
}

/// A clickable card leading to a game's detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTile {
    pub href: String,
    pub image: String,
    pub alt: String,
    pub title: String,
    /// Display text, `Platform: <platform>`.
    pub platform: String,
}

/// The detail page of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub heading: String,
}

/// Maps the engine collection onto the listing page, keeping engine and game order.
#[must_use]
pub fn render_listing(engines: &[Engine]) -> ListingView {
    let nav = engines
        .iter()
        .map(|engine| NavLink { label: engine.name.clone(), href: format!("#{}", engine.anchor()) })
        .collect();
    let sections = engines.iter().map(engine_section).collect();

    ListingView { nav, sections }
}

fn engine_section(engine: &Engine) -> EngineSection {
    EngineSection {
        anchor: engine.anchor().to_owned(),
        heading_id: format!("{}-heading", engine.anchor()),
        heading: engine.name.clone(),
        description: engine.description.clone(),
        tiles: engine.games.iter().map(|game| game_tile(&engine.id, game)).collect(),
    }
}

fn game_tile(engine_id: &str, game: &Game) -> GameTile {
    GameTile {
        href: game.route(engine_id),
        image: format!("{IMAGES_ROUTE}/{}", game.file),
        alt: game.title.clone(),
        title: game.title.clone(),
        platform: format!("Platform: {}", game.platform),
    }
}

/// Maps one game onto its detail page.
#[must_use]
pub fn render_detail(game: &Game) -> DetailView {
    DetailView { heading: game.title.clone() }
}
