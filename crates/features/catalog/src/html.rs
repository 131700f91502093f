//! Server-side HTML serialization of the catalog views.
//!
//! Pages are `rsx!` trees rendered once through `dioxus-ssr`; text and attribute
//! values are escaped by the renderer.

use crate::view::{DetailView, EngineSection, ListingView};
use dioxus::prelude::*;
use dumps_domain::config::SiteConfig;

const DOCTYPE: &str = "<!DOCTYPE html>";
const CATEGORIES_ANCHOR: &str = "game-categories";

/// Full listing document: intro, jump-link strip and engine sections.
#[must_use]
pub fn listing_page(site: &SiteConfig, view: &ListingView) -> String {
    let content = rsx! {
        div { class: "hero",
            h1 {
                "Game specific dumps, "
                span { class: "muted", "always up-to-date" }
            }
            p { "{site.description}" }
            a { class: "button", href: "#{CATEGORIES_ANCHOR}", "Get started" }
        }
        div { id: CATEGORIES_ANCHOR, class: "categories",
            for link in view.nav.iter() {
                a { href: "{link.href}", "{link.label}" }
            }
        }
        div { class: "sections",
            for section in view.sections.iter() {
                {engine_section(section)}
            }
        }
    };

    document(site, &site.title, content)
}

fn engine_section(section: &EngineSection) -> Element {
    rsx! {
        section { id: "{section.anchor}", class: "engine",
            div { class: "engine-header",
                h2 { id: "{section.heading_id}", "{section.heading}" }
                p { "{section.description}" }
            }
            div { class: "tiles",
                for tile in section.tiles.iter() {
                    a { class: "tile", href: "{tile.href}",
                        img { src: "{tile.image}", alt: "{tile.alt}", width: "100", height: "100" }
                        p { class: "tile-title", "{tile.title}" }
                        p { class: "tile-platform", "{tile.platform}" }
                    }
                }
            }
        }
    }
}

/// Full detail document for one game.
#[must_use]
pub fn detail_page(site: &SiteConfig, view: &DetailView) -> String {
    let content = rsx! {
        h1 { "{view.heading}" }
    };

    document(site, &format!("{} | {}", view.heading, site.title), content)
}

/// Answer for unknown routes and missing documents.
#[must_use]
pub fn not_found_page(site: &SiteConfig) -> String {
    let content = rsx! {
        h1 { "Not found" }
        p { "The page you requested does not exist." }
        a { href: "/", "Back to the catalog" }
    };

    document(site, &format!("Not found | {}", site.title), content)
}

/// Answer for documents that exist but cannot be read or parsed.
#[must_use]
pub fn error_page(site: &SiteConfig) -> String {
    let content = rsx! {
        h1 { "Something went wrong" }
        p { "This page could not be rendered." }
    };

    document(site, &format!("Error | {}", site.title), content)
}

fn document(site: &SiteConfig, page_title: &str, content: Element) -> String {
    let page = rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            meta { name: "description", content: "{site.description}" }
            title { "{page_title}" }
        }
        body {
            main { {content} }
        }
    };

    format!("{DOCTYPE}<html lang=\"en\">{}</html>", dioxus_ssr::render_element(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{render_detail, render_listing};
    use dumps_domain::models::{Engine, Game};

    fn site() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn listing_document_contains_sections_and_tiles() {
        let engines: Vec<Engine> = serde_json::from_str(
            r#"[{"id":"ue4","name":"Unreal Engine 4","description":"d","games":[{"id":"g1","title":"Game One","platform":"PC","file":"g1.png"}]}]"#,
        )
        .unwrap();

        let html = listing_page(&site(), &render_listing(&engines));

        assert!(html.starts_with(&format!("{DOCTYPE}<html lang=\"en\">")));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("<title>dumps.io</title>"));
        assert!(html.contains("Unreal Engine 4"));
        assert!(html.contains("Game One"));
        assert!(html.contains("Platform: PC"));
        assert!(html.contains("href=\"/ue4/g1\""));
        assert!(html.contains("src=\"/images/g1.png\""));
        assert!(html.contains("id=\"ue4\""));
        assert!(html.contains("href=\"#ue4\""));
    }

    #[test]
    fn detail_document_has_the_title_heading() {
        let game: Game = serde_json::from_str(r#"{"id":"g1","title":"Game One"}"#).unwrap();

        let html = detail_page(&site(), &render_detail(&game));

        assert!(html.starts_with(DOCTYPE));
        assert!(html.contains(">Game One</h1>"));
        assert!(html.contains("Game One | dumps.io"));
    }

    #[test]
    fn document_text_is_escaped() {
        let game: Game =
            serde_json::from_str(r#"{"id":"g1","title":"<script>alert(1)</script>"}"#).unwrap();

        let html = detail_page(&site(), &render_detail(&game));

        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn not_found_page_links_home() {
        let html = not_found_page(&site());
        assert!(html.contains("Not found"));
        assert!(html.contains("href=\"/\""));
    }
}
