use dumps_domain::models::{Engine, Game};
use serde_json::json;

#[test]
fn engine_listing_document_deserializes_in_order() {
    let raw = json!([
        {
            "id": "ue4",
            "name": "Unreal Engine 4",
            "description": "d",
            "games": [
                { "id": "g1", "title": "Game One", "platform": "PC", "file": "g1.png" },
                { "id": "g2", "title": "Game Two", "platform": "PS4", "file": "g2.png" }
            ]
        },
        { "id": "unity", "name": "Unity", "description": "", "games": [] }
    ]);

    let engines: Vec<Engine> = serde_json::from_value(raw).expect("engines deserialize");
    assert_eq!(engines.len(), 2);
    assert_eq!(engines[0].name, "Unreal Engine 4");
    let ids: Vec<&str> = engines[0].games.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["g1", "g2"]);
    assert!(engines[1].games.is_empty());
}

#[test]
fn partial_game_document_fills_defaults() {
    let game: Game = serde_json::from_value(json!({ "id": "g1", "title": "Game One" }))
        .expect("partial game deserializes");
    assert_eq!(game.title, "Game One");
    assert!(game.platform.is_empty());
    assert!(game.file.is_empty());
}

#[test]
fn unknown_fields_are_ignored_and_missing_games_default() {
    let engine: Engine = serde_json::from_value(json!({
        "id": "ue4",
        "name": "Unreal Engine 4",
        "homepage": "https://example.invalid"
    }))
    .expect("engine deserializes");
    assert!(engine.games.is_empty());
    assert!(engine.description.is_empty());
}

#[test]
fn missing_title_is_rejected() {
    assert!(serde_json::from_value::<Game>(json!({ "id": "g1" })).is_err());
}

#[test]
fn anchors_and_routes_derive_from_ids() {
    let engine = Engine {
        id: "ue4".to_owned(),
        name: "Unreal Engine 4".to_owned(),
        description: String::new(),
        games: vec![Game {
            id: "g1".to_owned(),
            title: "Game One".to_owned(),
            platform: "PC".to_owned(),
            file: "g1.png".to_owned(),
        }],
    };
    assert_eq!(engine.anchor(), "ue4");
    assert_eq!(engine.games[0].route(engine.anchor()), "/ue4/g1");
}
