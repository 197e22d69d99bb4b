//! Integration tests for the HTTP endpoints.
//!
//! Each test serves the router in-process on an ephemeral port.

mod common;

use chess_core::{GameResult, Level, Transcript};
use serde_json::Value;
use server::config::Config;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// GET a path and return the response.
async fn get(client: &reqwest::Client, base: &str, path: &str) -> reqwest::Response {
    client
        .get(common::url(base, path))
        .send()
        .await
        .expect("Failed to send request")
}

async fn generate(client: &reqwest::Client, base: &str, query: &str) -> Transcript {
    let resp = get(client, base, &format!("/generate-game{query}")).await;
    assert_eq!(resp.status(), 200, "generate-game{query} should succeed");
    resp.json().await.expect("Transcript JSON")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_is_constant() {
    let base = common::spawn_server().await;
    let client = common::client();

    let resp = get(&client, &base, "/health").await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn generate_defaults_to_level_one() {
    let base = common::spawn_server().await;
    let client = common::client();

    let game = generate(&client, &base, "").await;
    assert_eq!(game.level, Level::Beginner);
    assert_eq!(game.moves[0].move_number, 0);
    assert!(game.moves.len() > 1);
}

#[tokio::test]
async fn generate_wire_format() {
    let base = common::spawn_server().await;
    let client = common::client();

    let resp = get(&client, &base, "/generate-game?level=2&seed=77").await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();

    assert_eq!(body["level"], 2);
    assert!(["1-0", "0-1", "1/2-1/2", "*"].contains(&body["result"].as_str().unwrap()));
    let start = &body["moves"][0];
    assert_eq!(start["move_san"], "--");
    assert_eq!(start["move_uci"], "--");
    assert_eq!(start["turn"], "Blancs");
    assert_eq!(start["move_number"], 0);
    for key in ["fen", "comment", "incident", "alternative"] {
        assert!(start.get(key).is_some(), "start record should carry {key}");
    }
}

#[tokio::test]
async fn level_out_of_range_is_rejected() {
    let base = common::spawn_server().await;
    let client = common::client();

    for level in ["0", "4", "-1"] {
        let resp = get(&client, &base, &format!("/generate-game?level={level}")).await;
        assert_eq!(resp.status(), 400, "level={level} should be rejected");
        let body: Value = resp.json().await.unwrap();
        assert!(
            body["detail"].as_str().unwrap().contains("Level"),
            "Error should mention the level: got {:?}",
            body["detail"]
        );
    }

}

#[tokio::test]
async fn malformed_query_uses_detail_body() {
    let base = common::spawn_server().await;
    let client = common::client();

    for query in ["level=abc", "seed=-5", "level=2&seed=x"] {
        let resp = get(&client, &base, &format!("/generate-game?{query}")).await;
        assert_eq!(resp.status(), 400, "{query} should be rejected");
        let body: Value = resp.json().await.expect("JSON error body");
        assert!(
            !body["detail"].as_str().unwrap().is_empty(),
            "{query} should carry a detail message"
        );
    }
}

#[tokio::test]
async fn seed_replays_the_same_game() {
    let base = common::spawn_server().await;
    let client = common::client();

    for level in 1..=3 {
        let query = format!("?level={level}&seed=2024");
        let first = generate(&client, &base, &query).await;
        let second = generate(&client, &base, &query).await;
        assert_eq!(first, second);
        assert_eq!(first.seed, 2024);
    }
}

#[tokio::test]
async fn forced_opening_is_played_first() {
    let base = common::spawn_server().await;
    let client = common::client();

    let game = generate(&client, &base, "?level=3&opening=italienne").await;
    assert_eq!(game.opening, "italienne");
    assert_eq!(game.moves[0].comment, "Position de depart. Ouverture : Italienne.");
    let ucis: Vec<&str> = game.moves[1..7].iter().map(|r| r.move_uci.as_str()).collect();
    assert_eq!(ucis, ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5"]);
}

#[tokio::test]
async fn unknown_opening_is_rejected() {
    let base = common::spawn_server().await;
    let client = common::client();

    let resp = get(&client, &base, "/generate-game?opening=najdorf").await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("najdorf"));
}

#[tokio::test]
async fn configured_move_cap_is_respected() {
    let config = Config {
        max_moves: 8,
        ..Config::default()
    };
    let base = common::spawn_server_with(config).await;
    let client = common::client();

    for seed in 0..5 {
        let game = generate(&client, &base, &format!("?level=2&seed={seed}")).await;
        assert!(game.played().len() <= 8);
        if game.result == GameResult::Unfinished {
            assert_eq!(game.played().len(), 8);
        }
    }
}

#[tokio::test]
async fn openings_are_listed() {
    let base = common::spawn_server().await;
    let client = common::client();

    let resp = get(&client, &base, "/openings").await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let lines = body.as_array().unwrap();
    assert_eq!(lines.len(), 8);

    let caro = lines.iter().find(|l| l["name"] == "caro_kann").unwrap();
    assert_eq!(caro["display_name"], "Caro Kann");
    assert_eq!(caro["moves"], serde_json::json!(["e2e4", "c7c6", "d2d4", "d7d5"]));
}

#[tokio::test]
async fn unknown_path_uses_detail_body() {
    let base = common::spawn_server().await;
    let client = common::client();

    let resp = get(&client, &base, "/nope").await;
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "Not Found");
}
