use axum::Json;
use chess_core::openings;
use serde::Serialize;

#[derive(Serialize)]
pub struct OpeningResponse {
    pub name: &'static str,
    pub display_name: String,
    pub moves: &'static [&'static str],
}

/// GET /openings
/// The catalog lines games can start from.
pub async fn list_openings() -> Json<Vec<OpeningResponse>> {
    let lines = openings::names()
        .filter_map(openings::line_for)
        .map(|line| OpeningResponse {
            name: line.name,
            display_name: openings::display_name(line.name),
            moves: line.moves,
        })
        .collect();
    Json(lines)
}
