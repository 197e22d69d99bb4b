use axum::{
    extract::{rejection::QueryRejection, Query},
    Extension, Json,
};
use chess_core::{GameOptions, Level, Transcript};
use serde::Deserialize;

use crate::config::Config;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct GenerateQuery {
    pub level: Option<i64>,
    pub seed: Option<u64>,
    pub opening: Option<String>,
}

/// GET /generate-game?level=2
/// Optional `seed` replays a previous game, optional `opening` forces a
/// catalog line.
pub async fn generate_game(
    Extension(config): Extension<Config>,
    query: Result<Query<GenerateQuery>, QueryRejection>,
) -> Result<Json<Transcript>, AppError> {
    let Query(q) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let level = Level::try_from(q.level.unwrap_or(1))?;

    let options = GameOptions {
        level,
        max_moves: config.max_moves,
        opening: q.opening,
        seed: q.seed,
    };
    let transcript = chess_core::generate_game(&options)?;

    tracing::info!(
        level = level.number(),
        opening = %transcript.opening,
        moves = transcript.played().len(),
        result = transcript.result.as_str(),
        seed = transcript.seed,
        "Generated game"
    );

    Ok(Json(transcript))
}
