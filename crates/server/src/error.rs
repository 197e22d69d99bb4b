use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chess_core::GameError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::UnknownOpening(_) | GameError::InvalidLevel(_) => {
                AppError::BadRequest(err.to_string())
            }
            GameError::MalformedMove { .. } | GameError::InvalidFen(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        // Every error body is {"detail": "message"}
        (status, Json(json!({ "detail": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_errors_map_to_status() {
        let bad: AppError = GameError::InvalidLevel(9).into();
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);

        let unknown: AppError = GameError::UnknownOpening("x".into()).into();
        assert_eq!(unknown.into_response().status(), StatusCode::BAD_REQUEST);

        let bug: AppError = GameError::MalformedMove {
            uci: "zz".into(),
            reason: "invalid".into(),
        }
        .into();
        assert_eq!(bug.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
