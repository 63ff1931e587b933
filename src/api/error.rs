use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::errors::ManagerError;

#[derive(Debug)]
pub enum ApiError {
    Manager(ManagerError),
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        ApiError::Manager(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Manager(err) => {
                let (status, error_code, message) = match err {
                    ManagerError::NotFound => {
                        (StatusCode::NOT_FOUND, "not_found", "Playlist or video not found")
                    }
                    ManagerError::InternalServerError => (
                        StatusCode::BAD_GATEWAY,
                        "manager_error",
                        "The playlist manager reported an internal error",
                    ),
                    ManagerError::UnknownStatusCode(_) => (
                        StatusCode::BAD_GATEWAY,
                        "manager_error",
                        "Unexpected response from the playlist manager",
                    ),
                    ManagerError::ParseError(_) => (
                        StatusCode::BAD_GATEWAY,
                        "bad_manager_response",
                        "Malformed response from the playlist manager",
                    ),
                    ManagerError::HttpError(_) => (
                        StatusCode::BAD_GATEWAY,
                        "manager_unreachable",
                        "Could not reach the playlist manager",
                    ),
                };

                (
                    status,
                    Json(json!({
                        "error": error_code,
                        "message": message
                    })),
                )
                    .into_response()
            }
        }
    }
}
