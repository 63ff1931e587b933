use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("Not found")]
    NotFound,
    #[error("Internal server error")]
    InternalServerError,
    #[error("Unknown Status Code")]
    UnknownStatusCode(StatusCode),
    #[error("Parse error")]
    ParseError(String),
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}
