use std::process::ExitStatus;

use serde_json::Value;
use url::Url;

pub type DevnetResult<T> = Result<T, DevnetError>;

#[derive(Debug, thiserror::Error)]
pub enum DevnetError {
    #[error("Failed to spawn {executable}: {source}")]
    Spawn { executable: String, source: std::io::Error },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Devnet process exited before it became alive, with {status}.")]
    ProcessExited { status: ExitStatus },
    #[error("Devnet at {url} is not alive after {attempts} attempts.")]
    StartupTimeout { url: Url, attempts: usize },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Devnet responded to {method} with HTTP status {status}.")]
    HttpStatus { method: String, status: reqwest::StatusCode },
    #[error("Devnet responded to {method} with error {code}: {message}")]
    Rpc { method: String, code: i64, message: String, data: Option<Value> },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}
