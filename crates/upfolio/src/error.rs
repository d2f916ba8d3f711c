use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Set {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    #[error("No code provided.")]
    EmptyCode,

    #[error("Invalid URL")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("Missing field in response: {0}")]
    MissingField(&'static str),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Errors caused by how the program was invoked rather than by the remote side.
    /// These get a one-line message instead of a full diagnostic.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::MissingConfig(_) | Error::EmptyCode)
    }
}
