use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Server rejected request (status {status})")]
    Rejected { status: u16, detail: Option<String> },
}

#[derive(Debug, Error, PartialEq)]
pub enum DomError {
    #[error("no window/document available")]
    NoDocument,

    #[error("missing element #{0}")]
    Missing(String),

    #[error("element #{id} is not a {expected}")]
    WrongType { id: String, expected: &'static str },
}

impl ApiError {
    /// Transport and parse failures get a generic message; only a server
    /// rejection carries text worth showing verbatim.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

impl From<gloo::net::Error> for ApiError {
    fn from(err: gloo::net::Error) -> Self {
        match err {
            gloo::net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
