use thiserror::Error;

pub type Result<T> = std::result::Result<T, DragonError>;

#[derive(Error, Debug)]
pub enum DragonError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("JSON parsing error: {0}")]
    Decode(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DragonError {
    fn from(e: serde_json::Error) -> Self {
        DragonError::Decode(e.to_string())
    }
}

/// Domain error for a non-2xx answer from the data service.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("bad request")]
    BadRequest,

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("unsupported media type")]
    UnsupportedMediaType,

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("internal server error")]
    InternalServerError,

    #[error("bad gateway")]
    BadGateway,

    #[error("service unavailable")]
    ServiceUnavailable,

    #[error("gateway timeout")]
    GatewayTimeout,

    #[error("unknown error reason (status {status})")]
    Unknown { status: u16 },
}

impl UpstreamError {
    /// Maps a status code through the known status table, falling back to `Unknown`.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => UpstreamError::BadRequest,
            401 => UpstreamError::Unauthorized,
            403 => UpstreamError::Forbidden,
            404 => UpstreamError::NotFound,
            405 => UpstreamError::MethodNotAllowed,
            415 => UpstreamError::UnsupportedMediaType,
            429 => UpstreamError::RateLimitExceeded,
            500 => UpstreamError::InternalServerError,
            502 => UpstreamError::BadGateway,
            503 => UpstreamError::ServiceUnavailable,
            504 => UpstreamError::GatewayTimeout,
            status => UpstreamError::Unknown { status },
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            UpstreamError::BadRequest => 400,
            UpstreamError::Unauthorized => 401,
            UpstreamError::Forbidden => 403,
            UpstreamError::NotFound => 404,
            UpstreamError::MethodNotAllowed => 405,
            UpstreamError::UnsupportedMediaType => 415,
            UpstreamError::RateLimitExceeded => 429,
            UpstreamError::InternalServerError => 500,
            UpstreamError::BadGateway => 502,
            UpstreamError::ServiceUnavailable => 503,
            UpstreamError::GatewayTimeout => 504,
            UpstreamError::Unknown { status } => *status,
        }
    }
}
