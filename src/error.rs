use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarforkError {
    #[error("search error: {0}")]
    Search(String),

    #[error("github error: {0}")]
    GitHub(String),

    #[error("malformed hosted path: {0}")]
    MalformedPath(String),

    #[error("usage: {0}")]
    Usage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("rate limited: {0}")]
    RateLimited(String),
}

pub type Result<T> = std::result::Result<T, StarforkError>;
