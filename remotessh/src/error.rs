use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Connection error: {0}")]
    ConnectionError(String),
    #[error("Connection timed out")]
    TimeoutError,
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
    #[error("Protocol error: {0}")]
    ProtocolError(String),
    #[error("Socket Error: {0}")]
    SocketError(#[from] std::io::Error),
}

impl From<russh::Error> for Error {
    fn from(err: russh::Error) -> Self {
        match err {
            russh::Error::IO(e) => Error::SocketError(e),
            russh::Error::ConnectionTimeout => Error::TimeoutError,
            err => Error::ProtocolError(err.to_string()),
        }
    }
}

impl From<tokio::time::error::Elapsed> for Error {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Error::TimeoutError
    }
}

/// A custom `Result` type for our client operations.
pub type Result<T> = std::result::Result<T, Error>;
