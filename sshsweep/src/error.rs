use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read host list: {0}")]
    HostListError(std::io::Error),

    #[error("Failed to open success log: {0}")]
    SuccessLogError(std::io::Error),

    #[error("Argument error: {0}")]
    ArgumentError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
