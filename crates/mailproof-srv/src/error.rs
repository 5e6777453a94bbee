use thiserror::Error;

/// Errors from the scan API server
#[derive(Error, Debug)]
pub enum SrvError {
    /// Configuration file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),

    /// Socket bind or serve failure
    #[error("server error: {0}")]
    Server(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<SrvError> for mailproof_core::MailproofError {
    fn from(err: SrvError) -> Self {
        match err {
            SrvError::Config(msg) => Self::Config(msg),
            SrvError::Server(msg) => Self::Server(msg),
            SrvError::Io(e) => Self::Server(e.to_string()),
        }
    }
}
