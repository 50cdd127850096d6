/// Failure talking to the regulator backend.
///
/// The console collapses every variant into one fixed message; the detail
/// only reaches the log.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    #[error("JSON parsing error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Backend reported an error: {0}")]
    Backend(String),
}

impl ApiError {
    /// Map a response status onto `Ok(())` for 2xx and `Status` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` for any status outside `200..=299`.
    pub const fn check_status(status: u16) -> Result<(), Self> {
        if status >= 200 && status < 300 {
            Ok(())
        } else {
            Err(Self::Status(status))
        }
    }
}
