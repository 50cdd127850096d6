use crate::error::ApiError;
use crate::quest::Quest;

/// Trait for abstracting the two backend calls the console makes.
/// Platform-specific transports should provide this.
///
/// Futures are not required to be `Send`: browser fetch futures are not.
#[allow(async_fn_in_trait)]
pub trait QuestApi {
    /// Fetch the latest quest; `None` when the backend has none stored.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-2xx status, or an undecodable body.
    async fn current_quest(&self) -> Result<Option<Quest>, ApiError>;

    /// Ask the backend to advance its simulation by one step. The body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-2xx status.
    async fn run_simulation(&self) -> Result<(), ApiError>;
}
