//! The fetch and trigger routines shared by every front-end.
//!
//! Both routines report progress through `dispatch` instead of touching state
//! directly, so the caller decides how actions reach its board.

use crate::api::QuestApi;
use crate::board::BoardAction;

/// Load the current quest once. Failures are logged and surfaced as `FetchFailed`.
pub async fn refresh<A, D>(api: &A, dispatch: &D)
where
    A: QuestApi,
    D: Fn(BoardAction) + ?Sized,
{
    match api.current_quest().await {
        Ok(quest) => {
            log::debug!("current quest loaded (present: {})", quest.is_some());
            dispatch(BoardAction::FetchSucceeded(quest));
        }
        Err(err) => {
            log::error!("API Error: {err}");
            dispatch(BoardAction::FetchFailed);
        }
    }
}

/// Run one simulation step, then reload the quest. Busy is cleared on every path.
pub async fn advance<A, D>(api: &A, dispatch: &D)
where
    A: QuestApi,
    D: Fn(BoardAction) + ?Sized,
{
    dispatch(BoardAction::TriggerStarted);
    match api.run_simulation().await {
        Ok(()) => refresh(api, dispatch).await,
        Err(err) => {
            log::error!("Sim Error: {err}");
            dispatch(BoardAction::TriggerFailed);
        }
    }
    dispatch(BoardAction::TriggerFinished);
}
