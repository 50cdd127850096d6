use crate::messages::{FETCH_ERROR, TRIGGER_ERROR};
use crate::quest::Quest;

/// Everything the console renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub quest: Option<Quest>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_busy: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            quest: None,
            is_loading: true,
            error: None,
            is_busy: false,
        }
    }
}

/// State transitions produced by the fetch and trigger routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    FetchSucceeded(Option<Quest>),
    FetchFailed,
    TriggerStarted,
    TriggerFailed,
    TriggerFinished,
}

/// Which of the mutually exclusive content views to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardView<'a> {
    Loading,
    Error(&'a str),
    Content(&'a Quest),
    Empty,
}

impl BoardState {
    pub fn apply(&mut self, action: BoardAction) {
        match action {
            BoardAction::FetchSucceeded(quest) => {
                self.quest = quest;
                self.error = None;
                self.is_loading = false;
            }
            BoardAction::FetchFailed => {
                self.error = Some(FETCH_ERROR.to_string());
                self.is_loading = false;
            }
            BoardAction::TriggerStarted => self.is_busy = true,
            BoardAction::TriggerFailed => self.error = Some(TRIGGER_ERROR.to_string()),
            BoardAction::TriggerFinished => self.is_busy = false,
        }
    }

    /// Consume an action and return the resulting state.
    #[must_use]
    pub fn with(mut self, action: BoardAction) -> Self {
        self.apply(action);
        self
    }

    /// Loading wins only while no trigger is running, then error, then content.
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        if self.is_loading && !self.is_busy {
            BoardView::Loading
        } else if let Some(message) = self.error.as_deref() {
            BoardView::Error(message)
        } else if let Some(quest) = self.quest.as_ref() {
            BoardView::Content(quest)
        } else {
            BoardView::Empty
        }
    }

    /// The trigger control is disabled while either request is outstanding.
    #[must_use]
    pub const fn can_trigger(&self) -> bool {
        !self.is_busy && !self.is_loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest(title: &str) -> Quest {
        Quest {
            id: "q1".to_string(),
            title: title.to_string(),
            kind: "Economic".to_string(),
            flavor_text: "...".to_string(),
            objective: "Stabilize inflation".to_string(),
            reward: "500 gold".to_string(),
            generated_at: "cycle-7".to_string(),
        }
    }

    #[test]
    fn starts_in_loading_view_with_trigger_disabled() {
        let board = BoardState::default();
        assert_eq!(board.view(), BoardView::Loading);
        assert!(!board.can_trigger());
    }

    #[test]
    fn successful_fetch_shows_content_and_enables_trigger() {
        let mint = quest("Reclaim the Mint");
        let board = BoardState::default().with(BoardAction::FetchSucceeded(Some(mint.clone())));
        assert_eq!(board.view(), BoardView::Content(&mint));
        assert!(board.can_trigger());
    }

    #[test]
    fn failed_fetch_shows_fixed_error_and_keeps_record() {
        let board = BoardState::default()
            .with(BoardAction::FetchSucceeded(Some(quest("Old"))))
            .with(BoardAction::FetchFailed);
        assert_eq!(board.view(), BoardView::Error(FETCH_ERROR));
        assert_eq!(board.quest.as_ref().map(|q| q.title.as_str()), Some("Old"));
        assert!(!board.is_loading);
    }

    #[test]
    fn successful_fetch_clears_previous_error() {
        let board = BoardState::default()
            .with(BoardAction::FetchFailed)
            .with(BoardAction::FetchSucceeded(Some(quest("Fresh"))));
        assert!(board.error.is_none());
        assert!(matches!(board.view(), BoardView::Content(q) if q.title == "Fresh"));
    }

    #[test]
    fn null_record_renders_empty_view() {
        let board = BoardState::default().with(BoardAction::FetchSucceeded(None));
        assert_eq!(board.view(), BoardView::Empty);
    }

    #[test]
    fn trigger_failure_shows_error_and_clears_busy() {
        let board = BoardState::default()
            .with(BoardAction::FetchSucceeded(Some(quest("Q"))))
            .with(BoardAction::TriggerStarted);
        assert!(board.is_busy);
        assert!(!board.can_trigger());

        let board = board
            .with(BoardAction::TriggerFailed)
            .with(BoardAction::TriggerFinished);
        assert_eq!(board.view(), BoardView::Error(TRIGGER_ERROR));
        assert!(!board.is_busy);
        assert!(board.can_trigger());
    }

    #[test]
    fn busy_suppresses_loading_view() {
        let board = BoardState::default().with(BoardAction::TriggerStarted);
        assert_eq!(board.view(), BoardView::Empty);
    }
}
