use genesis_core::{BoardAction, BoardState};
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// Reducer-backed board so late responses apply to the latest state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board(BoardState);

impl Board {
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.0
    }
}

impl Deref for Board {
    type Target = BoardState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for Board {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.0.apply(action);
        Rc::new(next)
    }
}

#[hook]
pub fn use_board() -> UseReducerHandle<Board> {
    use_reducer(Board::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use genesis_core::BoardView;
    use genesis_core::messages::FETCH_ERROR;

    #[test]
    fn reduce_applies_actions_in_order() {
        let board = Rc::new(Board::default());
        assert_eq!(board.view(), BoardView::Loading);

        let board = board.reduce(BoardAction::FetchFailed);
        assert_eq!(board.view(), BoardView::Error(FETCH_ERROR));

        let board = board
            .reduce(BoardAction::TriggerStarted)
            .reduce(BoardAction::FetchSucceeded(None))
            .reduce(BoardAction::TriggerFinished);
        assert_eq!(board.view(), BoardView::Empty);
        assert!(board.can_trigger());
    }
}
