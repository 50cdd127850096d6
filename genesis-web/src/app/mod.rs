use crate::api::WebQuestApi;
use genesis_core::{BoardState, QuestApi};
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

pub mod state;
pub mod view;

pub use state::Board;
pub use view::{Console, ConsoleProps};

/// Admits one trigger at a time.
///
/// The click callback closes over the board from the last render, so two
/// clicks landing before the busy state re-renders would both see it idle.
/// The flag is set synchronously on the first click and cleared when the
/// advance routine returns.
#[derive(Debug, Default, Clone)]
pub struct TriggerGate(Rc<Cell<bool>>);

impl TriggerGate {
    /// Claim the gate if the board allows a trigger and none is running.
    pub fn try_begin(&self, board: &BoardState) -> bool {
        if !board.can_trigger() || self.0.get() {
            return false;
        }
        self.0.set(true);
        true
    }

    pub fn finish(&self) {
        self.0.set(false);
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.0.get()
    }
}

fn spawn_refresh<A: QuestApi + 'static>(api: Rc<A>, dispatcher: UseReducerDispatcher<Board>) {
    wasm_bindgen_futures::spawn_local(async move {
        genesis_core::refresh(&*api, &|action| dispatcher.dispatch(action)).await;
    });
}

fn spawn_advance<A: QuestApi + 'static>(
    api: Rc<A>,
    dispatcher: UseReducerDispatcher<Board>,
    gate: TriggerGate,
) {
    wasm_bindgen_futures::spawn_local(async move {
        genesis_core::advance(&*api, &|action| dispatcher.dispatch(action)).await;
        gate.finish();
    });
}

#[derive(Properties)]
pub struct HostProps<A: QuestApi + 'static> {
    pub api: Rc<A>,
}

impl<A: QuestApi + 'static> PartialEq for HostProps<A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api)
    }
}

/// Owns the board for one transport.
///
/// Loads the current quest once on mount, wires the trigger and retry controls,
/// and renders whichever view the board selects.
#[function_component(ConsoleHost)]
pub fn console_host<A>(props: &HostProps<A>) -> Html
where
    A: QuestApi + 'static,
{
    let board = state::use_board();
    let gate = use_memo((), |()| TriggerGate::default());

    {
        let api = props.api.clone();
        let dispatcher = board.dispatcher();
        use_effect_with((), move |()| {
            spawn_refresh(api, dispatcher);
            || {}
        });
    }

    let on_retry = {
        let api = props.api.clone();
        let dispatcher = board.dispatcher();
        Callback::from(move |()| spawn_refresh(api.clone(), dispatcher.clone()))
    };

    let on_trigger = {
        let api = props.api.clone();
        let dispatcher = board.dispatcher();
        let snapshot = board.state().clone();
        let gate = (*gate).clone();
        Callback::from(move |()| {
            if gate.try_begin(&snapshot) {
                spawn_advance(api.clone(), dispatcher.clone(), gate.clone());
            }
        })
    };

    html! {
        <Console board={board.state().clone()} {on_trigger} {on_retry} />
    }
}

/// Main application component, bound to the browser `fetch` transport.
#[function_component(App)]
pub fn app() -> Html {
    let api = use_memo((), |()| WebQuestApi::default());
    html! { <ConsoleHost<WebQuestApi> {api} /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use genesis_core::BoardAction;
    use genesis_core::messages::{APP_TITLE, LOADING, TRIGGER_IDLE};
    use yew::LocalServerRenderer;

    fn idle_board() -> BoardState {
        BoardState::default().with(BoardAction::FetchSucceeded(None))
    }

    #[test]
    fn first_render_shows_loading_with_trigger_disabled() {
        let html = block_on(LocalServerRenderer::<App>::new().render());
        assert!(html.contains(APP_TITLE));
        assert!(html.contains(LOADING));
        assert!(html.contains(TRIGGER_IDLE));
        assert!(html.contains("data-view=\"loading\""));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn gate_admits_a_single_trigger_until_finished() {
        let gate = TriggerGate::default();
        let board = idle_board();
        assert!(gate.try_begin(&board));
        // second click against the same stale render
        assert!(!gate.try_begin(&board));
        assert!(gate.is_held());

        gate.finish();
        assert!(gate.try_begin(&board));
    }

    #[test]
    fn gate_refuses_while_loading_or_busy() {
        let gate = TriggerGate::default();
        assert!(!gate.try_begin(&BoardState::default()));
        let busy = idle_board().with(BoardAction::TriggerStarted);
        assert!(!gate.try_begin(&busy));
        assert!(!gate.is_held());
    }

    #[test]
    fn gate_clones_share_one_flag() {
        let gate = TriggerGate::default();
        let clone = gate.clone();
        assert!(clone.try_begin(&idle_board()));
        assert!(!gate.try_begin(&idle_board()));
        clone.finish();
        assert!(!gate.is_held());
    }
}
