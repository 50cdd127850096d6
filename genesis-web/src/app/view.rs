use crate::components::error_panel::ErrorPanel;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::loading_panel::LoadingPanel;
use crate::components::quest_card::QuestCard;
use crate::components::trigger_button::TriggerButton;
use genesis_core::{BoardState, BoardView};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConsoleProps {
    pub board: BoardState,
    #[prop_or_default]
    pub on_trigger: Callback<()>,
    #[prop_or_default]
    pub on_retry: Callback<()>,
}

/// Stable marker the browser scenarios read to tell which view is showing.
#[must_use]
pub const fn view_marker(view: &BoardView<'_>) -> &'static str {
    match view {
        BoardView::Loading => "loading",
        BoardView::Error(_) => "error",
        BoardView::Content(_) => "content",
        BoardView::Empty => "empty",
    }
}

/// Pure rendering of a board; the `App` component owns the state and the requests.
#[function_component(Console)]
pub fn console(props: &ConsoleProps) -> Html {
    let board = &props.board;
    let view = board.view();
    let body = match view {
        BoardView::Loading => html! { <LoadingPanel /> },
        BoardView::Error(message) => html! {
            <ErrorPanel message={AttrValue::from(message.to_string())} on_retry={props.on_retry.clone()} />
        },
        BoardView::Content(quest) => html! { <QuestCard quest={quest.clone()} /> },
        BoardView::Empty => Html::default(),
    };

    html! {
        <div class="console-page">
            <main id="main" class="console">
                <Header />
                <TriggerButton
                    busy={board.is_busy}
                    disabled={!board.can_trigger()}
                    on_trigger={props.on_trigger.clone()} />
                <div class="console__body" data-view={view_marker(&view)}>
                    { body }
                </div>
            </main>
            <Footer />
        </div>
    }
}
