use genesis_core::messages::{ERROR_HEADING, RETRY};
use yew::prelude::*;

pub const RETRY_ID: &str = "retry-btn";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub message: AttrValue,
    #[prop_or_default]
    pub on_retry: Callback<()>,
}

#[function_component(ErrorPanel)]
pub fn error_panel(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_retry.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div class="error-panel" role="alert">
            <p class="error-panel__heading">{ ERROR_HEADING }</p>
            <p class="error-panel__message">{ p.message.clone() }</p>
            <button id={RETRY_ID} type="button" class="error-panel__retry" {onclick}>
                { RETRY }
            </button>
        </div>
    }
}
