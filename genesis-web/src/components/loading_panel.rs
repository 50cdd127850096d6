use genesis_core::messages::LOADING;
use yew::prelude::*;

#[function_component(LoadingPanel)]
pub fn loading_panel() -> Html {
    html! {
        <div class="loading-panel" role="status" aria-live="polite">
            <span class="spinner spinner--lg" aria-hidden="true"></span>
            <p>{ LOADING }</p>
        </div>
    }
}
