use genesis_core::messages::{APP_TITLE, SYSTEM_STATUS};
use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="console-header" role="banner">
            <span class="console-header__icon" aria-hidden="true">{ "🛡" }</span>
            <div>
                <h1 class="console-header__title">{ APP_TITLE }</h1>
                <p class="console-header__status">{ SYSTEM_STATUS }</p>
            </div>
        </header>
    }
}
