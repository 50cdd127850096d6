use genesis_core::messages::FOOTER_COPY;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="console-footer">{ FOOTER_COPY }</footer>
    }
}
