use genesis_core::messages::{TRIGGER_BUSY, TRIGGER_IDLE};
use yew::prelude::*;

pub const TRIGGER_ID: &str = "advance-btn";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub busy: bool,
    pub disabled: bool,
    #[prop_or_default]
    pub on_trigger: Callback<()>,
}

/// The "advance one month" control. Disabled while any request is in flight.
#[function_component(TriggerButton)]
pub fn trigger_button(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_trigger.clone();
        let disabled = p.disabled;
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                cb.emit(());
            }
        })
    };
    let class = classes!(
        "trigger",
        if p.busy { "trigger--busy" } else { "trigger--idle" }
    );
    html! {
        <button id={TRIGGER_ID} type="button" {class} {onclick}
            disabled={p.disabled} aria-busy={p.busy.to_string()}>
            if p.busy {
                <span class="spinner" aria-hidden="true"></span>
                { TRIGGER_BUSY }
            } else {
                <span class="trigger__icon" aria-hidden="true">{ "▶" }</span>
                { TRIGGER_IDLE }
            }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(busy: bool, disabled: bool) -> String {
        let props = Props {
            busy,
            disabled,
            on_trigger: Callback::noop(),
        };
        block_on(LocalServerRenderer::<TriggerButton>::with_props(props).render())
    }

    #[test]
    fn idle_button_is_enabled_with_advance_label() {
        let html = render(false, false);
        assert!(html.contains(TRIGGER_IDLE));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn busy_button_is_disabled_with_progress_label() {
        let html = render(true, true);
        assert!(html.contains(TRIGGER_BUSY));
        assert!(html.contains("disabled"));
        assert!(html.contains("trigger--busy"));
    }
}
