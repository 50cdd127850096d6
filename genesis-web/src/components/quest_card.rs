use genesis_core::Quest;
use genesis_core::messages::{ACTIVE_DIRECTIVE, OBJECTIVE, REWARD};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub quest: Quest,
}

/// The active directive: title, protocol badge, lore, objective and reward, registry footer.
#[function_component(QuestCard)]
pub fn quest_card(p: &Props) -> Html {
    let quest = &p.quest;
    html! {
        <article class="quest-card" aria-labelledby="quest-title">
            <div class="quest-card__heading">
                <span class="quest-card__eyebrow">{ ACTIVE_DIRECTIVE }</span>
                <h2 id="quest-title" class="quest-card__title">{ quest.title.clone() }</h2>
                <span id="quest-type" class="quest-card__badge">{ quest.protocol_label() }</span>
            </div>

            <blockquote id="quest-flavor" class="quest-card__flavor">
                <span aria-hidden="true">{ "📜" }</span>
                <p>{ format!("\"{}\"", quest.flavor_text) }</p>
            </blockquote>

            <div class="quest-card__grid">
                <section class="quest-card__cell quest-card__cell--objective">
                    <h3><span aria-hidden="true">{ "🪙 " }</span>{ OBJECTIVE }</h3>
                    <p id="quest-objective">{ quest.objective.clone() }</p>
                </section>
                <section class="quest-card__cell quest-card__cell--reward">
                    <h3><span aria-hidden="true">{ "🎁 " }</span>{ REWARD }</h3>
                    <p id="quest-reward">{ quest.reward.clone() }</p>
                </section>
            </div>

            <p id="quest-registry" class="quest-card__registry">{ quest.registry_line() }</p>
        </article>
    }
}
