use leptos::prelude::*;
use vis_core::RevealMotion;

use super::Panel;
use crate::icons::Icon;
use crate::reveal::{Appear, RevealSignal};

const TESTIMONIALS: [(&str, &str); 2] = [
    (
        "Работаем с ВИС уже 5 лет. Всегда в наличии нужный ассортимент, оперативная доставка.",
        "ООО СтройГрупп",
    ),
    (
        "Надёжный поставщик. Ценим за стабильность цен и качество продукции.",
        "ИП Ковалёв",
    ),
];

#[component]
pub fn Testimonials(#[prop(into)] id: String, revealed: RevealSignal) -> impl IntoView {
    view! {
        <Panel id=id class="panel-grey">
            <Appear revealed=revealed motion=RevealMotion::fade_up(0.0)>
                <h2 class="section-title">"Отзывы клиентов"</h2>
            </Appear>

            <div class="grid grid-2">
                {TESTIMONIALS
                    .iter()
                    .enumerate()
                    .map(|(i, (quote, author))| {
                        view! {
                            <Appear revealed=revealed motion=RevealMotion::stagger(i) class="card quote-card">
                                <div class="quote-mark">"\u{201C}"</div>
                                <p class="quote-text">{*quote}</p>
                                <div class="quote-author">
                                    <div class="avatar">
                                        <Icon name="User" size=18 class="icon-white" />
                                    </div>
                                    <span class="quote-name">{*author}</span>
                                </div>
                            </Appear>
                        }
                    })
                    .collect_view()}
            </div>
        </Panel>
    }
}
