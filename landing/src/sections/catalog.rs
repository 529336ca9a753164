use leptos::prelude::*;
use vis_core::RevealMotion;

use super::Panel;
use crate::icons::Icon;
use crate::reveal::{Appear, RevealSignal};

/// Icon, title, subtitle.
const CATEGORIES: [(&str, &str, &str); 3] = [
    ("Package", "Трубы асбестоцементные", "Напорные, безнапорные, муфты"),
    ("LayoutGrid", "Шифер", "Плоский и волновой"),
    ("Palette", "Волнаколор", "Шоколад, красный, синий, оранжевый"),
];

#[component]
pub fn Catalog(#[prop(into)] id: String, revealed: RevealSignal) -> impl IntoView {
    view! {
        <Panel id=id class="panel-light">
            <Appear revealed=revealed motion=RevealMotion::fade_up(0.0)>
                <h2 class="section-title">"Категории товаров"</h2>
            </Appear>

            <div class="grid grid-3">
                {CATEGORIES
                    .iter()
                    .enumerate()
                    .map(|(i, (icon, title, desc))| {
                        view! {
                            <Appear revealed=revealed motion=RevealMotion::stagger(i) class="card card-center card-hover">
                                <div class="icon-bubble">
                                    <Icon name=*icon size=28 class="icon-orange" />
                                </div>
                                <h3 class="card-title">{*title}</h3>
                                <p class="card-text">{*desc}</p>
                            </Appear>
                        }
                    })
                    .collect_view()}
            </div>
        </Panel>
    }
}
