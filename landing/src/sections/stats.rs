use leptos::prelude::*;
use vis_core::RevealMotion;

use super::Panel;
use crate::reveal::{Appear, RevealSignal};

const STATS: [(&str, &str); 4] = [
    ("23+", "Лет на рынке стройматериалов"),
    ("2000+", "Объектов снабжено"),
    ("5000 м\u{00B2}", "Площадь склада"),
    ("<24 ч", "От заявки до отгрузки"),
];

#[component]
pub fn Stats(#[prop(into)] id: String, revealed: RevealSignal) -> impl IntoView {
    view! {
        <Panel id=id class="panel-white">
            <div class="grid grid-4 stats-grid">
                {STATS
                    .iter()
                    .enumerate()
                    .map(|(i, (number, label))| {
                        view! {
                            <Appear revealed=revealed motion=RevealMotion::stagger(i) class="stat">
                                <div class="stat-number">{*number}</div>
                                <div class="stat-label">{*label}</div>
                            </Appear>
                        }
                    })
                    .collect_view()}
            </div>
        </Panel>
    }
}
