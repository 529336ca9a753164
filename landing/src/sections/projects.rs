use leptos::prelude::*;
use vis_core::RevealMotion;

use super::Panel;
use crate::icons::Icon;
use crate::reveal::{Appear, RevealSignal};

const PROJECTS: [(&str, &str); 3] = [
    ("Гавань Резиденс", "Жилой комплекс"),
    ("Магазин \"Парус\"", "Коммерческий объект"),
    ("Промышленные объекты", "Инфраструктура Приморья"),
];

#[component]
pub fn Projects(#[prop(into)] id: String, revealed: RevealSignal) -> impl IntoView {
    view! {
        <Panel id=id class="panel-light">
            <Appear revealed=revealed motion=RevealMotion::fade_up(0.0)>
                <h2 class="section-title section-title-tight">"Выполненные объекты"</h2>
            </Appear>
            <Appear revealed=revealed motion=RevealMotion::fade_up(0.1)>
                <p class="section-subtitle">
                    "Мы обеспечиваем стройматериалами крупнейшие объекты Приморского края"
                </p>
            </Appear>

            <div class="grid grid-3">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(i, (title, label))| {
                        view! {
                            <Appear revealed=revealed motion=RevealMotion::stagger(i) class="card card-hover">
                                <div class="icon-square">
                                    <Icon name="Building" size=24 class="icon-white" />
                                </div>
                                <h3 class="card-title">{*title}</h3>
                                <p class="card-text">{*label}</p>
                            </Appear>
                        }
                    })
                    .collect_view()}
            </div>
        </Panel>
    }
}
