use leptos::prelude::*;
use vis_core::RevealMotion;

use super::Panel;
use crate::icons::Icon;
use crate::reveal::{Appear, RevealSignal};

const SERVICES: [(&str, &str, &str); 4] = [
    ("Warehouse", "Хранение", "Ответственное хранение на складе 5000 м\u{00B2}"),
    ("Truck", "Доставка", "Собственный автопарк, любые объёмы"),
    ("ClipboardList", "Комплектация заказов", "Профессиональная отборка и упаковка"),
    ("Container", "Приёмка-отправка", "Вагонов и контейнеров в регионы"),
];

#[component]
pub fn Services(#[prop(into)] id: String, revealed: RevealSignal) -> impl IntoView {
    view! {
        <Panel id=id class="panel-white">
            <Appear revealed=revealed motion=RevealMotion::fade_up(0.0)>
                <h2 class="section-title">"Наши услуги"</h2>
            </Appear>

            <div class="grid grid-2">
                {SERVICES
                    .iter()
                    .enumerate()
                    .map(|(i, (icon, title, desc))| {
                        view! {
                            <Appear revealed=revealed motion=RevealMotion::stagger(i) class="card card-row card-tinted card-hover">
                                <div class="icon-square">
                                    <Icon name=*icon size=24 class="icon-white" />
                                </div>
                                <div>
                                    <h3 class="card-title">{*title}</h3>
                                    <p class="card-text">{*desc}</p>
                                </div>
                            </Appear>
                        }
                    })
                    .collect_view()}
            </div>
        </Panel>
    }
}
