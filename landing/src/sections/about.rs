use leptos::prelude::*;
use vis_core::RevealMotion;

use super::Panel;
use crate::icons::Icon;
use crate::reveal::{Appear, RevealSignal};

#[component]
pub fn About(#[prop(into)] id: String, revealed: RevealSignal) -> impl IntoView {
    view! {
        <Panel id=id class="panel-grey">
            <Appear revealed=revealed motion=RevealMotion::fade_up(0.0)>
                <h2 class="section-title section-title-left">"Почему выбирают ВИС"</h2>
            </Appear>

            <div class="grid grid-2 about-grid">
                <Appear revealed=revealed motion=RevealMotion::fade_up(0.15)>
                    <h3 class="about-lead">"Все в одном месте — более 500 наименований"</h3>
                    <p class="about-text">
                        "Работаем с крупнейшими заводами России. Наличный и безналичный "
                        "расчёт. Помогаем с логистикой на удалённые объекты. Вы экономите "
                        "время и деньги."
                    </p>
                </Appear>

                <Appear revealed=revealed motion=RevealMotion::fade_up(0.3) class="about-visual">
                    <div class="visual-tile">
                        <div class="visual-corner visual-corner-orange"></div>
                        <div class="visual-corner visual-corner-white"></div>
                        <Icon name="Building2" size=80 class="icon-white-soft" />
                    </div>
                </Appear>
            </div>
        </Panel>
    }
}
