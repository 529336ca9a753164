use leptos::prelude::*;
use vis_core::RevealMotion;
use vis_core::sections::{CATALOG_SECTION, QUOTE_SECTION};

use super::Panel;
use crate::reveal::{Appear, RevealSignal};
use crate::scroll::PageScroll;

#[component]
pub fn Hero(#[prop(into)] id: String, revealed: RevealSignal, scroll: PageScroll) -> impl IntoView {
    view! {
        <Panel id=id class="panel-navy hero">
            <div class="hero-decor">
                <div class="hero-glow hero-glow-orange"></div>
                <div class="hero-glow hero-glow-white"></div>
            </div>

            <div class="hero-content">
                <Appear revealed=revealed motion=RevealMotion::fade_up(0.0)>
                    <span class="badge badge-light">"С 2003 года на рынке"</span>
                </Appear>

                <Appear revealed=revealed motion=RevealMotion::fade_up(0.1)>
                    <h1 class="hero-title">
                        "Хризотилцементные трубы во Владивостоке и Приморском крае"
                    </h1>
                </Appear>

                <Appear revealed=revealed motion=RevealMotion::fade_up(0.2)>
                    <p class="hero-description">
                        "Поставляем хризотилцементные трубы и шифер, и прочие строительные "
                        "материалы с 2003 года. Собственный склад и доставка по Приморскому краю."
                    </p>
                </Appear>

                <Appear revealed=revealed motion=RevealMotion::fade_up(0.35) class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| scroll.navigate(QUOTE_SECTION)>
                        "Получить расчёт"
                    </button>
                    <button class="btn btn-outline" on:click=move |_| scroll.navigate(CATALOG_SECTION)>
                        "Смотреть каталог"
                    </button>
                </Appear>
            </div>
        </Panel>
    }
}
