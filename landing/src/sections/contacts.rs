use leptos::prelude::*;
use vis_core::RevealMotion;

use super::Panel;
use crate::icons::Icon;
use crate::reveal::{Appear, RevealSignal};

const ADDRESS: &str = "г. Артём, ул. Вокзальная 114";

/// Display form and `tel:` target.
const PHONES: [(&str, &str); 2] = [
    ("+7 (423) 244-80-10", "tel:+74232448010"),
    ("+7 (914) 792-27-84", "tel:+79147922784"),
];

#[component]
pub fn Contacts(#[prop(into)] id: String, revealed: RevealSignal) -> impl IntoView {
    view! {
        <Panel id=id class="panel-white">
            <Appear revealed=revealed motion=RevealMotion::fade_up(0.0)>
                <h2 class="section-title">"Контакты"</h2>
            </Appear>

            <div class="grid grid-2 contacts-grid">
                <div class="contact-list">
                    <Appear revealed=revealed motion=RevealMotion::stagger(0) class="contact-item">
                        <div class="icon-soft">
                            <Icon name="MapPin" size=20 class="icon-orange" />
                        </div>
                        <div>
                            <div class="contact-label">"Адрес"</div>
                            <div class="contact-value">{ADDRESS}</div>
                        </div>
                    </Appear>

                    <Appear revealed=revealed motion=RevealMotion::stagger(1) class="contact-item">
                        <div class="icon-soft">
                            <Icon name="Phone" size=20 class="icon-orange" />
                        </div>
                        <div>
                            <div class="contact-label">"Телефоны"</div>
                            {PHONES
                                .iter()
                                .map(|(display, href)| {
                                    view! {
                                        <div class="contact-value">
                                            <a href=*href class="contact-link">{*display}</a>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Appear>

                    <Appear revealed=revealed motion=RevealMotion::stagger(2) class="contact-item">
                        <div class="icon-soft">
                            <Icon name="MessageCircle" size=20 class="icon-orange" />
                        </div>
                        <div>
                            <div class="contact-label">"Мессенджер"</div>
                            <div class="contact-value">"Max мессенджер"</div>
                        </div>
                    </Appear>
                </div>

                <Appear revealed=revealed motion=RevealMotion::fade_up(0.2) class="map-tile">
                    <div class="map-rings">
                        <div class="map-ring map-ring-small"></div>
                        <div class="map-ring map-ring-large"></div>
                    </div>
                    <Icon name="MapPin" size=48 class="icon-white-dim" />
                    <span class="map-caption">{ADDRESS}</span>
                </Appear>
            </div>
        </Panel>
    }
}
