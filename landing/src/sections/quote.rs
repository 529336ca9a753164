use leptos::prelude::*;
use vis_core::RevealMotion;
use vis_core::contact::{CATEGORY_PLACEHOLDER, ContactRequest, RequestCategory};

use super::Panel;
use crate::console;
use crate::reveal::{Appear, RevealSignal};

/// Quote request form. Captures input only; submit is a placeholder.
#[component]
pub fn QuoteForm(#[prop(into)] id: String, revealed: RevealSignal) -> impl IntoView {
    let request = RwSignal::new(ContactRequest::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let captured = request.get_untracked();
        captured.submit();
        console::info("form", &format!("quote request not sent: {}", captured.to_json()));
    };

    view! {
        <Panel id=id class="panel-navy">
            <div class="form-wrap">
                <Appear revealed=revealed motion=RevealMotion::fade_up(0.0)>
                    <h2 class="section-title section-title-light">
                        "Рассчитайте стоимость материалов за 60 минут"
                    </h2>
                </Appear>

                <form class="quote-form" on:submit=on_submit>
                    <Appear revealed=revealed motion=RevealMotion::stagger(0)>
                        <input
                            class="field"
                            type="text"
                            placeholder="Ваше имя"
                            prop:value=move || request.with(|r| r.name.clone())
                            on:input=move |ev| request.update(|r| r.name = event_target_value(&ev))
                        />
                    </Appear>
                    <Appear revealed=revealed motion=RevealMotion::stagger(1)>
                        <input
                            class="field"
                            type="text"
                            placeholder="Телефон / Max (мессенджер)"
                            prop:value=move || request.with(|r| r.contact.clone())
                            on:input=move |ev| request.update(|r| r.contact = event_target_value(&ev))
                        />
                    </Appear>
                    <Appear revealed=revealed motion=RevealMotion::stagger(2)>
                        <select
                            class="field field-select"
                            on:change=move |ev| request.update(|r| r.set_category_value(&event_target_value(&ev)))
                        >
                            <option value="" disabled=true selected=true>{CATEGORY_PLACEHOLDER}</option>
                            {RequestCategory::ALL
                                .into_iter()
                                .map(|category| {
                                    view! { <option value=category.value()>{category.label()}</option> }
                                })
                                .collect_view()}
                        </select>
                    </Appear>
                    <Appear revealed=revealed motion=RevealMotion::stagger(3)>
                        <button type="submit" class="btn btn-primary btn-block">"Получить расчёт"</button>
                    </Appear>
                    <Appear revealed=revealed motion=RevealMotion::stagger(4)>
                        <p class="form-note">
                            "Нажимая кнопку, вы соглашаетесь с политикой конфиденциальности"
                        </p>
                    </Appear>
                </form>
            </div>
        </Panel>
    }
}
