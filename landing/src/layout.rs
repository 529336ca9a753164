//! Page frame: the full-height shell and the per-section panel.

use leptos::prelude::*;

/// Full-viewport shell. Overflow is clipped here; the snapping container
/// inside does the scrolling.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <div class="layout-content">{children()}</div>
        </div>
    }
}

/// One snap-aligned, viewport-high section.
#[component]
pub fn Panel(
    #[prop(into)] id: String,
    /// Background variant (`panel-navy`, `panel-light`, ...)
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=format!("panel {class}")>
            <div class="panel-inner">{children()}</div>
        </section>
    }
}
