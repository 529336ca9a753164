use leptos::prelude::*;
use vis_core::SectionRegistry;

use crate::scroll::PageScroll;

/// CSS class of a navigation dot.
pub fn dot_class(index: usize, active: usize) -> &'static str {
    if index == active { "nav-dot active" } else { "nav-dot" }
}

/// Fixed column of dots on the right edge, one per section.
#[component]
pub fn NavDots(sections: SectionRegistry, scroll: PageScroll) -> impl IntoView {
    let dots = sections
        .iter()
        .map(|section| {
            let index = section.index;
            view! {
                <button
                    class=move || dot_class(index, scroll.active.get())
                    title=section.label.clone()
                    aria-label=section.label.clone()
                    on:click=move |_| scroll.navigate(index)
                ></button>
            }
        })
        .collect_view();

    view! { <nav class="nav-dots">{dots}</nav> }
}

/// Thin bar across the top, scaled by the smoothed scroll progress.
#[component]
pub fn ProgressBar(scroll: PageScroll) -> impl IntoView {
    view! {
        <div
            class="progress-bar"
            style=move || format!("transform: scaleX({:.4});", scroll.progress.get())
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_matching_dot_is_active() {
        assert_eq!(dot_class(3, 3), "nav-dot active");
        assert_eq!(dot_class(2, 3), "nav-dot");
        assert_eq!(dot_class(0, 8), "nav-dot");
    }
}
