// VIS landing page — Leptos 0.8 Edition
// Nine snap-scrolling panels driven by one active-section index.

mod console;
mod icons;
mod layout;
mod reveal;
mod scroll;
mod sections;

use leptos::prelude::*;
use vis_core::SiteConfig;

use layout::Layout;
use reveal::use_reveal_board;
use scroll::use_page_scroll;
use sections::*;

const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();
    console::install_tracing();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = SiteConfig::load_or_default(SITE_TOML);
    let registry = config.registry();
    let scroll = use_page_scroll(&config);
    let reveals = use_reveal_board(registry.len(), scroll.active);

    let reveal = move |index: usize| reveals.get(index).copied().unwrap_or_default();
    let anchor_registry = registry.clone();
    let anchor = move |index: usize| anchor_registry.get(index).map(|s| s.id.clone()).unwrap_or_default();

    let section_count = registry.len();
    Effect::new(move || console::banner(section_count));

    view! {
        <Layout>
            <NavDots sections=registry.clone() scroll=scroll />
            <ProgressBar scroll=scroll />

            <div node_ref=scroll.container class="snap-container">
                <Hero id=anchor(0) revealed=reveal(0) scroll=scroll />
                <Stats id=anchor(1) revealed=reveal(1) />
                <Catalog id=anchor(2) revealed=reveal(2) />
                <About id=anchor(3) revealed=reveal(3) />
                <Services id=anchor(4) revealed=reveal(4) />
                <Projects id=anchor(5) revealed=reveal(5) />
                <Testimonials id=anchor(6) revealed=reveal(6) />
                <QuoteForm id=anchor(7) revealed=reveal(7) />
                <Contacts id=anchor(8) revealed=reveal(8) />
            </div>
        </Layout>
    }
}
