// Landing page sections, in scroll order

mod about;
mod catalog;
mod contacts;
mod hero;
mod nav;
mod projects;
mod quote;
mod services;
mod stats;
mod testimonials;

pub use crate::layout::Panel;
pub use about::About;
pub use catalog::Catalog;
pub use contacts::Contacts;
pub use hero::Hero;
pub use nav::{NavDots, ProgressBar};
pub use projects::Projects;
pub use quote::QuoteForm;
pub use services::Services;
pub use stats::Stats;
pub use testimonials::Testimonials;
