// Landing page sections, top to bottom

mod background;
mod blog;
mod calculator;
mod contact;
mod cta;
mod demo;
mod faq;
mod features;
mod header;
mod hero;
mod pricing;
mod testimonials;

pub use background::Background;
pub use blog::Blog;
pub use calculator::Calculator;
pub use contact::Contact;
pub use cta::CallToAction;
pub use demo::{Demo, VideoModal};
pub use faq::Faq;
pub use features::Features;
pub use header::SectionHeader;
pub use hero::Hero;
pub use pricing::Pricing;
pub use testimonials::Testimonials;
