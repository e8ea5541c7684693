//! Reusable widgets shared by the page sections.
//!
//! ```text
//! Button, Card, Modal          layout primitives
//! Input, Textarea              contact form controls
//! PricingCard, TestimonialCard content cards
//! Accordion                    FAQ panels
//! Icon                         inline SVG glyphs
//! ```

mod accordion;
mod button;
mod card;
mod field;
mod icons;
mod modal;
mod pricing_card;
mod testimonial_card;

pub use accordion::Accordion;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
pub use field::{Input, Textarea};
pub use icons::{Glyph, Icon};
pub use modal::Modal;
pub use pricing_card::PricingCard;
pub use testimonial_card::TestimonialCard;
