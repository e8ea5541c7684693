//! # launchpad-core
//!
//! Page logic for the launchpad landing page, kept apart from the Leptos
//! view layer so every rule can be tested on the host.
//!
//! ## Modules
//!
//! - [`contact`] - contact form fields, validation and the submit hand-off
//! - [`pricing`] - tiered price calculator and the slider selection
//! - [`carousel`] - testimonial rotation state machine
//! - [`accordion`] - open-panel bookkeeping for the FAQ
//! - [`modal`] - the demo video modal flag
//! - [`parallax`] - scroll progress to background offset
//! - [`content`] - static copy shown on the page
//! - [`config`] - `site.json` configuration
//!
//! Every controller is a plain value with a `(state, event) -> state`
//! transition. Views own one per mounted scope; nothing here is global.
//!
//! ```rust
//! use launchpad_core::carousel::{CarouselEvent, CarouselState};
//! use launchpad_core::pricing::{calculate_price, BillingPeriod};
//!
//! assert_eq!(calculate_price(12, BillingPeriod::Yearly), 63);
//!
//! let state = CarouselState::new(3).apply(CarouselEvent::Prev);
//! assert_eq!(state.index(), 2);
//! ```

#![warn(missing_docs)]

pub mod accordion;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod modal;
pub mod parallax;
pub mod pricing;

pub use accordion::{AccordionMode, AccordionState};
pub use carousel::{CarouselEvent, CarouselState, Rotation};
pub use config::{ConfigError, SiteConfig};
pub use contact::{ContactForm, ContactPayload, ContactSink, Field, FieldError, FormErrors};
pub use modal::{ModalEvent, ModalState};
pub use pricing::{BillingPeriod, PricingSelection, PricingTable, calculate_price};
