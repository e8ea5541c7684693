// launchpad Landing Page, Leptos 0.8 CSR
// Developed by The Launchpad Team (c)2025

mod components;
mod logging;
mod sections;

use launchpad_core::SiteConfig;
use launchpad_core::modal::ModalState;
use leptos::prelude::*;
use sections::*;
use tracing::Level;

/// Page configuration baked in at build time.
const SITE_CONFIG: &str = include_str!("../site.json");

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match SiteConfig::from_json(SITE_CONFIG) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    logging::init(config.level().unwrap_or(Level::INFO));
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "site.json rejected, using defaults");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    let modal = RwSignal::new(ModalState::default());

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 relative overflow-hidden">
            <Background />
            <main class="relative">
                <Hero modal=modal />
                <Features />
                <Pricing />
                <Calculator pricing=config.pricing.clone() />
                <Testimonials interval=config.carousel.interval() />
                <Demo modal=modal />
                <Faq mode=config.faq.mode() />
                <Blog />
                <Contact />
                <CallToAction />
            </main>
            <VideoModal modal=modal />
        </div>
    }
}
