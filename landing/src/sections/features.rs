use launchpad_core::content::FEATURES;
use leptos::prelude::*;

use super::SectionHeader;
use crate::components::{Card, Glyph};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeader
                    title="Powerful Features for Modern Teams"
                    description="Everything you need to streamline your workflow and boost productivity"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES.iter().enumerate().map(|(index, feature)| {
                        let delay = format!("animation-delay: {}ms", index * 100);
                        view! {
                            <div class="fade-up" style=delay>
                                <Card
                                    icon=Glyph::from(feature.icon)
                                    title=feature.title
                                    subtitle=feature.description
                                />
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
