use launchpad_core::accordion::AccordionMode;
use launchpad_core::content::FAQ;
use leptos::prelude::*;

use super::SectionHeader;
use crate::components::Accordion;

#[component]
pub fn Faq(mode: AccordionMode) -> impl IntoView {
    view! {
        <section id="faq" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-4xl mx-auto">
                <SectionHeader
                    title="Frequently Asked Questions"
                    description="Get answers to common questions about our platform"
                />
                <div class="fade-up" style="animation-delay: 200ms">
                    <Accordion items=FAQ mode=mode />
                </div>
            </div>
        </section>
    }
}
