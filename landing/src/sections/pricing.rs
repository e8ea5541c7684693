use launchpad_core::content::{PLANS, select_plan};
use leptos::prelude::*;

use super::SectionHeader;
use crate::components::PricingCard;

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeader
                    title="Simple, Transparent Pricing"
                    description="Choose the perfect plan for your team size and needs"
                />
                <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    {PLANS.iter().map(|plan| view! {
                        <PricingCard plan=plan on_select=move |_: ()| select_plan(plan) />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
