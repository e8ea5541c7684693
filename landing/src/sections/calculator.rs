use launchpad_core::config::PricingConfig;
use launchpad_core::pricing::{BillingPeriod, PricingEvent};
use leptos::prelude::*;

use super::SectionHeader;
use crate::components::{Button, ButtonSize, Card};

fn price_text(price: u32) -> String {
    format!("${price}")
}

fn period_text(billing: BillingPeriod) -> String {
    format!("/{}", billing.suffix())
}

fn toggle_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-lg transition-all bg-blue-600 text-white"
    } else {
        "px-4 py-2 rounded-lg transition-all bg-white/10 text-gray-300 hover:bg-white/20"
    }
}

#[component]
pub fn Calculator(pricing: PricingConfig) -> impl IntoView {
    let selection = RwSignal::new(pricing.initial_selection());
    let table = pricing.table();
    let price = Memo::new(move |_| selection.get().price(&table));
    let (min_users, max_users) = selection.get_untracked().bounds();

    let dispatch = move |event: PricingEvent| selection.update(|s| *s = s.apply(event));

    view! {
        <section id="calculator" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-4xl mx-auto">
                <SectionHeader
                    title="Pricing Calculator"
                    description="Calculate your custom pricing based on your needs"
                    spacing="mb-12"
                />

                <Card class="max-w-2xl mx-auto">
                    <div class="space-y-6">
                        <div>
                            <label class="block text-white font-medium mb-3">
                                "Number of Users: " {move || selection.get().users()}
                            </label>
                            <input
                                type="range"
                                min=min_users.to_string()
                                max=max_users.to_string()
                                prop:value=move || selection.get().users().to_string()
                                on:input=move |ev| dispatch(PricingEvent::SliderInput(event_target_value(&ev)))
                                class="w-full h-2 bg-white/20 rounded-lg appearance-none cursor-pointer slider"
                            />
                            <div class="flex justify-between text-sm text-gray-400 mt-1">
                                <span>{min_users}</span>
                                <span>{max_users}</span>
                            </div>
                        </div>

                        <div>
                            <label class="block text-white font-medium mb-3">"Billing Type"</label>
                            <div class="flex gap-4">
                                {BillingPeriod::ALL.into_iter().map(|billing| view! {
                                    <button
                                        class=move || toggle_class(selection.get().billing() == billing)
                                        on:click=move |_| dispatch(PricingEvent::SetBilling(billing))
                                    >
                                        {billing.label()}
                                    </button>
                                }).collect::<Vec<_>>()}
                            </div>
                        </div>

                        <div class="text-center pt-6 border-t border-white/20">
                            <div class="text-4xl font-bold text-white mb-2">
                                {move || price_text(price.get())}
                                <span class="text-lg text-gray-300">
                                    {move || period_text(selection.get().billing())}
                                </span>
                            </div>
                            <Button size=ButtonSize::Lg class="mt-4">
                                "Get Started"
                            </Button>
                        </div>
                    </div>
                </Card>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn labels_follow_billing_period() {
        assert_eq!(price_text(79), "$79");
        assert_eq!(period_text(BillingPeriod::Monthly), "/month");
        assert_eq!(period_text(BillingPeriod::Yearly), "/year");
    }

    #[test]
    fn active_toggle_is_highlighted() {
        assert!(toggle_class(true).contains("bg-blue-600"));
        assert!(!toggle_class(false).contains("bg-blue-600"));
    }
}
