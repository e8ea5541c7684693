use launchpad_core::content::Plan;
use leptos::prelude::*;

use super::{Button, ButtonSize, ButtonVariant, Glyph, Icon};

#[component]
pub fn PricingCard(
    plan: &'static Plan,
    #[prop(optional)] disabled: bool,
    #[prop(into)] on_select: Callback<()>,
) -> impl IntoView {
    let border = if plan.highlighted {
        "border-blue-400 bg-white/15 shadow-2xl"
    } else {
        "border-white/20 hover:border-white/30"
    };
    let dim = if disabled { "opacity-50" } else { "" };
    let variant = if plan.highlighted { ButtonVariant::Primary } else { ButtonVariant::Secondary };

    view! {
        <div class=format!("lift relative bg-white/10 backdrop-blur-lg rounded-xl border p-8 transition-all duration-300 {border} {dim}")>
            {plan.highlighted.then(|| view! {
                <div class="absolute -top-4 left-1/2 transform -translate-x-1/2">
                    <span class="bg-gradient-to-r from-blue-600 to-purple-600 text-white px-4 py-1 rounded-full text-sm font-medium">
                        "Most Popular"
                    </span>
                </div>
            })}

            <div class="text-center">
                <h3 class="text-2xl font-bold text-white mb-2">{plan.name}</h3>
                <div class="mb-6">
                    <span class="text-4xl font-bold text-white">{plan.price_label()}</span>
                    <span class="text-gray-300">"/month"</span>
                </div>

                <ul class="space-y-3 mb-8">
                    {plan.features.iter().map(|feature| view! {
                        <li class="flex items-center text-gray-300">
                            <Icon glyph=Glyph::Check class="w-5 h-5 text-green-400 mr-3 flex-shrink-0" />
                            {*feature}
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>

                <Button
                    variant=variant
                    size=ButtonSize::Lg
                    disabled=disabled
                    class="w-full"
                    on:click=move |_| on_select.run(())
                >
                    "Get Started"
                </Button>
            </div>
        </div>
    }
}
