use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant, Glyph};

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-4xl mx-auto text-center">
                <div class="fade-up bg-gradient-to-r from-blue-600/20 to-purple-600/20 backdrop-blur-lg rounded-2xl border border-white/20 p-12">
                    <h2 class="text-3xl sm:text-4xl font-bold text-white mb-4">"Ready to Transform Your Business?"</h2>
                    <p class="text-xl text-gray-300 mb-8 max-w-2xl mx-auto">
                        "Join thousands of companies already using our platform to streamline their operations and boost "
                        "productivity."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Button size=ButtonSize::Lg icon=Glyph::ArrowRight>
                            "Start Free Trial"
                        </Button>
                        <Button variant=ButtonVariant::Secondary size=ButtonSize::Lg>
                            "Schedule Demo"
                        </Button>
                    </div>
                </div>
            </div>
        </section>
    }
}
