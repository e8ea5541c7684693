use launchpad_core::modal::{ModalEvent, ModalState};
use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant, Glyph, Icon};

#[component]
pub fn Hero(modal: RwSignal<ModalState>) -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                <div class="text-center lg:text-left fade-up">
                    <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold text-white mb-6 leading-tight">
                        "Transform Your"
                        <span class="bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                            " Business"
                        </span>
                        <br />
                        "With AI-Powered SaaS"
                    </h1>
                    <p class="text-xl text-gray-300 mb-8 max-w-2xl">
                        "Streamline your workflow, boost productivity, and scale your business with our cutting-edge platform "
                        "trusted by over 10,000 companies worldwide."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                        <Button size=ButtonSize::Lg icon=Glyph::ArrowRight>
                            "Start Free Trial"
                        </Button>
                        <Button
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Lg
                            on:click=move |_| modal.update(|m| *m = m.apply(ModalEvent::Open))
                        >
                            <Icon glyph=Glyph::Play />
                            "Watch Demo"
                        </Button>
                    </div>
                </div>

                <div class="relative fade-up">
                    <div class="relative bg-white/10 backdrop-blur-lg rounded-2xl border border-white/20 p-8 shadow-2xl">
                        <img
                            src="/placeholder.svg?height=400&width=600"
                            alt="SaaS Dashboard"
                            width="600"
                            height="400"
                            class="rounded-lg shadow-lg"
                        />
                        <div class="absolute -top-4 -right-4 bg-gradient-to-r from-green-400 to-blue-500 text-white px-4 py-2 rounded-full text-sm font-medium">
                            "Live Dashboard"
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
