use launchpad_core::modal::{ModalEvent, ModalState};
use leptos::prelude::*;

use super::SectionHeader;
use crate::components::{Glyph, Icon, Modal};

#[component]
pub fn Demo(modal: RwSignal<ModalState>) -> impl IntoView {
    view! {
        <section id="demo" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    title="See It In Action"
                    description="Watch how our platform can transform your workflow in just 2 minutes"
                    spacing="mb-12"
                />

                <div class="relative pop-in">
                    <div class="relative bg-white/10 backdrop-blur-lg rounded-2xl border border-white/20 p-4 shadow-2xl">
                        <div
                            class="relative aspect-video bg-black rounded-lg overflow-hidden group cursor-pointer"
                            on:click=move |_| modal.update(|m| *m = m.apply(ModalEvent::Open))
                        >
                            <img
                                src="/placeholder.svg?height=400&width=700"
                                alt="Demo Video"
                                width="700"
                                height="400"
                                class="w-full h-full object-cover"
                            />
                            <div class="absolute inset-0 bg-black/30 flex items-center justify-center group-hover:bg-black/20 transition-colors">
                                <div class="w-20 h-20 bg-white/20 backdrop-blur-sm rounded-full flex items-center justify-center border-2 border-white/30 group-hover:scale-110 transition-transform">
                                    <Icon glyph=Glyph::Play class="w-8 h-8 text-white ml-1" />
                                </div>
                            </div>
                        </div>
                        <div class="absolute -top-2 -right-2 w-6 h-6 bg-red-500 rounded-full animate-pulse"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn VideoModal(modal: RwSignal<ModalState>) -> impl IntoView {
    view! {
        <Modal modal=modal title="Product Demo">
            <div class="aspect-video bg-black rounded-lg">
                <div class="w-full h-full flex items-center justify-center text-white">
                    <div class="text-center">
                        <Icon glyph=Glyph::Play class="w-16 h-16 mx-auto mb-4 opacity-50" />
                        <p class="text-gray-400">"Video player would be embedded here"</p>
                    </div>
                </div>
            </div>
        </Modal>
    }
}
