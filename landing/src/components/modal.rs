use launchpad_core::modal::{ModalEvent, ModalState};
use leptos::prelude::*;

use super::{Glyph, Icon};

/// Overlay dialog. Closes on the X button or a click outside the panel.
#[component]
pub fn Modal(modal: RwSignal<ModalState>, title: &'static str, children: ChildrenFn) -> impl IntoView {
    let dispatch = move |event: ModalEvent| modal.update(|state| *state = state.apply(event));

    view! {
        <Show when=move || modal.get().is_open()>
            <div class="fixed inset-0 bg-black/50 backdrop-blur-sm z-50 fade-in"></div>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center p-4 pop-in"
                on:click=move |_| dispatch(ModalEvent::BackdropClick)
            >
                <div
                    class="bg-white/10 backdrop-blur-lg rounded-xl border border-white/20 p-6 max-w-md w-full"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex justify-between items-center mb-4">
                        <h2 class="text-xl font-semibold text-white">{title}</h2>
                        <button
                            class="text-gray-400 hover:text-white transition-colors"
                            aria-label="Close"
                            on:click=move |_| dispatch(ModalEvent::Close)
                        >
                            <Icon glyph=Glyph::X />
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
