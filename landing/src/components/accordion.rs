use launchpad_core::accordion::{AccordionMode, AccordionState};
use launchpad_core::content::FaqItem;
use leptos::prelude::*;

use super::{Glyph, Icon};

/// Collapsible panel list. Open state is local to this instance.
#[component]
pub fn Accordion(
    items: &'static [FaqItem],
    #[prop(optional)] mode: AccordionMode,
) -> impl IntoView {
    let state = RwSignal::new(AccordionState::new(items.len(), mode));

    view! {
        <div class="space-y-4">
            {items.iter().enumerate().map(|(index, item)| {
                let is_open = move || state.with(|s| s.is_open(index));
                view! {
                    <div class="bg-white/10 backdrop-blur-lg rounded-xl border border-white/20 overflow-hidden">
                        <button
                            class="w-full px-6 py-4 text-left flex justify-between items-center hover:bg-white/5 transition-colors"
                            aria-expanded=move || is_open().to_string()
                            on:click=move |_| state.update(|s| s.toggle(index))
                        >
                            <span class="text-white font-medium">{item.title}</span>
                            <span class=move || {
                                if is_open() {
                                    "text-gray-400 transition-transform duration-200 rotate-180"
                                } else {
                                    "text-gray-400 transition-transform duration-200"
                                }
                            }>
                                <Icon glyph=Glyph::ChevronDown />
                            </span>
                        </button>
                        <Show when=is_open>
                            <div class="overflow-hidden fade-in">
                                <div class="px-6 pb-4 text-gray-300">{item.content}</div>
                            </div>
                        </Show>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
