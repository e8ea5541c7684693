use std::time::Duration;

use launchpad_core::carousel::{CarouselEvent, Rotation};
use launchpad_core::content::TESTIMONIALS;
use leptos::prelude::*;

use super::SectionHeader;
use crate::components::{Glyph, Icon, TestimonialCard};

const ARROW: &str = "p-2 bg-white/10 backdrop-blur-sm rounded-full border border-white/20 hover:bg-white/20 transition-colors";

fn dot_class(current: bool) -> &'static str {
    if current {
        "w-3 h-3 rounded-full transition-colors bg-blue-400"
    } else {
        "w-3 h-3 rounded-full transition-colors bg-white/30"
    }
}

/// Customer quotes, one at a time. Auto-advances every `interval` while mounted;
/// arrows and dots move it by hand without resetting the timer.
#[component]
pub fn Testimonials(interval: Duration) -> impl IntoView {
    let rotation = RwSignal::new(Rotation::new(TESTIMONIALS.len()));
    let dispatch = move |event: CarouselEvent| {
        rotation.try_update(|r| *r = r.apply(event));
    };

    if rotation.try_update(Rotation::arm).unwrap_or(false) {
        match set_interval_with_handle(move || dispatch(CarouselEvent::Tick), interval) {
            Ok(handle) => on_cleanup(move || {
                rotation.try_update(Rotation::disarm);
                handle.clear();
                tracing::debug!("testimonial rotation stopped");
            }),
            Err(err) => {
                rotation.try_update(Rotation::disarm);
                tracing::warn!(error = ?err, "testimonial rotation disabled");
            }
        }
    }

    view! {
        <section id="testimonials" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeader
                    title="What Our Customers Say"
                    description="Join thousands of satisfied customers who trust our platform"
                />

                <div class="relative max-w-4xl mx-auto">
                    {move || {
                        TESTIMONIALS
                            .get(rotation.get().carousel().index())
                            .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                    }}

                    <div class="flex justify-center mt-8 gap-4">
                        <button class=ARROW aria-label="Previous" on:click=move |_| dispatch(CarouselEvent::Prev)>
                            <Icon glyph=Glyph::ChevronLeft class="w-5 h-5 text-white" />
                        </button>

                        <div class="flex gap-2 items-center">
                            {(0..TESTIMONIALS.len()).map(|index| view! {
                                <button
                                    class=move || dot_class(rotation.get().carousel().is_current(index))
                                    aria-label=format!("Show testimonial {}", index + 1)
                                    on:click=move |_| dispatch(CarouselEvent::Jump(index))
                                ></button>
                            }).collect::<Vec<_>>()}
                        </div>

                        <button class=ARROW aria-label="Next" on:click=move |_| dispatch(CarouselEvent::Next)>
                            <Icon glyph=Glyph::ChevronRight class="w-5 h-5 text-white" />
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
