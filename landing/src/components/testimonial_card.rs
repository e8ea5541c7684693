use launchpad_core::content::Testimonial;
use leptos::prelude::*;

use super::{Glyph, Icon};

const STARS: usize = 5;

#[component]
pub fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <div class="slide-in bg-white/10 backdrop-blur-lg rounded-xl border border-white/20 p-8 hover:bg-white/15 transition-all duration-300">
            <div class="flex items-center mb-6">
                <img
                    src=testimonial.photo
                    alt=testimonial.name
                    width="60"
                    height="60"
                    class="rounded-full mr-4"
                />
                <div>
                    <h4 class="text-white font-semibold">{testimonial.name}</h4>
                    <p class="text-gray-300 text-sm">{testimonial.role}</p>
                </div>
                <div class="ml-auto flex text-yellow-400">
                    {(0..STARS).map(|_| view! { <Icon glyph=Glyph::Star class="w-4 h-4 fill-current" /> }).collect::<Vec<_>>()}
                </div>
            </div>
            <p class="text-gray-300 leading-relaxed">{testimonial.content}</p>
        </div>
    }
}
