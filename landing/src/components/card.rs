use leptos::prelude::*;

use super::{Glyph, Icon};

/// Frosted-glass card. Every slot is optional; `children` renders last.
#[component]
pub fn Card(
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] image: Option<&'static str>,
    #[prop(optional)] icon: Option<Glyph>,
    #[prop(optional)] class: &'static str,
    #[prop(default = true)] hover: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let hover_class = if hover { "lift hover:shadow-2xl hover:bg-white/15" } else { "" };
    let class = format!(
        "bg-white/10 backdrop-blur-lg rounded-xl border border-white/20 p-6 {hover_class} transition-all duration-300 {class}"
    );

    view! {
        <div class=class>
            {image.map(|src| view! {
                <div class="mb-4">
                    <img src=src alt=title.unwrap_or_default() width="400" height="200" class="rounded-lg" />
                </div>
            })}
            {icon.map(|glyph| view! {
                <div class="mb-4 text-blue-400">
                    <Icon glyph=glyph class="w-8 h-8" />
                </div>
            })}
            {title.map(|t| view! { <h3 class="text-xl font-semibold text-white mb-2">{t}</h3> })}
            {subtitle.map(|s| view! { <p class="text-gray-300 mb-4">{s}</p> })}
            {children.map(|c| c())}
        </div>
    }
}
