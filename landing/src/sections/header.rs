use leptos::prelude::*;

/// Centered title block that opens most sections.
#[component]
pub fn SectionHeader(
    title: &'static str,
    description: &'static str,
    #[prop(default = "mb-16")] spacing: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("text-center fade-up {spacing}")>
            <h2 class="text-3xl sm:text-4xl font-bold text-white mb-4">{title}</h2>
            <p class="text-xl text-gray-300 max-w-3xl mx-auto">{description}</p>
        </div>
    }
}
