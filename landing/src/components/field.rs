//! Labelled text inputs with an inline error line.

use leptos::prelude::*;

const CONTROL: &str = "w-full px-4 py-3 bg-white/10 backdrop-blur-sm border border-white/20 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all duration-200";

#[component]
fn FieldLabel(label: &'static str, required: bool) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-white">
            {label} " "
            {required.then(|| view! { <span class="text-red-400">"*"</span> })}
        </label>
    }
}

#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <p class="text-red-400 text-sm">{message}</p> })
}

#[component]
pub fn Input(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <FieldLabel label=label required=required />
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
                class=CONTROL
            />
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn Textarea(
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] required: bool,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <FieldLabel label=label required=required />
            <textarea
                placeholder=placeholder
                rows=rows.to_string()
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
                class=format!("{CONTROL} resize-none")
            ></textarea>
            <FieldError error=error />
        </div>
    }
}
