use launchpad_core::parallax;
use leptos::ev;
use leptos::prelude::*;

/// Page-wide backdrop; the gradient layer drifts with scroll.
#[component]
pub fn Background() -> impl IntoView {
    let (progress, set_progress) = signal(0.0_f64);

    let handle = window_event_listener(ev::scroll, move |_| {
        set_progress.set(read_scroll_progress());
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="absolute inset-0 bg-[url('/placeholder.svg?height=1080&width=1920')] opacity-5"></div>
        <div
            class="absolute inset-0 bg-gradient-to-r from-blue-600/20 to-purple-600/20 blur-3xl"
            style:transform=move || parallax::transform_css(progress.get())
        ></div>
    }
}

fn read_scroll_progress() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);

    parallax::scroll_progress(scroll_y, document_height, viewport)
}
