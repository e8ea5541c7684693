use leptos::prelude::*;

use super::{Glyph, Icon};

const BASE: &str = "inline-flex items-center justify-center font-medium rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Md,
    Lg,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-gradient-to-r from-blue-600 to-purple-600 text-white hover:from-blue-700 hover:to-purple-700 focus:ring-blue-500 shadow-lg hover:shadow-xl"
            }
            ButtonVariant::Secondary => {
                "bg-white/10 backdrop-blur-sm text-white border border-white/20 hover:bg-white/20 focus:ring-white/50"
            }
        }
    }
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Md => "px-6 py-3 text-base gap-2",
            ButtonSize::Lg => "px-8 py-4 text-lg gap-3",
        }
    }
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, disabled: bool, extra: &str) -> String {
    let mut class = format!("{BASE} {} {}", variant.classes(), size.classes());
    if disabled {
        class.push_str(" opacity-50 cursor-not-allowed");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Gradient or glass button. Click handlers attach at the call site with `on:click`.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] icon: Option<Glyph>,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] disabled: bool,
    #[prop(default = "button")] button_type: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            disabled=disabled
            class=button_class(variant, size, disabled, class)
        >
            {icon.map(|glyph| view! { <Icon glyph=glyph /> })}
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_primary_medium() {
        let class = button_class(ButtonVariant::default(), ButtonSize::default(), false, "");
        assert!(class.contains("from-blue-600"));
        assert!(class.contains("px-6 py-3"));
        assert!(!class.ends_with(' '));
    }

    #[test]
    fn disabled_dims_and_keeps_extra_last() {
        let class = button_class(ButtonVariant::Secondary, ButtonSize::Lg, true, "w-full");
        assert!(class.contains("bg-white/10"));
        assert!(class.contains("opacity-50 cursor-not-allowed"));
        assert!(class.ends_with("w-full"));
    }

    #[test]
    fn sizes_scale_padding_and_text() {
        let md = button_class(ButtonVariant::Primary, ButtonSize::Md, false, "");
        let lg = button_class(ButtonVariant::Primary, ButtonSize::Lg, false, "");
        assert!(md.contains("px-6 py-3 text-base"));
        assert!(lg.contains("px-8 py-4 text-lg"));
    }
}
