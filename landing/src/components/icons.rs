//! Inline SVG icons (Lucide, 24px grid, stroke style).

use launchpad_core::content::IconKind;
use leptos::prelude::*;

/// Every glyph the page draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    ArrowRight,
    BarChart,
    Calendar,
    Check,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    Globe,
    Mail,
    Play,
    Shield,
    Smartphone,
    Star,
    Users,
    X,
    Zap,
}

impl Glyph {
    /// SVG children for this glyph.
    fn markup(self) -> &'static str {
        match self {
            Glyph::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Glyph::BarChart => {
                r#"<line x1="12" x2="12" y1="20" y2="10"/><line x1="18" x2="18" y1="20" y2="4"/><line x1="6" x2="6" y1="20" y2="16"/>"#
            }
            Glyph::Calendar => {
                r#"<rect width="18" height="18" x="3" y="4" rx="2"/><path d="M16 2v4"/><path d="M8 2v4"/><path d="M3 10h18"/>"#
            }
            Glyph::Check => r#"<path d="M20 6 9 17l-5-5"/>"#,
            Glyph::ChevronDown => r#"<path d="m6 9 6 6 6-6"/>"#,
            Glyph::ChevronLeft => r#"<path d="m15 18-6-6 6-6"/>"#,
            Glyph::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
            Glyph::Globe => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#
            }
            Glyph::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Glyph::Play => r#"<polygon points="6 3 20 12 6 21 6 3"/>"#,
            Glyph::Shield => {
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#
            }
            Glyph::Smartphone => {
                r#"<rect width="14" height="20" x="5" y="2" rx="2" ry="2"/><path d="M12 18h.01"/>"#
            }
            Glyph::Star => {
                r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
            }
            Glyph::Users => {
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
            }
            Glyph::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            Glyph::Zap => {
                r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#
            }
        }
    }
}

impl From<IconKind> for Glyph {
    fn from(kind: IconKind) -> Self {
        match kind {
            IconKind::Zap => Glyph::Zap,
            IconKind::Shield => Glyph::Shield,
            IconKind::Users => Glyph::Users,
            IconKind::BarChart => Glyph::BarChart,
            IconKind::Globe => Glyph::Globe,
            IconKind::Smartphone => Glyph::Smartphone,
        }
    }
}

/// Renders one glyph. Size and colour come from `class`.
#[component]
pub fn Icon(glyph: Glyph, #[prop(default = "w-5 h-5")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
            inner_html=glyph.markup()
        ></svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_icons_map_one_to_one() {
        let kinds = [
            IconKind::Zap,
            IconKind::Shield,
            IconKind::Users,
            IconKind::BarChart,
            IconKind::Globe,
            IconKind::Smartphone,
        ];
        let glyphs: Vec<Glyph> = kinds.into_iter().map(Glyph::from).collect();
        for (i, a) in glyphs.iter().enumerate() {
            assert!(glyphs[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn markup_is_svg_children() {
        assert!(Glyph::Check.markup().starts_with('<'));
        assert!(!Glyph::Check.markup().contains("<svg"));
    }
}
