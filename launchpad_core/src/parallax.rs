//! Scroll-linked background offset.
//!
//! The decorative gradient layer slides down by up to half its height as the
//! page scrolls from top to bottom.

/// Offset at full scroll, in percent of the layer height.
pub const MAX_OFFSET_PERCENT: f64 = 50.0;

/// Scroll progress in `[0, 1]` from the window metrics.
///
/// A page that fits in the viewport has nothing to scroll and reports 0.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Background offset in percent for a scroll progress value.
pub fn offset_percent(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0) * MAX_OFFSET_PERCENT
}

/// CSS `transform` value for the background layer.
pub fn transform_css(progress: f64) -> String {
    format!("translateY({:.2}%)", offset_percent(progress))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn maps_progress_linearly() {
        assert_eq!(offset_percent(0.0), 0.0);
        assert_eq!(offset_percent(0.5), 25.0);
        assert_eq!(offset_percent(1.0), 50.0);
    }

    #[test]
    fn clamps_overscroll() {
        assert_eq!(offset_percent(-0.3), 0.0);
        assert_eq!(offset_percent(1.7), 50.0);
        assert_eq!(offset_percent(f64::NAN), 0.0);
    }

    #[test]
    fn progress_from_window_metrics() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn css_transform() {
        assert_eq!(transform_css(0.5), "translateY(25.00%)");
    }
}
