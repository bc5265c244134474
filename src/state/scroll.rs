//! Scroll position derived values for the back-to-top button and progress bar.

use crate::consts::BACK_TO_TOP_THRESHOLD_PX;

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Raw scroll metrics read from the document element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn back_to_top_visible(self) -> bool {
        self.offset > BACK_TO_TOP_THRESHOLD_PX
    }

    /// Percentage of the scrollable distance traversed, in `[0, 100]`.
    ///
    /// A page that does not overflow the viewport reports 0.
    pub fn progress_percent(self) -> f64 {
        let scrollable = self.scroll_height - self.client_height;
        if scrollable <= 0.0 || !scrollable.is_finite() {
            return 0.0;
        }
        let percent = self.offset / scrollable * 100.0;
        if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) }
    }
}
