//! Thin wrappers over window-level browser APIs used by the page chrome.

use crate::state::scroll::ScrollMetrics;

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Current calendar year from the browser clock; `None` outside the browser.
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Read scroll offset and document/viewport heights.
pub fn scroll_metrics() -> ScrollMetrics {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return ScrollMetrics::default();
        };
        ScrollMetrics {
            offset: f64::from(el.scroll_top()),
            scroll_height: f64::from(el.scroll_height()),
            client_height: f64::from(el.client_height()),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        ScrollMetrics::default()
    }
}

/// Smoothly scroll the window back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
}

/// Smoothly scroll the element with `id` into view, if present.
pub fn scroll_into_view(id: &str) {
    #[cfg(feature = "csr")]
    {
        let target = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id));
        match target {
            Some(el) => {
                let opts = web_sys::ScrollIntoViewOptions::new();
                opts.set_behavior(web_sys::ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&opts);
            }
            None => log::warn!("scroll target #{id} not found"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Show a blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert suppressed: {message}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("alert: {message}");
    }
}

/// Open the browser print dialog.
pub fn print() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if window.print().is_err() {
                log::warn!("print dialog unavailable");
            }
        }
    }
}
