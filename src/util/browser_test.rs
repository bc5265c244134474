#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn current_year_is_none_outside_browser() {
    assert_eq!(current_year(), None);
}

#[test]
fn scroll_metrics_default_outside_browser() {
    let metrics = scroll_metrics();
    assert_eq!(metrics, ScrollMetrics::default());
    assert_eq!(metrics.progress_percent(), 0.0);
}

#[test]
fn window_actions_are_noops_but_callable() {
    scroll_to_top();
    scroll_into_view("contact");
    alert("hello");
    print();
}
