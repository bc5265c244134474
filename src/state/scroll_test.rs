use super::*;

fn at(offset: f64, scroll_height: f64, client_height: f64) -> ScrollMetrics {
    ScrollMetrics { offset, scroll_height, client_height }
}

#[test]
fn back_to_top_shows_strictly_past_threshold() {
    assert!(!at(0.0, 3000.0, 800.0).back_to_top_visible());
    assert!(!at(600.0, 3000.0, 800.0).back_to_top_visible());
    assert!(at(601.0, 3000.0, 800.0).back_to_top_visible());
}

#[test]
fn progress_is_offset_over_scrollable_distance() {
    assert_eq!(at(0.0, 2000.0, 1000.0).progress_percent(), 0.0);
    assert_eq!(at(500.0, 2000.0, 1000.0).progress_percent(), 50.0);
    assert_eq!(at(1000.0, 2000.0, 1000.0).progress_percent(), 100.0);
}

#[test]
fn progress_is_zero_when_page_does_not_overflow() {
    assert_eq!(at(0.0, 800.0, 800.0).progress_percent(), 0.0);
    assert_eq!(at(10.0, 600.0, 800.0).progress_percent(), 0.0);
}

#[test]
fn progress_is_clamped() {
    assert_eq!(at(1200.0, 2000.0, 1000.0).progress_percent(), 100.0);
    assert_eq!(at(-50.0, 2000.0, 1000.0).progress_percent(), 0.0);
}
