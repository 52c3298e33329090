use time::macros::date;

use super::*;

#[test]
fn anchor_target_strips_hash() {
    assert_eq!(anchor_target("#booking"), Some("booking"));
}

#[test]
fn anchor_target_rejects_bare_hash_and_external_links() {
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("https://example.com/#top"), None);
}

#[test]
fn local_date_converts_zero_based_month() {
    assert_eq!(local_date(2026, 0, 31), Some(date!(2026 - 01 - 31)));
    assert_eq!(local_date(2026, 11, 1), Some(date!(2026 - 12 - 01)));
}

#[test]
fn local_date_rejects_out_of_range_parts() {
    assert_eq!(local_date(2026, 12, 1), None);
    assert_eq!(local_date(2026, 1, 30), None);
}

#[test]
fn scroll_and_alert_are_callable_natively() {
    scroll_to_id("booking");
    scroll_to_id_centered("name");
    alert("hello");
}
