//! Small browser helpers: smooth scrolling, alerts, and the local calendar date.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use time::Date;

/// Element id targeted by an in-page `#anchor` link.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scroll the element with `id` to the top of the viewport.
pub fn scroll_to_id(id: &str) {
    #[cfg(feature = "csr")]
    scroll_element(id, web_sys::ScrollLogicalPosition::Start);
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Smoothly scroll the element with `id` to the middle of the viewport.
pub fn scroll_to_id_centered(id: &str) {
    #[cfg(feature = "csr")]
    scroll_element(id, web_sys::ScrollLogicalPosition::Center);
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

#[cfg(feature = "csr")]
fn scroll_element(id: &str, block: web_sys::ScrollLogicalPosition) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("scroll target #{id} not found");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                log::warn!("alert failed: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("alert: {message}");
    }
}

/// Today's date in the visitor's local calendar.
pub fn today() -> Date {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        local_date(now.get_full_year(), now.get_month(), now.get_date()).unwrap_or_else(|| {
            log::warn!("browser clock returned an invalid date");
            Date::MIN
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}

/// Build a date from JavaScript `Date` parts (`month` is zero-based).
#[cfg(any(test, feature = "csr"))]
fn local_date(year: u32, month: u32, day: u32) -> Option<Date> {
    let year = i32::try_from(year).ok()?;
    let month = time::Month::try_from(u8::try_from(month + 1).ok()?).ok()?;
    Date::from_calendar_date(year, month, u8::try_from(day).ok()?).ok()
}
