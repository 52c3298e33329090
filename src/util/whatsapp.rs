//! WhatsApp deep-link helpers for the booking hand-off.

#[cfg(test)]
#[path = "whatsapp_test.rs"]
mod whatsapp_test;

/// Decode the pre-filled message carried in a `wa.me` link's `text=` part.
///
/// Form-encoded `+` separators become spaces. Links without a message yield
/// an empty preview; undecodable messages are shown raw.
pub fn message_preview(link: &str) -> String {
    let Some(encoded) = link.split("text=").nth(1) else {
        return String::new();
    };
    let decoded = match urlencoding::decode(encoded) {
        Ok(text) => text.into_owned(),
        Err(err) => {
            log::warn!("could not decode WhatsApp message: {err}");
            encoded.to_owned()
        }
    };
    decoded.replace('+', " ")
}

/// Open `link` in a new tab. Returns `false` when the browser blocked it.
pub fn open_in_new_tab(link: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.open_with_url_and_target(link, "_blank") {
            Ok(Some(opened)) => !opened.closed().unwrap_or(true),
            Ok(None) => false,
            Err(err) => {
                log::error!("error opening WhatsApp: {err:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = link;
        false
    }
}
