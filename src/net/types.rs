//! Wire DTOs for the booking and reviews endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /api/book`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Package identifier selected in the form.
    pub package: String,
    /// Shoot date as `YYYY-MM-DD`.
    pub date: String,
    pub details: String,
}

/// Response of `POST /api/book`; the server sends one of the two fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BookingResponse {
    #[serde(default)]
    pub error: Option<String>,
    /// WhatsApp deep link carrying the pre-filled booking message.
    #[serde(default)]
    pub wa_link: Option<String>,
}

/// A customer review, as listed and as submitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: i32,
    pub comment: String,
}

/// Accept any rating the backend stored: floats truncate, numeric strings
/// parse, and anything else counts as zero, so one odd row cannot fail the
/// whole list.
#[allow(clippy::cast_possible_truncation)]
fn lenient_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let rating = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    // Saturating cast; NaN becomes 0.
    Ok(rating.trunc() as i32)
}

/// Response of `POST /api/reviews`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewSubmitResponse {
    #[serde(default)]
    pub success: bool,
}
