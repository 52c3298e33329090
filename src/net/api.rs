//! REST calls to the booking/reviews backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, sent with credentials.
//! Native builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so widgets can show the
//! failure inline and let the visitor retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{BookingRequest, Review};
#[cfg(any(test, feature = "csr"))]
use super::types::BookingResponse;
#[cfg(feature = "csr")]
use super::types::ReviewSubmitResponse;
use crate::config::SiteConfig;

/// Shown when the backend rejects a booking without an explanation.
pub const BOOKING_FAILED_MESSAGE: &str = "Failed to process booking";

/// Error returned by the backend helpers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Backend answered with a non-success status.
    #[error("{0}")]
    Rejected(String),
    /// Booking succeeded without the WhatsApp hand-off link.
    #[error("No WhatsApp link received from server")]
    MissingWhatsAppLink,
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The response body was not the expected JSON.
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Turn a booking response into the WhatsApp link or a user-facing error.
///
/// `body` is `None` when the response could not be decoded.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn interpret_booking(status_ok: bool, body: Option<BookingResponse>) -> Result<String, ApiError> {
    if !status_ok {
        let message = body
            .and_then(|b| b.error)
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| BOOKING_FAILED_MESSAGE.to_owned());
        return Err(ApiError::Rejected(message));
    }
    body.and_then(|b| b.wa_link)
        .filter(|link| !link.is_empty())
        .ok_or(ApiError::MissingWhatsAppLink)
}

#[cfg(any(test, feature = "csr"))]
fn status_failed_message(endpoint: &str, status: u16) -> String {
    format!("{endpoint} failed: {status}")
}

/// Submit a booking via `POST /api/book`, returning the WhatsApp link.
///
/// # Errors
///
/// Returns the server's message on rejection, [`ApiError::MissingWhatsAppLink`]
/// if the link is absent, or a transport error.
pub async fn submit_booking(config: &SiteConfig, request: &BookingRequest) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&config.booking_endpoint())
            .credentials(web_sys::RequestCredentials::Include)
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status_ok = resp.ok();
        let body = match resp.json::<BookingResponse>().await {
            Ok(body) => Some(body),
            Err(err) => {
                log::warn!("booking response was not JSON: {err}");
                None
            }
        };
        interpret_booking(status_ok, body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// Fetch approved reviews via `GET /api/reviews`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a review list.
pub async fn fetch_reviews(config: &SiteConfig) -> Result<Vec<Review>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&config.reviews_endpoint())
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Rejected(status_failed_message("reviews", resp.status())));
        }
        resp.json::<Vec<Review>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Submit a review for moderation via `POST /api/reviews`.
///
/// Returns the server's `success` flag.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn submit_review(config: &SiteConfig, review: &Review) -> Result<bool, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&config.reviews_endpoint())
            .credentials(web_sys::RequestCredentials::Include)
            .json(review)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body: ReviewSubmitResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.success)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, review);
        Err(ApiError::Unavailable)
    }
}
