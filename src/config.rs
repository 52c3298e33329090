//! Site configuration: backend endpoints, local store identity, and the
//! fixed presentation constants shared by the render passes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle is static, so the backend base URL is resolved at compile time
//! from `PHOTOWAALA_API_URL` and falls back to the hosted backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `PHOTOWAALA_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "https://backend-4hva.onrender.com";

/// IndexedDB database holding the site images.
pub const STORE_NAME: &str = "RoyalPhotowaalaDB";

/// Schema version requested when opening [`STORE_NAME`].
pub const SCHEMA_VERSION: u32 = 1;

/// Maximum number of gallery records rendered; the rest are not displayed.
pub const GALLERY_LIMIT: usize = 50;

/// Period between slideshow advances.
pub const SLIDESHOW_PERIOD_MS: u32 = 4000;

/// Hero background used when the home collection is empty.
pub const FALLBACK_HERO_URL: &str = "https://images.unsplash.com/photo-1529626455594-4ff0802cfb7e";

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Resolved backend endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Backend origin without a trailing slash.
    pub api_base_url: String,
}

impl SiteConfig {
    /// Build a config for an explicit backend origin.
    pub fn new(api_base_url: &str) -> Self {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { api_base_url: api_base_url.to_owned() }
    }

    /// Build the config baked in at compile time.
    pub fn from_env() -> Self {
        Self::new(option_env!("PHOTOWAALA_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// `POST` target for booking requests.
    pub fn booking_endpoint(&self) -> String {
        format!("{}/api/book", self.api_base_url)
    }

    /// `GET`/`POST` target for reviews.
    pub fn reviews_endpoint(&self) -> String {
        format!("{}/api/reviews", self.api_base_url)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
