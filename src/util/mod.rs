//! Browser-facing helpers.
//!
//! Each function here has a `csr` implementation and a native no-op so the
//! state and page modules that call them still build and test off-browser.

pub mod dom;
pub mod theme_persistence;
pub mod whatsapp;
