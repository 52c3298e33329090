//! UI components composed by the home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `PageContext`; the page controller
//! decides when the store-backed surfaces are filled.

pub mod booking_form;
pub mod gallery_grid;
pub mod hero;
pub mod logo_slot;
pub mod nav_menu;
pub mod reviews;
pub mod theme_toggle;
