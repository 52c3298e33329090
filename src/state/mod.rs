//! Client-side state and view models.
//!
//! DESIGN
//! ======
//! State is split by surface (`images`, `slideshow`, `booking`, `reviews`,
//! `theme`) so each component depends on a small focused model; `page` ties
//! them together into the context the page controller owns.

pub mod booking;
pub mod images;
pub mod page;
pub mod reviews;
pub mod slideshow;
pub mod theme;
