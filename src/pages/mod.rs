//! Page-level route components.

pub mod home;
