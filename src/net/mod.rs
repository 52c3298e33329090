//! Networking for the booking and reviews backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and `types` defines the wire schema.

pub mod api;
pub mod types;
