//! # photowaala
//!
//! Leptos + WASM front end for the Royal Photowaala photography studio site.
//!
//! | Module       | Purpose                                                   |
//! |--------------|-----------------------------------------------------------|
//! | `store`      | Local image store: schema, IndexedDB backend, memory twin |
//! | `state`      | View models for logo, gallery, hero, booking, reviews     |
//! | `net`        | Booking and review REST calls and wire types              |
//! | `components` | Section components sharing the page context               |
//! | `pages`      | Home page controller                                      |
//! | `util`       | DOM, theme persistence and WhatsApp helpers               |
//! | `config`     | Backend URL and fixed site constants                      |
//!
//! Build with the `csr` feature for the browser. Without it every browser
//! call is a no-op stub, so the view models and loaders test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod store;
pub mod util;
