//! Platform abstraction layer
//!
//! Browser bindings live in `web` and only build for wasm32. Native hosts
//! use [`crate::Game`] directly.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebGame;
