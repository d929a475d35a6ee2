//! SafeIMEI Web Interface
//!
//! Client-side rendered front end for the national stolen-phone registry:
//! the public IMEI lookup and information pages, and the officer portal.
//! On native targets the crate also provides the static host that serves the
//! compiled bundle.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

#[cfg(not(target_arch = "wasm32"))]
pub mod routes;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;

pub use app::App;
pub use state::AppContext;

#[cfg(not(target_arch = "wasm32"))]
pub use server::{build_app, serve};

/// Mount the application on `<body>`
pub fn mount() {
    leptos::mount::mount_to_body(App);
}
