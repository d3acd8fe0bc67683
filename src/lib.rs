//! UAForge: a bulk Android/Facebook user-agent generator written in Rust
//!
//! The core is a pure string-template generator that assembles synthetic
//! Android WebView ("Dalvik") and Facebook-app user-agent strings from fixed
//! component pools. A small axum web shell renders a form around it for
//! display, copy, and bulk download.

pub mod config;
pub mod generator;
pub mod results;
pub mod stats;
pub mod web;

pub use config::Settings;
pub use generator::{generate, GeneratorError, Variant};
pub use results::Batch;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of user agents per batch
pub const DEFAULT_COUNT: u32 = 1;

/// Maximum batch size the web UI will serve
pub const MAX_COUNT: u32 = 1000;
