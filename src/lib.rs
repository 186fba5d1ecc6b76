//! orrery - Query a small star system in plain words
//!
//! Models a star with orbiting planets, each with orbiting moons, and answers
//! free-text requests such as "how many moons does Jupiter have" against it.
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **core**: Body model, intent resolver, catalog loading. No UI concerns.
//! - **shell**: Request/response boundary plus console rendering
//! - **server**: JSON-RPC front end over the same boundary
//! - **bin/orrery.rs**: Thin CLI wrapper that calls the library
//!
//! # Example
//!
//! ```
//! use orrery::core::{resolve, Intent};
//!
//! let r = resolve("tell me about Mars", &["Mars", "Venus"]);
//! assert_eq!(r.intent, Intent::ShowDetails);
//! assert_eq!(r.subject, Some("Mars"));
//! ```

pub mod core;
pub mod server;
pub mod shell;

pub use crate::core::{
    resolve, Catalog, CelestialBody, Config, Intent, OrreryError, Resolution, Result, Theme,
};
pub use crate::shell::{Renderer, Response, Shell, View};

/// Crate version, as reported by `--version` and the server handshake
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the version of the orrery library
pub fn version() -> &'static str {
    VERSION
}
