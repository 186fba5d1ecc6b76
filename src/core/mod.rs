//! Core module for orrery
//!
//! The UI-free part of the crate: the body model, the intent resolver and the
//! catalog that populates the model.
//!
//! # Architecture
//!
//! - `body`: Star → planet → moon composition tree
//! - `intent`: Free text → (intent, subject)
//! - `catalog`: Planet and moon reference sources
//! - `config`: Runtime configuration
//! - `error`: Error types using thiserror

pub mod body;
pub mod catalog;
pub mod config;
pub mod error;
pub mod intent;

// Re-export commonly used types
pub use body::{BodyKind, CelestialBody, PlanetFacts, NONE_SENTINEL};
pub use catalog::{Catalog, MoonCatalog, PlanetRecord};
pub use config::{Config, Theme};
pub use error::{OrreryError, Result, ResultExt};
pub use intent::{resolve, Intent, Resolution, INTENT_KEYWORDS};
