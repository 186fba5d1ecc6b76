//! Catalog Loader
//!
//! Reads the two static reference sources and assembles the body tree:
//!
//! - **planets**: a JSON array of records with `name`, `mass`, `distance`,
//!   `rotational`, `fact1` and `fact2`, all required
//! - **moons**: a JSON object mapping a planet name to its moon names
//!
//! Both sources are parsed completely before anything is attached, so a
//! malformed source never leaves a half-built tree behind.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

use crate::core::body::CelestialBody;
use crate::core::config::Config;
use crate::core::error::{OrreryError, Result};

const BUNDLED_PLANETS: &str = include_str!("../../data/planets.json");
const BUNDLED_MOONS: &str = include_str!("../../data/moons.json");

/// One planet as stored in the planet source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanetRecord {
    pub name: String,
    pub mass: f64,
    pub distance: f64,
    pub rotational: f64,
    pub fact1: String,
    pub fact2: String,
}

impl PlanetRecord {
    /// Build the planet body orbiting `primary`.
    pub fn to_planet(&self, primary: &str) -> CelestialBody {
        CelestialBody::planet(
            primary,
            self.name.as_str(),
            self.mass,
            self.distance,
            self.rotational,
            self.fact1.as_str(),
            self.fact2.as_str(),
        )
    }
}

/// Planet name to ordered moon names.
pub type MoonCatalog = BTreeMap<String, Vec<String>>;

/// Parsed contents of both catalog sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub planets: Vec<PlanetRecord>,
    pub moons: MoonCatalog,
}

/// Parse a planet source. `source_name` only labels errors.
pub fn parse_planets(json: &str, source_name: &str) -> Result<Vec<PlanetRecord>> {
    serde_json::from_str(json).map_err(|e| OrreryError::invalid_source(source_name, e.to_string()))
}

/// Parse a moon source. `source_name` only labels errors.
pub fn parse_moons(json: &str, source_name: &str) -> Result<MoonCatalog> {
    serde_json::from_str(json).map_err(|e| OrreryError::invalid_source(source_name, e.to_string()))
}

fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(OrreryError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path)
        .map_err(|e| OrreryError::from(e).with_context(path.display().to_string()))
}

impl Catalog {
    /// Parse both sources from strings.
    pub fn from_json(
        planets_json: &str,
        planets_source: &str,
        moons_json: &str,
        moons_source: &str,
    ) -> Result<Self> {
        Ok(Self {
            planets: parse_planets(planets_json, planets_source)?,
            moons: parse_moons(moons_json, moons_source)?,
        })
    }

    /// Read `planets_file` and `moons_file` from `dir`.
    pub fn load(dir: &Path, planets_file: &str, moons_file: &str) -> Result<Self> {
        Self::load_files(&dir.join(planets_file), &dir.join(moons_file))
    }

    /// Read both sources from explicit paths.
    pub fn load_files(planets_path: &Path, moons_path: &Path) -> Result<Self> {
        let planets_json = read_source(planets_path)?;
        let moons_json = read_source(moons_path)?;
        Self::from_json(
            &planets_json,
            &planets_path.display().to_string(),
            &moons_json,
            &moons_path.display().to_string(),
        )
    }

    /// The Sol catalog compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_PLANETS, "planets.json", BUNDLED_MOONS, "moons.json")
    }

    /// Load from the configured directory, or the bundled catalog if none.
    pub fn from_config(config: &Config) -> Result<Self> {
        match (config.planets_path(), config.moons_path()) {
            (Some(planets), Some(moons)) => Self::load_files(&planets, &moons),
            _ => Self::bundled(),
        }
    }

    /// Build the star, attach every planet, then attach each planet's moons.
    ///
    /// Planets missing from the moon mapping get no moons. Mapping keys that
    /// name no planet are skipped.
    pub fn build_system(&self, star_name: &str) -> CelestialBody {
        let mut star = CelestialBody::star(star_name);
        star.add_orbiting_objects(self.planets.iter().map(|record| record.to_planet(star_name)));

        for planet in star.orbiting_objects_mut() {
            let Some(names) = self.moons.get(planet.name()) else {
                continue;
            };
            let moons: Vec<CelestialBody> = names
                .iter()
                .map(|name| CelestialBody::moon(name.as_str(), planet.name()))
                .collect();
            planet.add_orbiting_objects(moons);
        }

        for key in self.moons.keys() {
            if star.find_orbiting_object(key).is_none() {
                warn!(planet = %key, "moon catalog names an unknown planet; skipping");
            }
        }

        info!(
            star = star_name,
            planets = star.orbiting_object_count(),
            "solar system created"
        );
        star
    }
}
