//! Celestial Body Model
//!
//! An in-memory composition tree: a star owns its planets, each planet owns
//! its moons. Children are owned exclusively by their parent; the link back
//! to the body being orbited is stored by name only.
//!
//! ```text
//! Star ──owns──▶ Planet ──owns──▶ Moon
//!   ▲               │ ▲             │
//!   └── primary ────┘ └── primary ──┘   (name lookup, non-owning)
//! ```

use serde::Serialize;
use std::fmt;

/// Display string used wherever a body has no primary or no orbiting objects.
pub const NONE_SENTINEL: &str = "None";

/// Separator between names in [`CelestialBody::orbiting_object_names`].
pub const NAME_SEPARATOR: &str = ", ";

// =============================================================================
// Body Kind
// =============================================================================

/// The two free-text facts carried by a planet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanetFacts {
    pub fact1: String,
    pub fact2: String,
}

/// Which kind of body this is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BodyKind {
    /// Root of a system; never has a primary
    Star,
    /// Orbits a star; its orbiting objects are moons
    Planet { facts: PlanetFacts },
    /// Orbits a planet
    Moon,
}

// =============================================================================
// Celestial Body
// =============================================================================

/// A star, planet or moon together with the bodies that orbit it.
///
/// Magnitudes are unit-less here. Rendering treats mass as 10^24 kg, distance
/// as million km and rotational speed as m/s.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    name: String,
    #[serde(flatten)]
    kind: BodyKind,
    primary: Option<String>,
    mass: f64,
    distance: f64,
    rotational: f64,
    orbiting_objects: Vec<CelestialBody>,
}

impl CelestialBody {
    fn new(name: impl Into<String>, kind: BodyKind, primary: Option<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            primary,
            mass: 0.0,
            distance: 0.0,
            rotational: 0.0,
            orbiting_objects: Vec::new(),
        }
    }

    /// Create a star with no primary and no orbiting objects.
    pub fn star(name: impl Into<String>) -> Self {
        Self::new(name, BodyKind::Star, None)
    }

    /// Create a planet orbiting `primary`.
    pub fn planet(
        primary: &str,
        name: impl Into<String>,
        mass: f64,
        distance: f64,
        rotational: f64,
        fact1: impl Into<String>,
        fact2: impl Into<String>,
    ) -> Self {
        let facts = PlanetFacts {
            fact1: fact1.into(),
            fact2: fact2.into(),
        };
        Self {
            mass,
            distance,
            rotational,
            ..Self::new(name, BodyKind::Planet { facts }, Some(primary.to_string()))
        }
    }

    /// Create a moon orbiting `primary`.
    pub fn moon(name: impl Into<String>, primary: &str) -> Self {
        Self::new(name, BodyKind::Moon, Some(primary.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &BodyKind {
        &self.kind
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn rotational(&self) -> f64 {
        self.rotational
    }

    /// Name of the body this one orbits, or `"None"` for a root body.
    ///
    /// A primary recorded with an empty name also reports `"None"`.
    pub fn primary_name(&self) -> &str {
        match self.primary.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => NONE_SENTINEL,
        }
    }

    /// The owned children, in insertion order.
    pub fn orbiting_objects(&self) -> &[CelestialBody] {
        &self.orbiting_objects
    }

    pub(crate) fn orbiting_objects_mut(&mut self) -> &mut [CelestialBody] {
        &mut self.orbiting_objects
    }

    pub fn orbiting_object_count(&self) -> usize {
        self.orbiting_objects.len()
    }

    /// Children's names joined with `", "`, or `"None"` when there are none.
    pub fn orbiting_object_names(&self) -> String {
        if self.orbiting_objects.is_empty() {
            return NONE_SENTINEL.to_string();
        }
        self.orbiting_objects
            .iter()
            .map(CelestialBody::name)
            .collect::<Vec<_>>()
            .join(NAME_SEPARATOR)
    }

    /// Children's names as a list, in insertion order.
    ///
    /// This is the subject list handed to the intent resolver. Unlike
    /// [`orbiting_object_names`](Self::orbiting_object_names) it is empty,
    /// not `["None"]`, for a childless body.
    pub fn orbiting_object_name_list(&self) -> Vec<&str> {
        self.orbiting_objects.iter().map(CelestialBody::name).collect()
    }

    /// Append children after any existing ones. No de-duplication.
    pub fn add_orbiting_objects<I>(&mut self, objects: I)
    where
        I: IntoIterator<Item = CelestialBody>,
    {
        self.orbiting_objects.extend(objects);
    }

    /// First direct child whose name equals `name` exactly (case-sensitive).
    pub fn find_orbiting_object(&self, name: &str) -> Option<&CelestialBody> {
        self.orbiting_objects.iter().find(|body| body.name == name)
    }

    pub fn facts(&self) -> Option<&PlanetFacts> {
        match &self.kind {
            BodyKind::Planet { facts } => Some(facts),
            _ => None,
        }
    }

    pub fn fact1(&self) -> Option<&str> {
        self.facts().map(|f| f.fact1.as_str())
    }

    pub fn fact2(&self) -> Option<&str> {
        self.facts().map(|f| f.fact2.as_str())
    }

    /// Both facts joined by a single space; empty for non-planets.
    pub fn combined_facts(&self) -> String {
        self.facts()
            .map(|f| format!("{} {}", f.fact1, f.fact2))
            .unwrap_or_default()
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BodyKind::Star => write!(
                f,
                "My name is {} and my orbiting objects are {}",
                self.name,
                self.orbiting_object_names()
            ),
            BodyKind::Planet { .. } => write!(
                f,
                "My name is {}, my mass is {:?}e+24 kg, my distance from the Sun is {:?} million km, \
                 I rotate at {:?} m/s, I orbit {} and I have {} orbiting objects: {}.\
                 2 facts about me are: {}",
                self.name,
                self.mass,
                self.distance,
                self.rotational,
                self.primary_name(),
                self.orbiting_object_count(),
                self.orbiting_object_names(),
                self.combined_facts()
            ),
            BodyKind::Moon => write!(
                f,
                "My name is {} and I orbit {}",
                self.name,
                self.primary_name()
            ),
        }
    }
}
