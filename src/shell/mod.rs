//! Interaction Shell
//!
//! The request/response boundary between a front end and the core. A front
//! end hands one line of text to [`Shell::handle`] and gets back a
//! [`Response`] describing what to show. Rendering lives in [`render`]; the
//! interactive loop lives in [`console`].
//!
//! ```text
//! line ──▶ Shell::handle ──▶ resolve ──▶ Response ──▶ Renderer ──▶ text
//!                                         │
//!                        NeedsSubject ────┴──▶ Shell::handle_subject
//! ```

pub mod console;
pub mod render;

pub use console::run_console;
pub use render::Renderer;

use tracing::debug;

use crate::core::{resolve, CelestialBody, Intent};

pub const BLANK_INPUT_MESSAGE: &str = "Input cannot be blank. Please enter a valid command.";
pub const UNRECOGNIZED_MESSAGE: &str = "Could not understand what you asked for. Please try again.";
pub const NOT_FOUND_MESSAGE: &str = "Planet can't be found, please try again.";
pub const BLANK_SUBJECT_MESSAGE: &str = "Please enter a valid planet name.";
pub const SUBJECT_PROMPT: &str = "Enter the name of a planet:";

// =============================================================================
// Views and Responses
// =============================================================================

/// A read-only view over the loaded system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    /// Full planet card
    Details(&'a CelestialBody),
    /// Mass only
    Mass(&'a CelestialBody),
    /// Existence confirmation
    Exists(&'a CelestialBody),
    /// Moon count and names
    Moons(&'a CelestialBody),
    /// Every planet card, in system order
    System(&'a CelestialBody),
    /// The subject is not a planet of this system
    NotFound,
    /// A blank answer to the follow-up planet prompt
    BlankSubject,
}

impl View<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            View::Details(_) => "details",
            View::Mass(_) => "mass",
            View::Exists(_) => "exists",
            View::Moons(_) => "moons",
            View::System(_) => "system",
            View::NotFound => "not-found",
            View::BlankSubject => "blank-subject",
        }
    }
}

/// What a front end should do with one submitted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response<'a> {
    /// Blank or whitespace-only input; the resolver was not consulted
    Blank,
    /// The resolver recognized nothing
    Unrecognized,
    /// End the session
    Exit,
    /// A planet view was requested without naming a planet
    NeedsSubject(Intent),
    View(View<'a>),
}

impl Response<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Response::Blank => "blank",
            Response::Unrecognized => "unrecognized",
            Response::Exit => "exit",
            Response::NeedsSubject(_) => "needs-subject",
            Response::View(_) => "view",
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Response::Exit)
    }
}

// =============================================================================
// Shell
// =============================================================================

/// Dispatches free-text requests against one star system.
pub struct Shell<'a> {
    star: &'a CelestialBody,
    subjects: Vec<&'a str>,
}

impl<'a> Shell<'a> {
    pub fn new(star: &'a CelestialBody) -> Self {
        Self {
            star,
            subjects: star.orbiting_object_name_list(),
        }
    }

    /// Handle one submitted line.
    pub fn handle(&self, input: &str) -> Response<'a> {
        if input.trim().is_empty() {
            return Response::Blank;
        }
        let resolution = resolve(input, &self.subjects);
        if resolution.is_unknown() {
            debug!("request not recognized");
            return Response::Unrecognized;
        }
        debug!(intent = %resolution.intent, subject = ?resolution.subject, "dispatching");
        self.dispatch(resolution.intent, resolution.subject)
    }

    /// Handle the answer to [`SUBJECT_PROMPT`] after a
    /// [`Response::NeedsSubject`].
    ///
    /// The answer is capitalized (first letter upper, rest lower) before the
    /// exact-name lookup.
    pub fn handle_subject(&self, intent: Intent, raw_name: &str) -> Response<'a> {
        let trimmed = raw_name.trim();
        if trimmed.is_empty() {
            return Response::View(View::BlankSubject);
        }
        let name = capitalize(trimmed);
        self.dispatch(intent, Some(name.as_str()))
    }

    fn dispatch(&self, intent: Intent, subject: Option<&str>) -> Response<'a> {
        match intent {
            Intent::Unknown => Response::Unrecognized,
            Intent::Exit => Response::Exit,
            Intent::ShowAll => Response::View(View::System(self.star)),
            _ => match subject {
                Some(name) => Response::View(self.planet_view(intent, name)),
                None => Response::NeedsSubject(intent),
            },
        }
    }

    fn planet_view(&self, intent: Intent, name: &str) -> View<'a> {
        let Some(planet) = self.star.find_orbiting_object(name) else {
            return View::NotFound;
        };
        match intent {
            Intent::ShowMass => View::Mass(planet),
            Intent::ShowExists => View::Exists(planet),
            Intent::ShowMoons => View::Moons(planet),
            _ => View::Details(planet),
        }
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
