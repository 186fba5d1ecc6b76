//! Response Rendering
//!
//! Turns shell responses into display text. The [`Theme`] only changes
//! decoration; the sentences themselves are identical in both themes.

use crate::core::{CelestialBody, Theme};
use crate::shell::{
    Response, View, BLANK_INPUT_MESSAGE, BLANK_SUBJECT_MESSAGE, NOT_FOUND_MESSAGE, SUBJECT_PROMPT,
    UNRECOGNIZED_MESSAGE,
};

/// Formats responses and views as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with a specific theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    // =========================================================================
    // Decoration
    // =========================================================================

    fn planet_emoji(&self) -> &'static str {
        match self.theme {
            Theme::Plain => "",
            Theme::Full => "🪐 ",
        }
    }

    fn system_emoji(&self) -> &'static str {
        match self.theme {
            Theme::Plain => "",
            Theme::Full => "🌌 ",
        }
    }

    fn error_prefix(&self) -> &'static str {
        match self.theme {
            Theme::Plain => "Error: ",
            Theme::Full => "⚠️  ",
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Text for any shell response.
    pub fn render(&self, response: &Response<'_>) -> String {
        match response {
            Response::Blank => format!("{}{}", self.error_prefix(), BLANK_INPUT_MESSAGE),
            Response::Unrecognized => format!("{}{}", self.error_prefix(), UNRECOGNIZED_MESSAGE),
            Response::Exit => "Goodbye!".to_string(),
            Response::NeedsSubject(_) => SUBJECT_PROMPT.to_string(),
            Response::View(view) => self.render_view(view),
        }
    }

    /// Text for one view.
    pub fn render_view(&self, view: &View<'_>) -> String {
        match view {
            View::Details(planet) => self.planet_card(planet),
            View::Mass(planet) => format!(
                "The mass of planet {} is: {:?} x 10^24 kg.",
                planet.name(),
                planet.mass()
            ),
            View::Exists(planet) => format!("Yes! Planet {} exists.", planet.name()),
            View::Moons(planet) => moons_summary(planet),
            View::System(star) => self.system_listing(star),
            View::NotFound => NOT_FOUND_MESSAGE.to_string(),
            View::BlankSubject => BLANK_SUBJECT_MESSAGE.to_string(),
        }
    }

    /// Card with every attribute of one planet. The moon-name line is left out
    /// when the planet has no moons.
    pub fn planet_card(&self, planet: &CelestialBody) -> String {
        let mut lines = Vec::with_capacity(10);
        if self.theme == Theme::Full {
            lines.push(format!("{}{}", self.planet_emoji(), planet.name()));
        }
        lines.push(format!("Name: {}", planet.name()));
        lines.push(format!("Orbits: {}", planet.primary_name()));
        lines.push(format!("Mass: {:?} x 10^24 kg", planet.mass()));
        lines.push(format!("Distance from Sun: {:?} million km", planet.distance()));
        lines.push(format!("Rotational speed: {:?} m/s", planet.rotational()));
        lines.push(format!("Fact 1: {}", planet.fact1().unwrap_or_default()));
        lines.push(format!("Fact 2: {}", planet.fact2().unwrap_or_default()));
        lines.push(format!("Number of moons: {}", planet.orbiting_object_count()));
        if planet.orbiting_object_count() > 0 {
            lines.push(format!("Moon names: {}", planet.orbiting_object_names()));
        }
        lines.join("\n")
    }

    /// Every planet card of `star`, in system order.
    pub fn system_listing(&self, star: &CelestialBody) -> String {
        let mut sections = vec![format!("{}The Complete Solar System", self.system_emoji())];
        sections.extend(star.orbiting_objects().iter().map(|p| self.planet_card(p)));
        sections.join("\n\n")
    }
}

fn moons_summary(planet: &CelestialBody) -> String {
    if planet.orbiting_object_count() == 0 {
        return format!("{} has no moons.", planet.name());
    }
    format!(
        "The number of moons orbiting planet {} is: {}.\n\nThey are {}",
        planet.name(),
        planet.orbiting_object_count(),
        planet.orbiting_object_names()
    )
}
