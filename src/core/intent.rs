//! Intent Resolution
//!
//! Maps one line of free text onto a fixed set of query intents plus an
//! optional subject (a planet name found in the same text).
//!
//! # Algorithm
//!
//! 1. Lower-case the input for matching only.
//! 2. The first known subject whose lower-cased name occurs anywhere in the
//!    input becomes the candidate subject. List order wins, not length.
//! 3. A single token that matched a subject is a details request.
//! 4. Otherwise the first intent in [`INTENT_KEYWORDS`] order with any phrase
//!    occurring in the input wins, paired with the candidate subject.
//! 5. Nothing matched: [`Intent::Unknown`] with no subject.
//!
//! Matching is plain substring search. A very short subject name can match
//! inside an unrelated word; there is no word-boundary check.

use serde::Serialize;
use std::fmt;
use tracing::debug;

// =============================================================================
// Intent
// =============================================================================

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    /// Full details card for one planet
    ShowDetails,
    /// Mass of one planet
    ShowMass,
    /// Whether a planet is part of the system
    ShowExists,
    /// Moon count and names for one planet
    ShowMoons,
    /// Every planet in the system
    ShowAll,
    /// End the session
    Exit,
    /// Nothing recognized
    Unknown,
}

/// Keyword phrases per intent. Declaration order is the tie-break.
pub const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::ShowDetails,
        &[
            "tell me about",
            "details about",
            "planet details",
            "planet info",
            "display planet",
            "show planet",
        ],
    ),
    (Intent::ShowMass, &["mass", "weight", "heavy", "weigh"]),
    (
        Intent::ShowExists,
        &[
            "check planet",
            "in the list",
            "exists",
            "exist",
            "list of planets",
            "in list",
            "a planet",
        ],
    ),
    (
        Intent::ShowMoons,
        &[
            "moons",
            "how many",
            "how many moons",
            "planet's moons",
            "number of moons",
            "show number",
        ],
    ),
    (
        Intent::ShowAll,
        &[
            "show all",
            "all information",
            "all info",
            "everything",
            "complete system",
            "solar system",
        ],
    ),
    (Intent::Exit, &["exit", "quit", "leave", "close", "bye"]),
];

impl Intent {
    /// True for the views that describe a single planet.
    pub fn needs_subject(&self) -> bool {
        matches!(
            self,
            Intent::ShowDetails | Intent::ShowMass | Intent::ShowExists | Intent::ShowMoons
        )
    }

    /// Stable kebab-case label.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::ShowDetails => "show-details",
            Intent::ShowMass => "show-mass",
            Intent::ShowExists => "show-exists",
            Intent::ShowMoons => "show-moons",
            Intent::ShowAll => "show-all",
            Intent::Exit => "exit",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Outcome of [`resolve`]. The subject borrows the canonical name from the
/// subject list, never the user's casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    pub intent: Intent,
    pub subject: Option<&'a str>,
}

impl<'a> Resolution<'a> {
    /// The no-match result.
    pub const UNKNOWN: Resolution<'static> = Resolution {
        intent: Intent::Unknown,
        subject: None,
    };

    pub fn new(intent: Intent, subject: Option<&'a str>) -> Self {
        Self { intent, subject }
    }

    pub fn is_unknown(&self) -> bool {
        self.intent == Intent::Unknown
    }
}

/// Resolve `text` against the currently known subject names.
///
/// Pure and infallible: any input, including an empty subject list, yields a
/// value.
pub fn resolve<'a, S>(text: &str, known_subjects: &'a [S]) -> Resolution<'a>
where
    S: AsRef<str>,
{
    let lowered = text.to_lowercase();

    let subject = known_subjects
        .iter()
        .map(AsRef::as_ref)
        .find(|name| lowered.contains(&name.to_lowercase()));

    if subject.is_some() && lowered.split_whitespace().count() < 2 {
        debug!(?subject, "bare subject treated as details request");
        return Resolution::new(Intent::ShowDetails, subject);
    }

    for (intent, phrases) in INTENT_KEYWORDS {
        if phrases.iter().any(|phrase| lowered.contains(phrase)) {
            debug!(%intent, ?subject, "intent resolved");
            return Resolution::new(*intent, subject);
        }
    }

    debug!(input = text, "no intent recognized");
    Resolution::UNKNOWN
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLANETS: &[&str] = &["Earth", "Mars", "Venus", "Jupiter"];

    #[test]
    fn test_sentence_details() {
        let r = resolve("tell me about Mars", PLANETS);
        assert_eq!(r, Resolution::new(Intent::ShowDetails, Some("Mars")));
    }

    #[test]
    fn test_bare_name_is_details_in_canonical_case() {
        let r = resolve("venus", PLANETS);
        assert_eq!(r, Resolution::new(Intent::ShowDetails, Some("Venus")));

        let r = resolve("  JUPITER  ", PLANETS);
        assert_eq!(r, Resolution::new(Intent::ShowDetails, Some("Jupiter")));
    }

    #[test]
    fn test_mass_case_insensitive() {
        let r = resolve("What is the MASS of mars", PLANETS);
        assert_eq!(r, Resolution::new(Intent::ShowMass, Some("Mars")));
    }

    #[test]
    fn test_exists() {
        let r = resolve("does earth exist", PLANETS);
        assert_eq!(r, Resolution::new(Intent::ShowExists, Some("Earth")));
    }

    #[test]
    fn test_moons() {
        let r = resolve("how many moons does earth have", PLANETS);
        assert_eq!(r, Resolution::new(Intent::ShowMoons, Some("Earth")));
    }

    #[test]
    fn test_show_all_without_subjects() {
        let none: &[&str] = &[];
        let r = resolve("tell me everything", none);
        assert_eq!(r, Resolution::new(Intent::ShowAll, None));
    }

    #[test]
    fn test_unmatched() {
        assert_eq!(resolve("this is unmatched", &["Earth"]), Resolution::UNKNOWN);
        assert!(resolve("this is unmatched", &["Earth"]).is_unknown());
    }

    #[test]
    fn test_blank_input_is_unknown() {
        assert_eq!(resolve("", PLANETS), Resolution::UNKNOWN);
        assert_eq!(resolve("   \t ", PLANETS), Resolution::UNKNOWN);
    }

    #[test]
    fn test_single_keyword_without_subject() {
        assert_eq!(resolve("exit", PLANETS), Resolution::new(Intent::Exit, None));
        assert_eq!(resolve("Bye", PLANETS), Resolution::new(Intent::Exit, None));
    }

    #[test]
    fn test_declaration_order_beats_specificity() {
        // "how many" is a moons phrase, but "weigh" appears first in table order
        let r = resolve("how many does mars weigh", PLANETS);
        assert_eq!(r, Resolution::new(Intent::ShowMass, Some("Mars")));

        // "a planet" (exists) is declared before "moons"
        let r = resolve("is mars a planet with moons", PLANETS);
        assert_eq!(r, Resolution::new(Intent::ShowExists, Some("Mars")));
    }

    #[test]
    fn test_subject_containing_earlier_phrase() {
        // The subject's own text carries "mass", which outranks "how many"
        let subjects = &["Massive"];
        let r = resolve("how many moons does massive have", subjects);
        assert_eq!(r, Resolution::new(Intent::ShowMass, Some("Massive")));
    }

    #[test]
    fn test_first_subject_in_list_order_wins() {
        let r = resolve("tell me about marsupial", &["Mars", "Marsupial"]);
        assert_eq!(r.subject, Some("Mars"));

        let r = resolve("tell me about marsupial", &["Marsupial", "Mars"]);
        assert_eq!(r.subject, Some("Marsupial"));
    }

    #[test]
    fn test_short_subject_matches_inside_words() {
        let r = resolve("show all the things", &["Io"]);
        assert_eq!(r, Resolution::new(Intent::ShowAll, None));

        let r = resolve("quit the session", &["Io"]);
        assert_eq!(r, Resolution::new(Intent::Exit, Some("Io")));
    }

    #[test]
    fn test_empty_subject_name_matches_any_input() {
        let r = resolve("mars", &["", "Mars"]);
        assert_eq!(r, Resolution::new(Intent::ShowDetails, Some("")));
    }

    #[test]
    fn test_single_token_without_subject_uses_keywords() {
        assert_eq!(resolve("everything", PLANETS), Resolution::new(Intent::ShowAll, None));
        assert_eq!(resolve("pluto", PLANETS), Resolution::UNKNOWN);
    }

    #[test]
    fn test_accepts_owned_subjects() {
        let owned = vec!["Neptune".to_string()];
        let r = resolve("neptune planet info", &owned);
        assert_eq!(r, Resolution::new(Intent::ShowDetails, Some("Neptune")));
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let first = resolve("tell me about Mars", PLANETS);
        let second = resolve("this is unmatched", PLANETS);
        let third = resolve("tell me about Mars", PLANETS);
        assert_eq!(first, third);
        assert!(second.is_unknown());
    }

    #[test]
    fn test_keyword_table_shape() {
        assert_eq!(INTENT_KEYWORDS.len(), 6);
        assert!(INTENT_KEYWORDS
            .iter()
            .all(|(intent, phrases)| *intent != Intent::Unknown && !phrases.is_empty()));
    }

    #[test]
    fn test_needs_subject() {
        assert!(Intent::ShowDetails.needs_subject());
        assert!(Intent::ShowMoons.needs_subject());
        assert!(!Intent::ShowAll.needs_subject());
        assert!(!Intent::Exit.needs_subject());
    }

    #[test]
    fn test_name_matches_serialized_label() {
        for (intent, _) in INTENT_KEYWORDS {
            assert_eq!(serde_json::to_value(intent).unwrap(), intent.name());
        }
        assert_eq!(Intent::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_resolution_serializes_intent_and_subject() {
        let json = serde_json::to_value(resolve("does earth exist", &["Earth"])).unwrap();
        assert_eq!(json, serde_json::json!({"intent": "show-exists", "subject": "Earth"}));
        let json = serde_json::to_value(Resolution::UNKNOWN).unwrap();
        assert!(json["subject"].is_null());
    }
}
