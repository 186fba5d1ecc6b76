//! Intent resolution against the loaded model
//!
//! These tests verify:
//! - The documented example sentences
//! - Bare subject names in any casing
//! - Table order as the tie-break between intents
//! - Subject lists taken from a built star system

use orrery::core::{resolve, Catalog, CelestialBody, Intent, Resolution};

// =============================================================================
// Helper Functions
// =============================================================================

fn sol() -> CelestialBody {
    Catalog::bundled().unwrap().build_system("Sol")
}

fn two_planet_star() -> CelestialBody {
    let mut star = CelestialBody::star("Sol");
    star.add_orbiting_objects(vec![
        CelestialBody::planet("Sol", "Earth", 5.97, 149.6, 465.1, "", ""),
        CelestialBody::planet("Sol", "Jupiter", 1898.0, 778.5, 12600.0, "", ""),
    ]);
    star
}

// =============================================================================
// Documented Examples
// =============================================================================

#[test]
fn test_documented_examples() {
    assert_eq!(
        resolve("tell me about Mars", &["Mars", "Venus"]),
        Resolution::new(Intent::ShowDetails, Some("Mars"))
    );
    assert_eq!(
        resolve("What is the mass of mars", &["Mars"]),
        Resolution::new(Intent::ShowMass, Some("Mars"))
    );
    assert_eq!(
        resolve("does earth exist", &["Earth"]),
        Resolution::new(Intent::ShowExists, Some("Earth"))
    );
    assert_eq!(
        resolve("how many moons does earth have", &["Earth"]),
        Resolution::new(Intent::ShowMoons, Some("Earth"))
    );

    let no_subjects: &[&str] = &[];
    assert_eq!(
        resolve("tell me everything", no_subjects),
        Resolution::new(Intent::ShowAll, None)
    );
    assert_eq!(resolve("this is unmatched", &["Earth"]), Resolution::UNKNOWN);
}

#[test]
fn test_every_single_token_subject_is_details() {
    let star = sol();
    let subjects = star.orbiting_object_name_list();
    for name in &subjects {
        for variant in [name.to_string(), name.to_lowercase(), name.to_uppercase()] {
            let r = resolve(&variant, &subjects);
            assert_eq!(r, Resolution::new(Intent::ShowDetails, Some(*name)), "input {}", variant);
        }
    }
}

#[test]
fn test_unknown_never_carries_subject() {
    let star = sol();
    let subjects = star.orbiting_object_name_list();
    // Two tokens with a subject but no keyword
    let r = resolve("hello saturn", &subjects);
    assert_eq!(r, Resolution::UNKNOWN);
}

// =============================================================================
// Tie-breaks
// =============================================================================

#[test]
fn test_details_beats_later_intents() {
    let star = sol();
    let subjects = star.orbiting_object_name_list();
    let r = resolve("tell me about the moons of jupiter", &subjects);
    assert_eq!(r, Resolution::new(Intent::ShowDetails, Some("Jupiter")));
}

#[test]
fn test_exit_is_last() {
    let star = sol();
    let subjects = star.orbiting_object_name_list();
    let r = resolve("show all then quit", &subjects);
    assert_eq!(r.intent, Intent::ShowAll);
}

#[test]
fn test_subject_order_follows_system_order() {
    let mut star = CelestialBody::star("Test");
    star.add_orbiting_objects(vec![
        CelestialBody::planet("Test", "Ares", 1.0, 1.0, 1.0, "", ""),
        CelestialBody::planet("Test", "Aresworld", 1.0, 1.0, 1.0, "", ""),
    ]);
    let subjects = star.orbiting_object_name_list();
    let r = resolve("planet info aresworld", &subjects);
    assert_eq!(r, Resolution::new(Intent::ShowDetails, Some("Ares")));
}

// =============================================================================
// Model Invariants
// =============================================================================

#[test]
fn test_round_trip_through_star() {
    let star = two_planet_star();
    assert_eq!(star.orbiting_object_count(), 2);
    assert_eq!(star.orbiting_object_names(), "Earth, Jupiter");
    let earth = star.find_orbiting_object("Earth").unwrap();
    let jupiter = star.find_orbiting_object("Jupiter").unwrap();
    assert!(std::ptr::eq(&star.orbiting_objects()[0], earth));
    assert!(std::ptr::eq(&star.orbiting_objects()[1], jupiter));
    assert_eq!(
        star.orbiting_objects(),
        &[
            CelestialBody::planet("Sol", "Earth", 5.97, 149.6, 465.1, "", ""),
            CelestialBody::planet("Sol", "Jupiter", 1898.0, 778.5, 12600.0, "", ""),
        ]
    );
    assert_eq!(star.primary_name(), "None");

    let subjects = star.orbiting_object_name_list();
    assert_eq!(
        resolve("how heavy is jupiter", &subjects),
        Resolution::new(Intent::ShowMass, Some("Jupiter"))
    );
}

#[test]
fn test_fresh_body_invariants() {
    let moon = CelestialBody::moon("Moon", "Earth");
    assert_eq!(moon.orbiting_object_names(), "None");
    assert_eq!(moon.orbiting_object_count(), 0);
}
