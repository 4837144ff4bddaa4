//! Behaviour tests for built-in profile lookup and fallback.

use rstest::rstest;
use ramble_core::{DEFAULT_PROFILE, InterestProfile, ProfileRegistry};

#[rstest]
#[case("history_lover")]
#[case("ghost_hunter")]
#[case("architecture_fan")]
#[case("nature_seeker")]
#[case("culture_enthusiast")]
#[case("casual_tourist")]
fn known_names_resolve_to_themselves(#[case] name: &str) {
    let registry = ProfileRegistry::builtin();
    assert_eq!(registry.resolve(name).name(), name);
    assert_eq!(registry.get(name).map(InterestProfile::name), Some(name));
}

#[rstest]
#[case("")]
#[case("HISTORY_LOVER")]
#[case("time_traveller")]
fn unknown_names_fall_back_to_default(#[case] name: &str) {
    let registry = ProfileRegistry::builtin();
    assert!(registry.get(name).is_none());
    assert_eq!(registry.resolve(name).name(), DEFAULT_PROFILE);
}

#[rstest]
fn descriptions_default_to_custom() {
    let registry = ProfileRegistry::builtin();
    assert_eq!(registry.describe("time_traveller"), "Custom profile");
    assert_eq!(
        registry.describe("ghost_hunter"),
        "Fascinated by spooky stories, legends, and atmospheric locations"
    );
}

#[rstest]
fn every_profile_carries_five_interests() {
    for profile in ProfileRegistry::builtin().iter() {
        assert_eq!(profile.interests().len(), 5, "{}", profile.name());
    }
}

#[rstest]
fn custom_profiles_normalise_interests() {
    let profile = InterestProfile::custom(["  Scenic", "NATURE", ""]);
    let interests: Vec<&str> = profile.interests().iter().map(String::as_str).collect();
    assert_eq!(interests, vec!["nature", "scenic"]);
    assert_eq!(profile.description(), "Custom profile");
}
