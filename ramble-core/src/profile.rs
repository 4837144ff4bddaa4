//! Interest profiles: named bundles of interest tags describing a visitor.
//!
//! A fixed [`ProfileRegistry`] holds the built-in visitor archetypes. Lookups
//! never fail: unknown names resolve to [`DEFAULT_PROFILE`].

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::poi::{Tags, normalise_tags};

/// Name of the balanced profile used when a lookup misses.
pub const DEFAULT_PROFILE: &str = "casual_tourist";

const CUSTOM_DESCRIPTION: &str = "Custom profile";

const BUILTIN_PROFILES: &[(&str, &str, &[&str])] = &[
    (
        "history_lover",
        "Loves historical sites, dates, and significant events",
        &["history", "medieval", "military", "political", "victorian"],
    ),
    (
        "ghost_hunter",
        "Fascinated by spooky stories, legends, and atmospheric locations",
        &["haunted", "mysterious", "ruins", "religious", "dramatic"],
    ),
    (
        "architecture_fan",
        "Appreciates building design, construction, and architectural styles",
        &["architecture", "georgian", "engineering", "folly", "medieval"],
    ),
    (
        "nature_seeker",
        "Enjoys natural beauty, viewpoints, and tranquil settings",
        &["nature", "scenic", "picturesque", "peaceful", "romantic"],
    ),
    (
        "culture_enthusiast",
        "Interested in arts, museums, local culture, and community",
        &["culture", "arts", "educational", "local", "social"],
    ),
    (
        DEFAULT_PROFILE,
        "Balanced mix of popular tourist attractions",
        &["history", "architecture", "scenic", "culture", "picturesque"],
    ),
];

/// A visitor archetype expressed as a set of interest tags.
///
/// # Examples
/// ```
/// use ramble_core::InterestProfile;
///
/// let profile = InterestProfile::custom(["Haunted", "ruins"]);
/// assert_eq!(profile.name(), "custom");
/// assert!(profile.interests().contains("haunted"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestProfile {
    name: String,
    description: String,
    interests: Tags,
}

impl InterestProfile {
    /// Construct a named profile.
    pub fn new<I, S>(name: impl Into<String>, description: impl Into<String>, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            interests: normalise_tags(interests),
        }
    }

    /// Construct an ad hoc profile from a caller-supplied interest list.
    pub fn custom<I, S>(interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new("custom", CUSTOM_DESCRIPTION, interests)
    }

    /// Profile identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Lowercase interest tags.
    #[must_use]
    pub const fn interests(&self) -> &Tags {
        &self.interests
    }
}

/// Read-only lookup of the built-in interest profiles.
///
/// # Examples
/// ```
/// use ramble_core::{DEFAULT_PROFILE, ProfileRegistry};
///
/// let registry = ProfileRegistry::builtin();
/// assert_eq!(registry.resolve("ghost_hunter").name(), "ghost_hunter");
/// assert_eq!(registry.resolve("time_traveller").name(), DEFAULT_PROFILE);
/// ```
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, InterestProfile>,
    fallback: InterestProfile,
}

impl ProfileRegistry {
    /// Return the process-wide registry of built-in profiles.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static REGISTRY: OnceLock<ProfileRegistry> = OnceLock::new();
        REGISTRY.get_or_init(Self::from_builtin_table)
    }

    fn from_builtin_table() -> Self {
        let profiles: BTreeMap<String, InterestProfile> = BUILTIN_PROFILES
            .iter()
            .map(|(name, description, interests)| {
                (
                    (*name).to_owned(),
                    InterestProfile::new(*name, *description, interests.iter()),
                )
            })
            .collect();
        let fallback = profiles
            .get(DEFAULT_PROFILE)
            .cloned()
            .unwrap_or_else(|| InterestProfile::custom(std::iter::empty::<&str>()));
        Self { profiles, fallback }
    }

    /// Look up a profile by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&InterestProfile> {
        self.profiles.get(name)
    }

    /// Look up a profile, falling back to [`DEFAULT_PROFILE`] for unknown
    /// names.
    #[must_use]
    pub fn resolve(&self, name: &str) -> &InterestProfile {
        self.get(name).unwrap_or_else(|| {
            log::debug!("unknown profile '{name}', using '{DEFAULT_PROFILE}'");
            &self.fallback
        })
    }

    /// Describe a profile, or return `"Custom profile"` for unknown names.
    #[must_use]
    pub fn describe(&self, name: &str) -> &str {
        self.get(name)
            .map_or(CUSTOM_DESCRIPTION, InterestProfile::description)
    }

    /// Iterate over registered profiles in name order.
    pub fn iter(&self) -> impl Iterator<Item = &InterestProfile> {
        self.profiles.values()
    }
}
