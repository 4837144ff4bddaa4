//! Points of interest and their interest tags.

use std::collections::BTreeSet;

use geo::Coord;

/// Normalised interest labels attached to a point of interest.
///
/// Labels are stored trimmed and lowercased so set comparisons are
/// case-insensitive.
pub type Tags = BTreeSet<String>;

/// Narrative-ready detail gathered for a point of interest.
///
/// A POI counts as enriched once it carries at least one fact. Visual cues
/// are tracked separately because they make a stop easier to narrate on
/// site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enrichment {
    /// Verified facts suitable for narration.
    #[cfg_attr(feature = "serde", serde(default))]
    pub facts: Vec<String>,
    /// Things a visitor can see when standing at the location.
    #[cfg_attr(feature = "serde", serde(default))]
    pub visual_cues: Vec<String>,
}

/// A location worth visiting.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use ramble_core::PointOfInterest;
/// use ramble_core::distance::lat_lng;
///
/// let poi = PointOfInterest::new("castle", "Richmond Castle", lat_lng(54.4039, -1.7394))
///     .with_tags(["History", " medieval "]);
///
/// assert!(poi.tags.contains("history"));
/// assert!(poi.tags.contains("medieval"));
/// assert!(poi.is_routable());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    /// Stable identifier, unique within a catalogue.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Lowercase interest labels.
    pub tags: Tags,
    /// Externally supplied reliability score in `0.0..=1.0`.
    pub quality_hint: Option<f64>,
    /// Facts and visual cues attached by enrichment.
    pub enrichment: Enrichment,
}

impl PointOfInterest {
    /// Construct an untagged, unenriched point of interest.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use ramble_core::PointOfInterest;
    ///
    /// let poi = PointOfInterest::new("bridge", "Richmond Bridge", Coord { x: -1.7402, y: 54.4042 });
    /// assert!(poi.tags.is_empty());
    /// assert!(poi.quality_hint.is_none());
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            tags: Tags::new(),
            quality_hint: None,
            enrichment: Enrichment::default(),
        }
    }

    /// Replace the interest tags, normalising each label.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = normalise_tags(tags);
        self
    }

    /// Attach an external quality hint.
    #[must_use]
    pub fn with_quality_hint(mut self, hint: f64) -> Self {
        self.quality_hint = Some(hint);
        self
    }

    /// Attach enrichment detail.
    #[must_use]
    pub fn with_enrichment(mut self, enrichment: Enrichment) -> Self {
        self.enrichment = enrichment;
        self
    }

    /// Report whether the POI carries narrative-ready facts.
    #[must_use]
    pub fn has_enriched_content(&self) -> bool {
        !self.enrichment.facts.is_empty()
    }

    /// Report whether the POI carries visual cues.
    #[must_use]
    pub fn has_visual_cues(&self) -> bool {
        !self.enrichment.visual_cues.is_empty()
    }

    /// Report whether the POI may enter a candidate pool.
    ///
    /// Only POIs with finite coordinates are routable; everything else is
    /// skipped by scorers and planners without raising an error.
    #[must_use]
    pub const fn is_routable(&self) -> bool {
        self.location.x.is_finite() && self.location.y.is_finite()
    }
}

/// Trim and lowercase labels, dropping any that end up empty.
///
/// # Examples
/// ```
/// use ramble_core::poi::normalise_tags;
///
/// let tags = normalise_tags(["Haunted", "  ", "RUINS"]);
/// assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["haunted", "ruins"]);
/// ```
pub fn normalise_tags<I, S>(labels: I) -> Tags
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .map(|label| label.as_ref().trim().to_lowercase())
        .filter(|label| !label.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::lat_lng;
    use rstest::rstest;

    #[rstest]
    fn enrichment_flags_follow_content() {
        let poi = PointOfInterest::new("p", "P", lat_lng(0.0, 0.0)).with_enrichment(Enrichment {
            facts: vec!["Built in 1071".into()],
            visual_cues: Vec::new(),
        });
        assert!(poi.has_enriched_content());
        assert!(!poi.has_visual_cues());
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    #[case(f64::NEG_INFINITY, f64::NAN)]
    fn non_finite_coordinates_are_not_routable(#[case] lat: f64, #[case] lng: f64) {
        let poi = PointOfInterest::new("p", "P", lat_lng(lat, lng));
        assert!(!poi.is_routable());
    }

    #[rstest]
    fn duplicate_labels_collapse() {
        let poi = PointOfInterest::new("p", "P", lat_lng(0.0, 0.0)).with_tags(["Ruins", "ruins"]);
        assert_eq!(poi.tags.len(), 1);
    }
}
