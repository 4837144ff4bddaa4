//! JSON POI catalogues supplied by the data-loading collaborator.
//!
//! The catalogue format is loose: every field except the identifier and the
//! coordinates is optional. Records missing either, or carrying them with the
//! wrong JSON type, are dropped here at the ingestion boundary so planners
//! only ever see structured POIs. Optional fields of the wrong type read as
//! absent.
//!
//! ```json
//! {"pois": [{"id": "castle", "name": "Richmond Castle",
//!            "geo": {"lat": 54.4039, "lng": -1.7394},
//!            "vibe_tags": ["history", "medieval"],
//!            "facts": ["Built in 1071"], "source_reliability": 0.9}]}
//! ```

use std::io::Read;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::distance::lat_lng;
use crate::{Enrichment, PointOfInterest};

/// Errors raised while decoding a catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The payload was not valid catalogue JSON.
    #[error("failed to decode POI catalogue")]
    Decode {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level catalogue shape. Records stay untyped so one malformed entry
/// cannot fail the whole file.
#[derive(Debug, Deserialize)]
struct CatalogueFile {
    #[serde(default)]
    pois: Vec<Value>,
}

/// Convert one raw record; `None` when the id or coordinates are unusable.
fn record_to_poi(record: &Value) -> Option<PointOfInterest> {
    let id = record.get("id")?.as_str()?;
    let geo = record.get("geo")?;
    let location = lat_lng(geo.get("lat")?.as_f64()?, geo.get("lng")?.as_f64()?);
    let name = record.get("name").and_then(Value::as_str).unwrap_or(id);
    let mut poi = PointOfInterest::new(id, name, location)
        .with_tags(strings(record.get("vibe_tags")))
        .with_enrichment(Enrichment {
            facts: strings(record.get("facts")),
            visual_cues: strings(record.get("visual_cues")),
        });
    poi.quality_hint = record.get("source_reliability").and_then(Value::as_f64);
    Some(poi)
}

/// String entries of an optional array; anything else reads as empty.
fn strings(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Structured POIs decoded from a catalogue.
///
/// # Examples
/// ```
/// use ramble_core::catalogue::Catalogue;
///
/// let json = r#"{"pois": [
///     {"id": "castle", "name": "Richmond Castle", "geo": {"lat": 54.4039, "lng": -1.7394}},
///     {"id": "lost", "name": "Nowhere"}
/// ]}"#;
/// let catalogue = Catalogue::from_json_str(json)?;
/// assert_eq!(catalogue.pois().len(), 1);
/// assert_eq!(catalogue.skipped(), 1);
/// # Ok::<(), ramble_core::catalogue::CatalogueError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue {
    pois: Vec<PointOfInterest>,
    skipped: usize,
}

impl Catalogue {
    /// Decode a catalogue from a JSON string.
    ///
    /// # Errors
    /// Returns [`CatalogueError::Decode`] when the payload is not valid JSON
    /// or does not match the catalogue shape.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogueError> {
        let file: CatalogueFile =
            serde_json::from_str(json).map_err(|source| CatalogueError::Decode { source })?;
        Ok(Self::from_records(&file.pois))
    }

    /// Decode a catalogue from a reader.
    ///
    /// # Errors
    /// Returns [`CatalogueError::Decode`] when the stream cannot be read or
    /// decoded.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogueError> {
        let file: CatalogueFile =
            serde_json::from_reader(reader).map_err(|source| CatalogueError::Decode { source })?;
        Ok(Self::from_records(&file.pois))
    }

    fn from_records(records: &[Value]) -> Self {
        let total = records.len();
        let pois: Vec<PointOfInterest> = records.iter().filter_map(record_to_poi).collect();
        let skipped = total.saturating_sub(pois.len());
        if skipped > 0 {
            log::debug!("skipped {skipped} of {total} catalogue records without id or coordinates");
        }
        Self { pois, skipped }
    }

    /// Structured POIs in catalogue order.
    #[must_use]
    pub fn pois(&self) -> &[PointOfInterest] {
        &self.pois
    }

    /// Number of records dropped for lacking an id or coordinates.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Consume the catalogue and return its POIs.
    #[must_use]
    pub fn into_pois(self) -> Vec<PointOfInterest> {
        self.pois
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    clippy::float_arithmetic,
    reason = "tests fail fast on malformed fixtures and compare coordinates"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn decodes_full_records() {
        let json = r#"{"pois": [{
            "id": "greyfriars",
            "name": "Greyfriars Tower",
            "geo": {"lat": 54.4028, "lng": -1.735},
            "vibe_tags": ["Ruins", "religious"],
            "facts": ["15th-century bell tower"],
            "visual_cues": ["Tall stone tower"],
            "source_reliability": 0.95
        }]}"#;
        let catalogue = Catalogue::from_json_str(json).expect("valid catalogue");
        let poi = catalogue.pois().first().expect("one poi");
        assert_eq!(poi.name, "Greyfriars Tower");
        assert!(poi.tags.contains("ruins"));
        assert!(poi.has_enriched_content());
        assert!(poi.has_visual_cues());
        assert_eq!(poi.quality_hint, Some(0.95));
        assert!((poi.location.y - 54.4028).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(r#"{"pois": [{"name": "no id", "geo": {"lat": 1.0, "lng": 1.0}}]}"#)]
    #[case(r#"{"pois": [{"id": "a", "name": "no geo"}]}"#)]
    #[case(r#"{"pois": [{"id": "a", "geo": {"lat": 1.0}}]}"#)]
    #[case(r#"{"pois": [{"id": "a", "geo": {"lat": "54.4", "lng": -1.7}}]}"#)]
    #[case(r#"{"pois": [{"id": 7, "geo": {"lat": 54.4, "lng": -1.7}}]}"#)]
    #[case(r#"{"pois": [{"id": "a", "geo": "54.4,-1.7"}]}"#)]
    #[case(r#"{"pois": ["castle"]}"#)]
    fn drops_records_missing_required_fields(#[case] json: &str) {
        let catalogue = Catalogue::from_json_str(json).expect("valid catalogue");
        assert!(catalogue.pois().is_empty());
        assert_eq!(catalogue.skipped(), 1);
    }

    #[rstest]
    fn name_defaults_to_id() {
        let json = r#"{"pois": [{"id": "market", "geo": {"lat": 54.4025, "lng": -1.7367}}]}"#;
        let catalogue = Catalogue::from_json_str(json).expect("valid catalogue");
        assert_eq!(catalogue.into_pois().first().map(|poi| poi.name.clone()), Some("market".into()));
    }

    #[rstest]
    fn keeps_valid_records_beside_malformed_ones() {
        let json = r#"{"pois": [
            {"id": "castle", "geo": {"lat": 54.4039, "lng": -1.7394}},
            {"id": "bad", "geo": {"lat": "54.4", "lng": -1.7}}
        ]}"#;
        let catalogue = Catalogue::from_json_str(json).expect("valid catalogue");
        let ids: Vec<&str> = catalogue.pois().iter().map(|poi| poi.id.as_str()).collect();
        assert_eq!(ids, vec!["castle"]);
        assert_eq!(catalogue.skipped(), 1);
    }

    #[rstest]
    fn optional_fields_of_the_wrong_type_read_as_absent() {
        let json = r#"{"pois": [{
            "id": "falls",
            "name": 12,
            "geo": {"lat": 54.4015, "lng": -1.7375},
            "vibe_tags": null,
            "facts": "not a list",
            "visual_cues": ["Cascading water", 3],
            "source_reliability": "high"
        }]}"#;
        let catalogue = Catalogue::from_json_str(json).expect("valid catalogue");
        let poi = catalogue.pois().first().expect("one poi");
        assert_eq!(poi.name, "falls");
        assert!(poi.tags.is_empty());
        assert!(!poi.has_enriched_content());
        assert!(poi.has_visual_cues());
        assert_eq!(poi.quality_hint, None);
        assert_eq!(catalogue.skipped(), 0);
    }

    #[rstest]
    fn rejects_malformed_json() {
        let err = Catalogue::from_json_str("{\"pois\": [").expect_err("truncated json");
        assert!(matches!(err, CatalogueError::Decode { .. }));
    }
}
