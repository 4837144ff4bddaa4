//! Property tests for scoring signals and rankings.

use proptest::prelude::*;
use ramble_core::distance::lat_lng;
use ramble_core::{Enrichment, InterestProfile, PointOfInterest, ScoringWeights};
use ramble_scorer::{PreferenceScorer, interest_match, popularity, rank_pois};

const TAG_POOL: &[&str] = &["history", "ruins", "scenic", "haunted", "arts", "nature"];

fn tag_subset() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(TAG_POOL, 0..=TAG_POOL.len())
}

fn candidate() -> impl Strategy<Value = PointOfInterest> {
    (
        54.39_f64..54.41,
        -1.75_f64..-1.72,
        tag_subset(),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(0.0_f64..=1.0),
    )
        .prop_map(|(lat, lng, tags, facts, cues, hint)| {
            let mut poi = PointOfInterest::new("p", "P", lat_lng(lat, lng))
                .with_tags(tags)
                .with_enrichment(Enrichment {
                    facts: if facts { vec!["fact".to_owned()] } else { Vec::new() },
                    visual_cues: if cues { vec!["cue".to_owned()] } else { Vec::new() },
                });
            poi.quality_hint = hint;
            poi
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: popularity stays within the unit interval.
    #[test]
    fn popularity_is_in_unit_interval(poi in candidate()) {
        let value = popularity(&poi);
        prop_assert!((0.0..=1.0).contains(&value));
    }

    /// Property: disjoint tag sets never match.
    #[test]
    fn disjoint_tags_do_not_match(split in 1_usize..TAG_POOL.len()) {
        let (left, right) = TAG_POOL.split_at(split);
        let tags = ramble_core::poi::normalise_tags(left);
        let interests = ramble_core::poi::normalise_tags(right);
        prop_assert_eq!(interest_match(&tags, &interests), 0.0);
    }

    /// Property: rankings are sorted best first and honour `top_n`.
    #[test]
    fn rankings_are_sorted_and_bounded(
        pois in proptest::collection::vec(candidate(), 0..12),
        interests in tag_subset(),
        top_n in proptest::option::of(0_usize..15),
    ) {
        let profile = InterestProfile::custom(interests);
        let ranked = rank_pois(
            &PreferenceScorer::default(),
            &pois,
            &profile,
            lat_lng(54.4025, -1.7367),
            ScoringWeights::default(),
            top_n,
        );
        let is_descending = ranked.windows(2).all(|pair| match pair {
            [first, second] => first.score >= second.score,
            _ => true,
        });
        prop_assert!(is_descending);
        prop_assert!(ranked.len() <= top_n.unwrap_or(pois.len()));
        prop_assert!(ranked.len() <= pois.len());
    }
}
