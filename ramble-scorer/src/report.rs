//! Text rendering of a ranking.

use std::fmt;

use ramble_core::{InterestProfile, ScoredPoi};

const TAGS_PER_ENTRY: usize = 5;

/// Display adapter listing ranked POIs with the signals behind each score.
#[derive(Debug, Clone, Copy)]
pub struct RankingReport<'r, 'a> {
    ranked: &'r [ScoredPoi<'a>],
    profile: &'r InterestProfile,
}

impl<'r, 'a> RankingReport<'r, 'a> {
    /// Wrap a ranking produced for `profile`.
    #[must_use]
    pub const fn new(ranked: &'r [ScoredPoi<'a>], profile: &'r InterestProfile) -> Self {
        Self { ranked, profile }
    }
}

impl fmt::Display for RankingReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Top {} POIs for profile: {}",
            self.ranked.len(),
            self.profile.name()
        )?;
        for (position, entry) in self.ranked.iter().enumerate() {
            let components = entry.components;
            write!(
                f,
                "\n\n{}. {} (score {:.3})",
                position.saturating_add(1),
                entry.poi.name,
                entry.score
            )?;
            write!(
                f,
                "\n   Interest match: {:.3}\n   Popularity: {:.3}\n   Distance: {:.2} km (penalty {:.3})",
                components.interest_match,
                components.popularity,
                components.distance_km,
                components.distance_penalty
            )?;
            if !entry.poi.tags.is_empty() {
                let tags: Vec<&str> = entry
                    .poi
                    .tags
                    .iter()
                    .take(TAGS_PER_ENTRY)
                    .map(String::as_str)
                    .collect();
                write!(f, "\n   Tags: {}", tags.join(", "))?;
            }
        }
        Ok(())
    }
}
