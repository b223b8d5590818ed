use std::cmp::Ordering;

use super::{RankedEntry, ScoredProfile};

/// Orders scored profiles and assigns display ranks.
///
/// Keys, all descending: solved count, then points, then streak. Entries
/// tied on all three keep their input order. Ranks are `index + 1` over the
/// sorted sequence, so they are always exactly `1..=n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine;

impl RankingEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn rank(&self, scored: &[ScoredProfile]) -> Vec<RankedEntry> {
        let mut ordered: Vec<&ScoredProfile> = scored.iter().collect();
        // sort_by is stable
        ordered.sort_by(|a, b| Self::compare(a, b));

        ordered
            .into_iter()
            .zip(1u32..)
            .map(|(entry, rank)| RankedEntry::from_scored(rank, entry))
            .collect()
    }

    /// `Less` means `a` ranks above `b`
    pub fn compare(a: &ScoredProfile, b: &ScoredProfile) -> Ordering {
        b.solved_count
            .cmp(&a.solved_count)
            .then_with(|| b.points.cmp(&a.points))
            .then_with(|| b.profile.streak_count.cmp(&a.profile.streak_count))
    }
}
