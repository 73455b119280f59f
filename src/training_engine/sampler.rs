//! Difficulty-aware hand selection.
//!
//! Hands are scored by distance to the range boundary, filtered by the
//! difficulty profile, then drawn with a bias toward in-range hands.
//! When a filter leaves nothing, progressively looser filters are tried:
//!
//! 1. the requested difficulty
//! 2. the medium profile
//! 3. any non-obvious hand
//! 4. any scored hand
//!
//! and finally a uniform draw over all 169 hands.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::training_engine::{
    boundary::{score_all_hands, HandScore},
    hands::{all_hands, random_hand},
    models::{Category, DifficultyLevel, Hand},
    ranges::RangeTable,
};

/// Chance of drawing from the in-range side of the pool.
pub const IN_RANGE_BIAS: f64 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// `None` admits any distance, including hands with no distance at all.
    pub max_distance: Option<u32>,
    pub include_obvious: bool,
}

impl DifficultyProfile {
    pub fn admits(&self, score: &HandScore) -> bool {
        let close_enough = match (self.max_distance, score.distance) {
            (None, _) => true,
            (Some(max), Some(distance)) => distance <= max,
            (Some(_), None) => false,
        };
        close_enough && (self.include_obvious || !score.is_obvious)
    }
}

impl DifficultyLevel {
    pub fn profile(self) -> DifficultyProfile {
        match self {
            DifficultyLevel::Easy   => DifficultyProfile { max_distance: None, include_obvious: true },
            DifficultyLevel::Medium => DifficultyProfile { max_distance: Some(5), include_obvious: false },
            DifficultyLevel::Hard   => DifficultyProfile { max_distance: Some(2), include_obvious: false },
        }
    }
}

type Stage<'a> = (&'static str, &'a dyn Fn(&HandScore) -> bool);

/// Eligible scores for `difficulty`, using the first filter stage that
/// leaves anything. Empty only when `scores` is.
pub fn candidate_pool(scores: &[HandScore], difficulty: DifficultyLevel) -> Vec<&HandScore> {
    let requested = difficulty.profile();
    let medium = DifficultyLevel::Medium.profile();

    let stages: [Stage; 4] = [
        ("requested", &|s: &HandScore| requested.admits(s)),
        ("medium", &|s: &HandScore| medium.admits(s)),
        ("non-obvious", &|s: &HandScore| !s.is_obvious),
        ("any", &|_: &HandScore| true),
    ];

    for (i, (name, keep)) in stages.iter().enumerate() {
        let pool: Vec<&HandScore> = scores.iter().filter(|&s| keep(s)).collect();
        if !pool.is_empty() {
            if i > 0 {
                log::debug!("{difficulty} filter empty, fell back to {name} ({} hands)", pool.len());
            }
            return pool;
        }
    }
    Vec::new()
}

/// Pick from the in-range side with probability [`IN_RANGE_BIAS`], otherwise
/// (or when that side is empty) from the fold side.
fn draw<R: Rng>(rng: &mut R, pool: &[&HandScore]) -> Option<Hand> {
    let want_in_range = rng.gen_bool(IN_RANGE_BIAS);
    let (in_range, folds): (Vec<&HandScore>, Vec<&HandScore>) =
        pool.iter().copied().partition(|s| !s.is_fold);

    if want_in_range {
        if let Some(score) = in_range.choose(rng) {
            return Some(score.hand);
        }
    }
    folds
        .choose(rng)
        .or_else(|| pool.choose(rng))
        .map(|score| score.hand)
}

/// A training hand for one scenario, concentrated near its decision boundary.
///
/// Never fails: unknown scenarios and degenerate tables still yield one of
/// the 169 hands.
pub fn smart_random_hand<R: Rng>(
    rng: &mut R,
    table: &RangeTable,
    category: Category,
    key: &str,
    difficulty: DifficultyLevel,
) -> Hand {
    let scores = score_all_hands(table, category, key, all_hands());
    let pool = candidate_pool(&scores, difficulty);
    match draw(rng, &pool) {
        Some(hand) => hand,
        None => random_hand(rng),
    }
}
