//! Boundary scoring: how close each hand sits to the fold / non-fold line
//! of a scenario.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::training_engine::{
    models::{ActionKind, Category, Hand, HandKind},
    ranges::RangeTable,
    resolver::correct_action,
};

/// Distance between hands of different kinds that don't share both ranks.
pub const UNRELATED_DISTANCE: u32 = 10;

fn hand_set(tokens: &[&str]) -> HashSet<Hand> {
    tokens.iter().filter_map(|t| t.parse().ok()).collect()
}

// Nut hands whose answer is trivial in each category.
static OBVIOUS_OPEN: Lazy<HashSet<Hand>> = Lazy::new(|| {
    hand_set(&["AA", "KK", "QQ", "JJ", "TT", "AKs", "AKo", "AQs", "AQo", "AJs", "KQs"])
});
static OBVIOUS_3BET: Lazy<HashSet<Hand>> = Lazy::new(|| hand_set(&["AA", "KK", "QQ", "AKs", "AKo"]));
static OBVIOUS_4BET: Lazy<HashSet<Hand>> = Lazy::new(|| hand_set(&["AA", "KK", "AKs", "AKo"]));
static OBVIOUS_5BET: Lazy<HashSet<Hand>> = Lazy::new(|| hand_set(&["AA", "KK"]));

pub fn obvious_hands(category: Category) -> &'static HashSet<Hand> {
    match category {
        Category::OpenRanges => &OBVIOUS_OPEN,
        Category::VsOpenRanges => &OBVIOUS_3BET,
        Category::Vs3betRanges | Category::Cold4betRanges => &OBVIOUS_4BET,
        Category::Vs4betRanges => &OBVIOUS_5BET,
    }
}

/// One hand's position relative to a scenario's range boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandScore {
    pub hand: Hand,
    pub action: ActionKind,
    /// Distance to the nearest hand on the other side of the boundary.
    /// `None` when the other side is empty.
    pub distance: Option<u32>,
    pub is_obvious: bool,
    pub is_fold: bool,
}

/// Heuristic rank distance between two hands. Symmetric, zero only for
/// identical hands, no triangle inequality.
///
/// - `AKs`/`AKo`: 1 (same ranks, different kind)
/// - different kinds otherwise: [`UNRELATED_DISTANCE`]
/// - pairs: rank gap (`AA`/`KK` = 1)
/// - same-kind non-pairs: high-rank gap + low-rank gap
pub fn hand_distance(a: Hand, b: Hand) -> u32 {
    let gap = |x: u8, y: u8| u32::from(x.abs_diff(y));

    if a.kind() != b.kind() {
        return if a.high() == b.high() && a.low() == b.low() {
            1
        } else {
            UNRELATED_DISTANCE
        };
    }
    match a.kind() {
        HandKind::Pair => gap(a.high().value(), b.high().value()),
        HandKind::Suited | HandKind::Offsuit => {
            gap(a.high().value(), b.high().value()) + gap(a.low().value(), b.low().value())
        }
    }
}

fn nearest(hand: Hand, others: &[Hand]) -> Option<u32> {
    others.iter().map(|&other| hand_distance(hand, other)).min()
}

/// Score every hand in `hands` for one scenario.
///
/// In-range hands (anything that isn't Fold) are scored against the nearest
/// fold hand and come first; fold hands are scored against the nearest
/// in-range hand. Only in-range hands can be obvious.
pub fn score_all_hands(
    table: &RangeTable,
    category: Category,
    key: &str,
    hands: &[Hand],
) -> Vec<HandScore> {
    let decided: Vec<(Hand, ActionKind)> = hands
        .iter()
        .map(|&hand| (hand, correct_action(table, hand, category, key).action))
        .collect();

    let (folded, in_range): (Vec<(Hand, ActionKind)>, Vec<(Hand, ActionKind)>) =
        decided.into_iter().partition(|&(_, action)| action == ActionKind::Fold);
    let fold_hands: Vec<Hand> = folded.iter().map(|&(hand, _)| hand).collect();
    let range_hands: Vec<Hand> = in_range.iter().map(|&(hand, _)| hand).collect();

    let obvious = obvious_hands(category);
    let mut scores = Vec::with_capacity(hands.len());

    for (hand, action) in in_range {
        scores.push(HandScore {
            hand,
            action,
            distance: nearest(hand, &fold_hands),
            is_obvious: obvious.contains(&hand),
            is_fold: false,
        });
    }
    for hand in fold_hands.iter().copied() {
        scores.push(HandScore {
            hand,
            action: ActionKind::Fold,
            distance: nearest(hand, &range_hands),
            is_obvious: false,
            is_fold: true,
        });
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::hands::all_hands;

    fn h(token: &str) -> Hand {
        token.parse().unwrap()
    }

    #[test]
    fn distance_examples() {
        assert_eq!(hand_distance(h("AKs"), h("AKo")), 1);
        assert_eq!(hand_distance(h("AA"), h("KK")), 1);
        assert_eq!(hand_distance(h("AA"), h("22")), 12);
        assert_eq!(hand_distance(h("72o"), h("AKs")), UNRELATED_DISTANCE);
        assert_eq!(hand_distance(h("AA"), h("AKs")), UNRELATED_DISTANCE);
        assert_eq!(hand_distance(h("AKs"), h("QJs")), 4);
        assert_eq!(hand_distance(h("A5s"), h("A2s")), 3);
        assert_eq!(hand_distance(h("T9o"), h("T9o")), 0);
    }

    #[test]
    fn distance_is_symmetric_and_zero_only_on_identity() {
        let all = all_hands();
        for &a in all {
            for &b in all {
                let d = hand_distance(a, b);
                assert_eq!(d, hand_distance(b, a), "{a} {b}");
                assert_eq!(d == 0, a == b, "{a} {b}");
            }
        }
    }

    fn fixture() -> RangeTable {
        RangeTable::from_json(
            r#"{
                "open_ranges": { "pairs": ["AA", "KK", "QQ"], "nothing": [] },
                "vs_4bet_ranges": { "spot": { "5bet": ["AA"], "call": ["KK"] } }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn scores_cover_every_hand_in_range_first() {
        let t = fixture();
        let scores = score_all_hands(&t, Category::OpenRanges, "pairs", all_hands());
        assert_eq!(scores.len(), all_hands().len());
        assert!(scores[..3].iter().all(|s| !s.is_fold && s.action == ActionKind::Raise));
        assert!(scores[3..].iter().all(|s| s.is_fold && s.action == ActionKind::Fold));
    }

    #[test]
    fn distances_point_across_the_boundary() {
        let t = fixture();
        let scores = score_all_hands(&t, Category::OpenRanges, "pairs", all_hands());
        let find = |token| *scores.iter().find(|s| s.hand == h(token)).unwrap();

        assert_eq!(find("QQ").distance, Some(1));
        assert_eq!(find("KK").distance, Some(2));
        assert_eq!(find("AA").distance, Some(3));
        assert_eq!(find("JJ").distance, Some(1));
        assert_eq!(find("22").distance, Some(10));
        assert_eq!(find("72o").distance, Some(UNRELATED_DISTANCE));
        assert!(find("AA").is_obvious);
        assert!(!find("JJ").is_obvious, "fold hands are never obvious");
    }

    #[test]
    fn empty_side_gives_no_distance() {
        let t = fixture();
        let scores = score_all_hands(&t, Category::OpenRanges, "nothing", all_hands());
        assert!(scores.iter().all(|s| s.is_fold && s.distance.is_none()));

        let unknown = score_all_hands(&t, Category::VsOpenRanges, "missing", all_hands());
        assert!(unknown.iter().all(|s| s.is_fold && s.distance.is_none()));
    }

    #[test]
    fn call_hands_count_as_in_range() {
        let t = fixture();
        let scores = score_all_hands(&t, Category::Vs4betRanges, "spot", all_hands());
        let kk = scores.iter().find(|s| s.hand == h("KK")).unwrap();
        assert_eq!(kk.action, ActionKind::Call);
        assert!(!kk.is_fold);
        assert!(kk.is_obvious);
        assert_eq!(kk.distance, Some(1)); // QQ folds
    }

    #[test]
    fn obvious_sets_per_category() {
        assert_eq!(obvious_hands(Category::OpenRanges).len(), 11);
        assert_eq!(obvious_hands(Category::VsOpenRanges).len(), 5);
        assert_eq!(obvious_hands(Category::Vs3betRanges), obvious_hands(Category::Cold4betRanges));
        assert_eq!(obvious_hands(Category::Vs4betRanges).len(), 2);
    }
}
