//! Hand → decision lookup against a [`RangeTable`].
//!
//! Missing categories or scenarios resolve to Fold instead of erroring: the
//! table is reference data, and a gap in it must never stop a quiz.

use crate::training_engine::{
    hands::chart_hand,
    models::{ActionKind, Category, Decision, Hand},
    ranges::{RangeTable, ScenarioRange, TieredRange},
};

const OPEN_ACTIONS: [ActionKind; 2] = [ActionKind::Raise, ActionKind::Fold];

/// The correct action(s) for `hand` in scenario `key` of `category`.
pub fn correct_action(table: &RangeTable, hand: Hand, category: Category, key: &str) -> Decision {
    match table.scenario(category, key) {
        None => Decision::fold(),
        Some(ScenarioRange::Flat(hands)) if hands.contains(&hand) => Decision::pure(ActionKind::Raise),
        Some(ScenarioRange::Flat(_)) => Decision::fold(),
        Some(ScenarioRange::Tiered(range)) => resolve_tiered(range, hand),
    }
}

/// Precedence: raise-tier membership, then the call set, then `mixed` alone.
/// Membership in `mixed` only ever pairs the raise tier with Call.
fn resolve_tiered(range: &TieredRange, hand: Hand) -> Decision {
    let is_mixed = range.mixed.contains(&hand);
    let in_raise = range.raise.contains(&hand);
    let in_call = range.call.contains(&hand);

    match (range.raise_tier, in_raise, in_call, is_mixed) {
        (Some(tier), true, _, true)      => Decision::mixed(tier, ActionKind::Call),
        (Some(tier), true, _, false)     => Decision::pure(tier),
        (Some(tier), false, true, true)  => Decision::mixed(ActionKind::Call, tier),
        (_, false, true, _)              => Decision::pure(ActionKind::Call),
        (Some(tier), false, false, true) => Decision::mixed(tier, ActionKind::Call),
        _ => Decision::fold(),
    }
}

/// Resolve from raw strings. Unparseable hands or categories fold.
pub fn correct_action_str(table: &RangeTable, hand: &str, category: &str, key: &str) -> Decision {
    match (hand.parse::<Hand>(), category.parse::<Category>()) {
        (Ok(hand), Ok(category)) => correct_action(table, hand, category, key),
        _ => Decision::fold(),
    }
}

pub fn is_answer_correct(
    table: &RangeTable,
    answer: ActionKind,
    hand: Hand,
    category: Category,
    key: &str,
) -> bool {
    correct_action(table, hand, category, key).accepts(answer)
}

/// Feedback text: `"Call"`, or `"Call/3bet"` for a mixed hand.
pub fn correct_action_display(table: &RangeTable, hand: Hand, category: Category, key: &str) -> String {
    correct_action(table, hand, category, key).to_string()
}

/// Answer buttons offered for `category`, aggressive option first.
pub fn available_actions(category: Category) -> Vec<ActionKind> {
    match category {
        Category::OpenRanges => OPEN_ACTIONS.to_vec(),
        other => vec![other.raise_action(), ActionKind::Call, ActionKind::Fold],
    }
}

/// Decisions for every cell of the 13×13 chart (see [`chart_hand`]).
pub fn range_chart(table: &RangeTable, category: Category, key: &str) -> [[Decision; 13]; 13] {
    std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            chart_hand(row, col)
                .map(|hand| correct_action(table, hand, category, key))
                .unwrap_or_else(Decision::fold)
        })
    })
}
