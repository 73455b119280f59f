//! Behaviour tests for the `preflop_drill` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Reference spots | Known hands in the built-in table resolve to the expected action |
//! | Answer checking | Primary and alternate answers accepted, everything else rejected |
//! | Smart sampling | Draws stay in the 169-hand universe, vary, and respect difficulty |
//! | Drills | Determinism, ID prefixes, one or two correct answers |
//! | Token parsing | Hand, action, category and difficulty strings; JSON shape of decisions |

use std::collections::HashSet;

use rand::{rngs::StdRng, SeedableRng};

use crate::training_engine::{
    all_hands, catalog, correct_action, correct_action_display, generate_drill,
    is_answer_correct, score_all_hands, smart_random_hand, ActionKind, Category, Decision,
    DifficultyLevel, DrillRequest, Hand, RangeTable, Rank,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn h(token: &str) -> Hand {
    token.parse().unwrap()
}

fn lookup(token: &str, category: Category, key: &str) -> Decision {
    correct_action(RangeTable::builtin(), h(token), category, key)
}

fn req(category: Category, key: &str, difficulty: DifficultyLevel, seed: u64) -> DrillRequest {
    DrillRequest {
        category,
        scenario_key: key.to_string(),
        difficulty,
        rng_seed: Some(seed),
    }
}

const DIFFICULTIES: [DifficultyLevel; 3] =
    [DifficultyLevel::Easy, DifficultyLevel::Medium, DifficultyLevel::Hard];

const ALL_ACTIONS: [ActionKind; 6] = [
    ActionKind::Fold,
    ActionKind::Call,
    ActionKind::Raise,
    ActionKind::ThreeBet,
    ActionKind::FourBet,
    ActionKind::FiveBet,
];

// ── reference spots ──────────────────────────────────────────────────────────

#[test]
fn open_raise_and_fold() {
    assert_eq!(lookup("AA", Category::OpenRanges, "ep_open"), Decision::pure(ActionKind::Raise));
    assert_eq!(lookup("72o", Category::OpenRanges, "ep_open"), Decision::fold());
}

#[test]
fn aces_four_bet_against_passive_three_bet() {
    let d = lookup("AA", Category::Vs3betRanges, "oop_vs_passive_3bet");
    assert_eq!(d.action, ActionKind::FourBet);
    assert!(!d.is_mixed);
}

#[test]
fn mixed_hand_in_call_set_leads_with_call() {
    let d = lookup("A7s", Category::VsOpenRanges, "btn_vs_aggro_open");
    assert_eq!(d, Decision::mixed(ActionKind::Call, ActionKind::ThreeBet));
    assert_eq!(
        correct_action_display(RangeTable::builtin(), h("A7s"), Category::VsOpenRanges, "btn_vs_aggro_open"),
        "Call/3bet"
    );
}

#[test]
fn mixed_hand_in_raise_tier_leads_with_raise() {
    assert_eq!(
        lookup("33", Category::VsOpenRanges, "btn_vs_aggro_open"),
        Decision::mixed(ActionKind::ThreeBet, ActionKind::Call)
    );
    assert_eq!(
        lookup("KK", Category::Vs4betRanges, "oop_vs_aggro_4bet"),
        Decision::mixed(ActionKind::FiveBet, ActionKind::Call)
    );
    assert_eq!(
        lookup("AQo", Category::Cold4betRanges, "ip_cold_4bet_vs_aggro"),
        Decision::mixed(ActionKind::FourBet, ActionKind::Call)
    );
}

#[test]
fn more_reference_spots() {
    assert_eq!(lookup("KK", Category::Vs4betRanges, "ip_vs_passive_4bet"), Decision::mixed(ActionKind::Call, ActionKind::FiveBet));
    assert_eq!(lookup("AKo", Category::Vs4betRanges, "oop_vs_aggro_4bet"), Decision::pure(ActionKind::Call));
    assert_eq!(lookup("QQ", Category::VsOpenRanges, "btn_vs_passive_open"), Decision::mixed(ActionKind::Call, ActionKind::ThreeBet));
    assert_eq!(lookup("A2s", Category::VsOpenRanges, "hj_vs_ep_open"), Decision::fold());
}

#[test]
fn raise_tier_wins_where_builtin_data_overlaps() {
    assert_eq!(lookup("KTo", Category::VsOpenRanges, "bb_vs_aggro_open"), Decision::pure(ActionKind::ThreeBet));
}

#[test]
fn resolution_is_idempotent() {
    for key in ["ep_open", "btn_vs_limp"] {
        for &hand in all_hands() {
            let t = RangeTable::builtin();
            assert_eq!(
                correct_action(t, hand, Category::OpenRanges, key),
                correct_action(t, hand, Category::OpenRanges, key)
            );
        }
    }
}

// ── answer checking ──────────────────────────────────────────────────────────

#[test]
fn answer_check_matches_decision_everywhere() {
    let t = RangeTable::builtin();
    for info in catalog() {
        let category = info.category();
        for &hand in all_hands() {
            let d = correct_action(t, hand, category, info.key);
            assert!(is_answer_correct(t, d.action, hand, category, info.key));
            if let Some(alt) = d.alt_action {
                assert!(is_answer_correct(t, alt, hand, category, info.key));
            }
            let accepted = ALL_ACTIONS
                .iter()
                .filter(|&&a| is_answer_correct(t, a, hand, category, info.key))
                .count();
            assert_eq!(accepted, if d.is_mixed { 2 } else { 1 }, "{hand} {}", info.key);
        }
    }
}

// ── smart sampling ───────────────────────────────────────────────────────────

#[test]
fn smart_draws_vary_and_stay_in_universe() {
    let t = RangeTable::builtin();
    let universe: HashSet<Hand> = all_hands().iter().copied().collect();
    let mut rng = StdRng::seed_from_u64(2024);
    for info in catalog() {
        for difficulty in DIFFICULTIES {
            let drawn: HashSet<Hand> = (0..200)
                .map(|_| smart_random_hand(&mut rng, t, info.category(), info.key, difficulty))
                .collect();
            assert!(drawn.is_subset(&universe));
            assert!(drawn.len() > 1, "{} {difficulty}: one hand only", info.key);
        }
    }
}

#[test]
fn hard_draws_sit_near_the_boundary() {
    let t = RangeTable::builtin();
    let (category, key) = (Category::VsOpenRanges, "btn_vs_aggro_open");
    let scores = score_all_hands(t, category, key, all_hands());
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..200 {
        let hand = smart_random_hand(&mut rng, t, category, key, DifficultyLevel::Hard);
        let score = scores.iter().find(|s| s.hand == hand).unwrap();
        assert!(!score.is_obvious, "{hand}");
        assert!(matches!(score.distance, Some(d) if d <= 2), "{hand}: {:?}", score.distance);
    }
}

#[test]
fn easy_can_deal_obvious_hands() {
    let t = RangeTable::builtin();
    let mut rng = StdRng::seed_from_u64(31);
    let premium: HashSet<Hand> = ["AA", "KK", "QQ", "AKs", "AKo"].into_iter().map(h).collect();
    let hit = (0..2000)
        .map(|_| smart_random_hand(&mut rng, t, Category::VsOpenRanges, "btn_vs_aggro_open", DifficultyLevel::Easy))
        .any(|hand| premium.contains(&hand));
    assert!(hit);
}

// ── drills ───────────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_drill() {
    for info in catalog() {
        let a = generate_drill(req(info.category(), info.key, DifficultyLevel::Medium, 12345));
        let b = generate_drill(req(info.category(), info.key, DifficultyLevel::Medium, 12345));
        assert_eq!(a.drill_id, b.drill_id, "{}", info.key);
        assert_eq!(a.hand, b.hand, "{}", info.key);
        assert_eq!(a.question, b.question, "{}", info.key);
        assert_eq!(a.decision, b.decision, "{}", info.key);
    }
}

#[test]
fn different_seeds_produce_varied_hands() {
    let hands: HashSet<Hand> = (0..30)
        .map(|seed| generate_drill(req(Category::OpenRanges, "co_open", DifficultyLevel::Medium, seed)).hand)
        .collect();
    assert!(hands.len() > 1);
}

#[test]
fn entropy_seed_produces_a_valid_drill() {
    let drill = generate_drill(DrillRequest::new(Category::Vs3betRanges, "ip_vs_aggro_3bet"));
    assert!(drill.drill_id.starts_with("V3-"));
    assert_eq!(drill.difficulty, DifficultyLevel::Medium);
    assert!(drill.answers.iter().any(|a| a.is_correct));
}

#[test]
fn correct_answer_count_follows_mixing() {
    for info in catalog() {
        for seed in [1, 42, 999, 0xDEAD_BEEF, 7] {
            let drill = generate_drill(req(info.category(), info.key, DifficultyLevel::Hard, seed));
            let correct = drill.answers.iter().filter(|a| a.is_correct).count();
            assert_eq!(correct, if drill.decision.is_mixed { 2 } else { 1 }, "{} {}", info.key, drill.hand);
        }
    }
}

#[test]
fn drill_serializes_tokens_as_strings() {
    let drill = generate_drill(req(Category::OpenRanges, "btn_open", DifficultyLevel::Easy, 3));
    let json = serde_json::to_value(&drill).unwrap();
    assert_eq!(json["hand"], drill.hand.to_string());
    assert_eq!(json["category"], "open_ranges");
    assert_eq!(json["difficulty"], "easy");
}

// ── token parsing ────────────────────────────────────────────────────────────

#[test]
fn hand_tokens_parse_in_either_rank_order() {
    assert_eq!(h("KAs"), h("AKs"));
    assert_eq!(h("2To").to_string(), "T2o");
    assert_eq!(h(" qq ").to_string(), "QQ");
    for bad in ["AAs", "KKo", "AK", "AKx", "A1s", "", "AKsx"] {
        assert!(bad.parse::<Hand>().is_err(), "{bad:?} parsed");
    }
}

#[test]
fn ranks_outside_two_to_ace_cannot_be_built() {
    assert_eq!(Rank::new(1), None);
    assert_eq!(Rank::new(15), None);
    assert_eq!(Rank::new(0), None);
    let ace = Rank::new(14).unwrap();
    assert_eq!(ace.symbol(), "A");
    assert_eq!(Hand::pair(ace).to_string(), "AA");
    let universe: HashSet<Hand> = all_hands().iter().copied().collect();
    for high in 2..=14 {
        for low in 2..=14 {
            let (a, b) = (Rank::new(high).unwrap(), Rank::new(low).unwrap());
            assert!(universe.contains(&Hand::suited(a, b)), "{high} {low}");
            assert!(universe.contains(&Hand::offsuit(a, b)), "{high} {low}");
        }
    }
}

#[test]
fn action_category_and_difficulty_tokens() {
    assert_eq!("3bet".parse::<ActionKind>(), Ok(ActionKind::ThreeBet));
    assert_eq!("FOLD".parse::<ActionKind>(), Ok(ActionKind::Fold));
    assert!("limp".parse::<ActionKind>().is_err());
    for category in Category::ALL {
        assert_eq!(category.key().parse::<Category>(), Ok(category));
    }
    assert!("limp_ranges".parse::<Category>().is_err());
    assert_eq!("Hard".parse::<DifficultyLevel>(), Ok(DifficultyLevel::Hard));
    assert!("brutal".parse::<DifficultyLevel>().is_err());
}

#[test]
fn decision_serializes_with_action_labels() {
    let d = Decision::mixed(ActionKind::FiveBet, ActionKind::Call);
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, r#"{"action":"5bet","alt_action":"Call","is_mixed":true}"#);
    let back: Decision = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
}
