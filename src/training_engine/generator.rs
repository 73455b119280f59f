use rand::{rngs::StdRng, SeedableRng};
use rand::RngCore;

use crate::training_engine::{
    catalog::{find_scenario, ScenarioInfo},
    models::{ActionKind, AnswerOption, Category, Decision, Drill, DrillRequest, Hand},
    ranges::RangeTable,
    resolver::{available_actions, correct_action},
    sampler::smart_random_hand,
};

/// Generate a unique drill ID from category + seed.
fn make_drill_id(category: Category, rng: &mut impl RngCore) -> String {
    let prefix = match category {
        Category::OpenRanges     => "OR",
        Category::VsOpenRanges   => "VO",
        Category::Vs3betRanges   => "V3",
        Category::Cold4betRanges => "C4",
        Category::Vs4betRanges   => "V4",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

fn action_verb(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Raise    => "opens",
        ActionKind::ThreeBet => "3-bets",
        ActionKind::FourBet  => "4-bets",
        ActionKind::FiveBet  => "5-bets",
        ActionKind::Call     => "calls",
        ActionKind::Fold     => "folds",
    }
}

/// One line describing the action before the hero, e.g. "CO opens, SB calls."
pub fn describe_action(info: &ScenarioInfo) -> String {
    let mut parts: Vec<String> = info
        .limpers
        .iter()
        .map(|p| format!("{p} limps"))
        .collect();
    if let Some((villain, action)) = info.villain {
        parts.push(format!("{villain} {}", action_verb(action)));
    }
    if let Some(caller) = info.caller {
        parts.push(format!("{caller} calls"));
    }
    if let Some((villain, action)) = info.villain2 {
        parts.push(format!("{villain} {}", action_verb(action)));
    }
    if parts.is_empty() {
        return "Folded to you.".to_string();
    }
    format!("{}.", parts.join(", "))
}

fn question_text(hand: Hand, key: &str, info: Option<&ScenarioInfo>) -> String {
    match info {
        Some(info) => {
            let seats: Vec<String> = info.hero_positions.iter().map(|p| p.to_string()).collect();
            format!(
                "{}: you are in {} with {hand}. {} What do you do?",
                info.label,
                seats.join("/"),
                describe_action(info),
            )
        }
        None => format!("{key}: you hold {hand}. What do you do?"),
    }
}

fn explanation(choice: ActionKind, is_correct: bool, hand: Hand, label: &str, decision: Decision) -> String {
    match (is_correct, decision.alt_action) {
        (true, Some(alt)) => format!(
            "{hand} is a mixed hand in {label}: {} and {alt} are both in the range.",
            decision.action
        ),
        (true, None) => format!("{choice} is the range play with {hand} in {label}."),
        (false, _) => format!("{choice} is off-range here. With {hand} in {label} the answer is {decision}."),
    }
}

/// Generate a drill against the built-in range table.
pub fn generate_drill(request: DrillRequest) -> Drill {
    generate_drill_with(RangeTable::builtin(), request)
}

/// Generate a drill against `table`. Same seed, same table, same drill.
pub fn generate_drill_with(table: &RangeTable, request: DrillRequest) -> Drill {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let drill_id = make_drill_id(request.category, &mut rng);
    let key = request.scenario_key.as_str();

    let hand = smart_random_hand(&mut rng, table, request.category, key, request.difficulty);
    let decision = correct_action(table, hand, request.category, key);

    let info = find_scenario(key).filter(|info| info.category() == request.category);
    let label = info.map_or(key, |info| info.label);

    let answers = available_actions(request.category)
        .into_iter()
        .zip(["A", "B", "C"])
        .map(|(action, id)| {
            let is_correct = decision.accepts(action);
            AnswerOption {
                id: id.to_string(),
                action,
                text: action.label().to_string(),
                is_correct,
                explanation: explanation(action, is_correct, hand, label, decision),
            }
        })
        .collect();

    Drill {
        drill_id,
        category: request.category,
        scenario_key: request.scenario_key.clone(),
        difficulty: request.difficulty,
        hand,
        question: question_text(hand, key, info),
        decision,
        answers,
    }
}
