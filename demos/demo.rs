//! Tour of the preflop drill engine.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Lookups**: a few reference hands resolved against the built-in table,
//!    including mixed-strategy hands.
//! 2. **Drills**: one seeded drill per category at each difficulty.
//! 3. **Quiz**: a short session that always answers the primary action,
//!    then misses once, to show score and streak bookkeeping.

use preflop_drill::training_engine::{
    available_scenarios, catalog, correct_action_display, generate_drill, resolver::range_chart,
    ActionKind, Category, DifficultyLevel, Drill, DrillRequest, QuizSession, RangeTable,
    Situation, TablePosition,
};

fn print_drill(drill: &Drill) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  {}  Difficulty: {}", drill.drill_id, drill.category, drill.difficulty);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Q: {}", drill.question);
    println!();
    for ans in &drill.answers {
        let marker = if ans.is_correct { "✓" } else { " " };
        println!("  [{}] {marker} {}", ans.id, ans.text);
        println!("       {}", ans.explanation);
    }
    println!();
}

fn print_chart(table: &RangeTable, category: Category, key: &str) {
    println!("  {key} ({category})");
    for row in range_chart(table, category, key) {
        let cells: Vec<&str> = row
            .iter()
            .map(|d| match (d.action, d.is_mixed) {
                (_, true) => "m",
                (action, false) if action.is_aggressive() => "R",
                (ActionKind::Call, false) => "c",
                _ => ".",
            })
            .collect();
        println!("    {}", cells.join(" "));
    }
    println!();
}

fn main() {
    let table = RangeTable::builtin();

    // ── Lookups ────────────────────────────────────────────────────────────
    println!();
    println!("══ Lookups ══");
    println!();
    let spots = [
        ("AA", Category::OpenRanges, "ep_open"),
        ("72o", Category::OpenRanges, "ep_open"),
        ("AA", Category::Vs3betRanges, "oop_vs_passive_3bet"),
        ("A7s", Category::VsOpenRanges, "btn_vs_aggro_open"),
        ("KK", Category::Vs4betRanges, "oop_vs_aggro_4bet"),
    ];
    for (token, category, key) in spots {
        match token.parse() {
            Ok(hand) => println!("  {token:>4}  {key:<22} → {}", correct_action_display(table, hand, category, key)),
            Err(err) => println!("  {err}"),
        }
    }
    println!();
    print_chart(table, Category::VsOpenRanges, "btn_vs_aggro_open");

    // ── Drills ─────────────────────────────────────────────────────────────
    println!("══ Drills ══");
    println!();
    let picks = [
        ("co_open", DifficultyLevel::Easy),
        ("bb_vs_aggro_open", DifficultyLevel::Medium),
        ("ip_vs_passive_3bet", DifficultyLevel::Hard),
        ("oop_cold_4bet_vs_aggro", DifficultyLevel::Hard),
        ("ip_vs_aggro_4bet", DifficultyLevel::Medium),
    ];
    for (seed, (key, difficulty)) in picks.into_iter().enumerate() {
        let Some(info) = catalog().iter().find(|s| s.key == key) else {
            continue;
        };
        let drill = generate_drill(DrillRequest {
            category: info.category(),
            scenario_key: key.to_string(),
            difficulty,
            rng_seed: Some(seed as u64 + 1),
        });
        print_drill(&drill);
    }

    // ── Quiz ───────────────────────────────────────────────────────────────
    println!("══ Quiz: BTN and BB, open + vs open ══");
    println!();
    let scenarios = available_scenarios(
        &[TablePosition::BTN, TablePosition::BB],
        &[Situation::Open, Situation::VsOpen],
    );
    let mut quiz = match QuizSession::new(table, scenarios, DifficultyLevel::Medium, Some(42)) {
        Ok(quiz) => quiz,
        Err(err) => {
            eprintln!("  {err}");
            return;
        }
    };
    for round_no in 0..6 {
        let round = quiz.next_round();
        // Miss the fourth hand on purpose.
        let answer = if round_no == 3 && round.decision.action != ActionKind::Fold {
            ActionKind::Fold
        } else if round_no == 3 {
            ActionKind::Call
        } else {
            round.decision.action
        };
        match quiz.answer(answer) {
            Ok(rec) => println!(
                "  {:<22} {:>4}  answered {:<5} correct {:<10} {}",
                rec.scenario_label,
                rec.hand.to_string(),
                rec.answer.to_string(),
                rec.correct.to_string(),
                if rec.is_correct { "✓" } else { "✗" }
            ),
            Err(err) => println!("  {err}"),
        }
    }
    let score = quiz.score();
    println!();
    println!(
        "  Score {}/{} ({}%)  streak {}  best {}",
        score.correct,
        score.total,
        quiz.accuracy(),
        quiz.streak(),
        quiz.best_streak()
    );
    println!();
}
