//! # preflop_drill
//!
//! An offline, deterministic preflop range trainer.
//!
//! The library knows a table of preflop ranges (open, vs open, vs 3-bet,
//! cold 4-bet, vs 4-bet), can say what the correct action is for any of the
//! 169 starting hands in any scenario, and picks training hands that sit
//! close to the edge of a range so drills stay interesting.
//!
//! ## How it works
//!
//! 1. Build a [`DrillRequest`] with a category, scenario key, difficulty and
//!    optional RNG seed.
//! 2. Call [`generate_drill`]: every hand is scored by its distance to the
//!    range boundary, the pool is filtered by difficulty, a hand is drawn
//!    (biased toward in-range hands), and the correct action is resolved.
//! 3. The returned [`Drill`] holds the hand, a question, and one answer per
//!    legal action. Mixed-strategy hands have two correct answers.
//!
//! For a running quiz with score and streak tracking use
//! [`QuizSession`]; for single lookups use [`correct_action`].
//!
//! ## Quick start
//!
//! ```rust
//! use preflop_drill::{
//!     correct_action, generate_drill, ActionKind, Category, DifficultyLevel, DrillRequest,
//!     Hand, RangeTable,
//! };
//!
//! let table = RangeTable::builtin();
//! let aces: Hand = "AA".parse().unwrap();
//! let decision = correct_action(table, aces, Category::OpenRanges, "ep_open");
//! assert_eq!(decision.action, ActionKind::Raise);
//!
//! let drill = generate_drill(DrillRequest {
//!     category: Category::VsOpenRanges,
//!     scenario_key: "btn_vs_aggro_open".to_string(),
//!     difficulty: DifficultyLevel::Hard,
//!     rng_seed: Some(42),
//! });
//!
//! println!("{} [{}]", drill.question, drill.drill_id);
//! for ans in &drill.answers {
//!     let mark = if ans.is_correct { "+" } else { " " };
//!     println!("[{mark}] {} {}", ans.id, ans.text);
//! }
//! ```

pub mod training_engine;

// Convenience re-exports so callers can use `preflop_drill::generate_drill`
// directly without reaching into `training_engine::`.
pub use training_engine::{
    all_hands, available_actions, correct_action, correct_action_display, generate_drill,
    generate_drill_with, is_answer_correct, smart_random_hand, ActionKind, AnswerOption,
    Category, Decision, DifficultyLevel, Drill, DrillRequest, Hand, QuizSession, RangeError,
    RangeTable,
};

#[cfg(test)]
mod tests;
