//! Core training engine: hand universe, range lookup, boundary scoring,
//! difficulty-aware sampling and drill generation.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: ranks, hands, actions, decisions, categories, request/response structs |
//! | `error`     | Parse, range-table and session errors |
//! | `hands`     | The 169 starting-hand classes, uniform draws, 13×13 chart layout |
//! | `ranges`    | Range table loading and validation; the built-in table |
//! | `resolver`  | Hand + scenario → correct action(s); answer checking |
//! | `boundary`  | Distance of every hand to the fold / non-fold boundary |
//! | `sampler`   | Difficulty filters and the biased "smart" hand draw |
//! | `catalog`   | Seating and labels for each built-in scenario |
//! | `generator` | Single entry point `generate_drill()` |
//! | `session`   | Score, streak and history for a running quiz |

pub mod boundary;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod hands;
pub mod models;
pub mod ranges;
pub mod resolver;
pub mod sampler;
pub mod session;

// Re-export the public API surface so callers can use
// `training_engine::generate_drill` without reaching into sub-modules.
pub use boundary::{hand_distance, score_all_hands, HandScore};
pub use catalog::{available_scenarios, catalog, ScenarioInfo, Situation, TablePosition};
pub use error::{ParseError, RangeError, SessionError};
pub use generator::{generate_drill, generate_drill_with};
pub use hands::{all_hands, generate_all_hands, random_hand};
pub use models::{
    ActionKind, AnswerOption, Category, Decision, DifficultyLevel, Drill, DrillRequest,
    Hand, HandKind, Rank,
};
pub use ranges::RangeTable;
pub use resolver::{
    available_actions, correct_action, correct_action_display, correct_action_str,
    is_answer_correct,
};
pub use sampler::smart_random_hand;
pub use session::{AnswerRecord, QuizSession, Round, Score};
