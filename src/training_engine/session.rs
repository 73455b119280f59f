//! In-memory quiz loop over a set of scenarios.
//!
//! ```
//! use preflop_drill::training_engine::{
//!     catalog::{available_scenarios, Situation, TablePosition},
//!     DifficultyLevel, QuizSession, RangeTable,
//! };
//!
//! let scenarios = available_scenarios(&[TablePosition::BTN], &[Situation::VsOpen]);
//! let mut quiz = QuizSession::new(RangeTable::builtin(), scenarios, DifficultyLevel::Hard, Some(7)).unwrap();
//!
//! let round = quiz.next_round();
//! let record = quiz.answer(round.decision.action).unwrap();
//! assert!(record.is_correct);
//! assert_eq!(quiz.accuracy(), 100);
//! ```

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use crate::training_engine::{
    catalog::ScenarioInfo,
    error::SessionError,
    models::{ActionKind, Category, Decision, DifficultyLevel, Hand},
    ranges::RangeTable,
    resolver::correct_action,
    sampler::smart_random_hand,
};

/// Most recent answers kept in [`QuizSession::history`].
pub const HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Round {
    pub scenario: ScenarioInfo,
    pub hand: Hand,
    pub decision: Decision,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub hand: Hand,
    pub scenario_key: &'static str,
    pub scenario_label: &'static str,
    pub category: Category,
    pub answer: ActionKind,
    pub correct: Decision,
    pub is_correct: bool,
}

pub struct QuizSession<'t> {
    table: &'t RangeTable,
    scenarios: Vec<ScenarioInfo>,
    difficulty: DifficultyLevel,
    rng: StdRng,
    pending: Option<Round>,
    score: Score,
    streak: u32,
    best_streak: u32,
    history: VecDeque<AnswerRecord>,
}

impl<'t> QuizSession<'t> {
    pub fn new(
        table: &'t RangeTable,
        scenarios: Vec<ScenarioInfo>,
        difficulty: DifficultyLevel,
        rng_seed: Option<u64>,
    ) -> Result<Self, SessionError> {
        if scenarios.is_empty() {
            return Err(SessionError::NoScenarios);
        }
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Ok(QuizSession {
            table,
            scenarios,
            difficulty,
            rng,
            pending: None,
            score: Score::default(),
            streak: 0,
            best_streak: 0,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
        })
    }

    /// Deal the next round, replacing any unanswered one.
    pub fn next_round(&mut self) -> Round {
        // `new` guarantees at least one scenario.
        let scenario = *self
            .scenarios
            .choose(&mut self.rng)
            .unwrap_or(&self.scenarios[0]);
        let category = scenario.category();
        let hand = smart_random_hand(&mut self.rng, self.table, category, scenario.key, self.difficulty);
        let round = Round {
            scenario,
            hand,
            decision: correct_action(self.table, hand, category, scenario.key),
        };
        self.pending = Some(round);
        round
    }

    pub fn pending(&self) -> Option<&Round> {
        self.pending.as_ref()
    }

    /// Grade `answer` against the pending round and close it.
    pub fn answer(&mut self, answer: ActionKind) -> Result<AnswerRecord, SessionError> {
        let round = self.pending.take().ok_or(SessionError::NoPendingRound)?;
        let is_correct = round.decision.accepts(answer);

        self.score.total += 1;
        if is_correct {
            self.score.correct += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }

        let record = AnswerRecord {
            hand: round.hand,
            scenario_key: round.scenario.key,
            scenario_label: round.scenario.label,
            category: round.scenario.category(),
            answer,
            correct: round.decision,
            is_correct,
        };
        self.history.push_front(record.clone());
        self.history.truncate(HISTORY_LIMIT);
        Ok(record)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// Newest first.
    pub fn history(&self) -> impl Iterator<Item = &AnswerRecord> {
        self.history.iter()
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: DifficultyLevel) {
        self.difficulty = difficulty;
    }

    /// Percent correct, rounded; 0 before the first answer.
    pub fn accuracy(&self) -> u32 {
        if self.score.total == 0 {
            return 0;
        }
        (f64::from(self.score.correct) * 100.0 / f64::from(self.score.total)).round() as u32
    }
}
