use std::path::PathBuf;
use thiserror::Error;

use crate::training_engine::models::{ActionKind, Category};

/// A token that doesn't name a hand, action, category or difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid hand token: {0:?}")]
    Hand(String),

    #[error("unknown action: {0:?}")]
    Action(String),

    #[error("unknown category: {0:?}")]
    Category(String),

    #[error("unknown difficulty: {0:?}")]
    Difficulty(String),
}

/// Errors raised while loading a range table document.
#[derive(Debug, Error)]
pub enum RangeError {
    #[error("failed to read range table {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed range table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown category {0:?}")]
    UnknownCategory(String),

    #[error("{category}/{scenario}: invalid hand {token:?}")]
    InvalidHand {
        category: Category,
        scenario: String,
        token: String,
    },

    #[error("{category}/{scenario}: expected {expected}")]
    ShapeMismatch {
        category: Category,
        scenario: String,
        expected: &'static str,
    },

    #[error("{category}/{scenario}: more than one raise tier populated")]
    MultipleRaiseTiers { category: Category, scenario: String },

    #[error("{category}/{scenario}: raise tier {found} doesn't belong to this category")]
    TierMismatch {
        category: Category,
        scenario: String,
        found: ActionKind,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no scenarios selected")]
    NoScenarios,

    #[error("no round is waiting for an answer")]
    NoPendingRound,
}
