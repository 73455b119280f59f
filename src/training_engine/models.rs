use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::training_engine::error::ParseError;

// ---------------------------------------------------------------------------
// Hand primitives
// ---------------------------------------------------------------------------

/// Rank 2..=14 where 14 = Ace. Only values in that range can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    pub fn new(value: u8) -> Option<Rank> {
        (2..=14).contains(&value).then_some(Rank(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// All thirteen ranks, Ace first.
    pub const ALL: [Rank; 13] = [
        Rank(14), Rank(13), Rank(12), Rank(11), Rank(10), Rank(9), Rank(8),
        Rank(7), Rank(6), Rank(5), Rank(4), Rank(3), Rank(2),
    ];

    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }

    pub fn from_char(c: char) -> Option<Rank> {
        let value = match c.to_ascii_uppercase() {
            'A' => 14, 'K' => 13, 'Q' => 12, 'J' => 11, 'T' => 10,
            '2'..='9' => c as u8 - b'0',
            _ => return None,
        };
        Some(Rank(value))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandKind {
    Pair,
    Suited,
    Offsuit,
}

/// One of the 169 starting-hand classes ("AA", "AKs", "AKo").
///
/// Ranks are stored high-to-low, so two hands are equal exactly when their
/// tokens are equal. Serializes as the token string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hand {
    high: Rank,
    low: Rank,
    kind: HandKind,
}

impl Hand {
    pub fn pair(rank: Rank) -> Hand {
        Hand { high: rank, low: rank, kind: HandKind::Pair }
    }

    /// Suited combo of two ranks in any order. Equal ranks give the pair.
    pub fn suited(a: Rank, b: Rank) -> Hand {
        Hand::unpaired(a, b, HandKind::Suited)
    }

    /// Offsuit combo of two ranks in any order. Equal ranks give the pair.
    pub fn offsuit(a: Rank, b: Rank) -> Hand {
        Hand::unpaired(a, b, HandKind::Offsuit)
    }

    fn unpaired(a: Rank, b: Rank, kind: HandKind) -> Hand {
        if a == b {
            return Hand::pair(a);
        }
        let (high, low) = if a > b { (a, b) } else { (b, a) };
        Hand { high, low, kind }
    }

    pub fn high(self) -> Rank {
        self.high
    }

    pub fn low(self) -> Rank {
        self.low
    }

    pub fn kind(self) -> HandKind {
        self.kind
    }

    pub fn is_pair(self) -> bool {
        self.kind == HandKind::Pair
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            HandKind::Pair    => write!(f, "{}{}", self.high, self.low),
            HandKind::Suited  => write!(f, "{}{}s", self.high, self.low),
            HandKind::Offsuit => write!(f, "{}{}o", self.high, self.low),
        }
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    /// Accepts either rank order ("KAs" reads as "AKs").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::Hand(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();
        let (a, b) = match chars.as_slice() {
            [a, b] | [a, b, _] => (
                Rank::from_char(*a).ok_or_else(invalid)?,
                Rank::from_char(*b).ok_or_else(invalid)?,
            ),
            _ => return Err(invalid()),
        };
        match (chars.get(2).map(|c| c.to_ascii_lowercase()), a == b) {
            (None, true)       => Ok(Hand::pair(a)),
            (Some('s'), false) => Ok(Hand::suited(a, b)),
            (Some('o'), false) => Ok(Hand::offsuit(a, b)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Hand {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Hand> for String {
    fn from(hand: Hand) -> String {
        hand.to_string()
    }
}

// ---------------------------------------------------------------------------
// Actions and decisions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Fold,
    Call,
    /// Only used for open-raise scenarios.
    Raise,
    #[serde(rename = "3bet")]
    ThreeBet,
    #[serde(rename = "4bet")]
    FourBet,
    #[serde(rename = "5bet")]
    FiveBet,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Fold     => "Fold",
            ActionKind::Call     => "Call",
            ActionKind::Raise    => "Raise",
            ActionKind::ThreeBet => "3bet",
            ActionKind::FourBet  => "4bet",
            ActionKind::FiveBet  => "5bet",
        }
    }

    /// True for Raise and the 3bet/4bet/5bet tiers.
    pub fn is_aggressive(self) -> bool {
        !matches!(self, ActionKind::Fold | ActionKind::Call)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ActionKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold"  => Ok(ActionKind::Fold),
            "call"  => Ok(ActionKind::Call),
            "raise" => Ok(ActionKind::Raise),
            "3bet"  => Ok(ActionKind::ThreeBet),
            "4bet"  => Ok(ActionKind::FourBet),
            "5bet"  => Ok(ActionKind::FiveBet),
            _ => Err(ParseError::Action(s.to_string())),
        }
    }
}

/// The resolved answer for one hand in one scenario.
///
/// `alt_action` is `Some` exactly when `is_mixed` is true; build values with
/// [`Decision::pure`] and [`Decision::mixed`] to keep it that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub action: ActionKind,
    pub alt_action: Option<ActionKind>,
    pub is_mixed: bool,
}

impl Decision {
    pub fn pure(action: ActionKind) -> Decision {
        Decision { action, alt_action: None, is_mixed: false }
    }

    pub fn mixed(action: ActionKind, alt_action: ActionKind) -> Decision {
        Decision { action, alt_action: Some(alt_action), is_mixed: true }
    }

    pub fn fold() -> Decision {
        Decision::pure(ActionKind::Fold)
    }

    /// True if `answer` is the primary action or, for mixed hands, the alternate.
    pub fn accepts(&self, answer: ActionKind) -> bool {
        answer == self.action || (self.is_mixed && self.alt_action == Some(answer))
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_mixed, self.alt_action) {
            (true, Some(alt)) => write!(f, "{}/{}", self.action, alt),
            _ => write!(f, "{}", self.action),
        }
    }
}

// ---------------------------------------------------------------------------
// Scenario categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "open_ranges")]
    OpenRanges,
    #[serde(rename = "vs_open_ranges")]
    VsOpenRanges,
    #[serde(rename = "vs_3bet_ranges")]
    Vs3betRanges,
    #[serde(rename = "cold_4bet_ranges")]
    Cold4betRanges,
    #[serde(rename = "vs_4bet_ranges")]
    Vs4betRanges,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::OpenRanges,
        Category::VsOpenRanges,
        Category::Vs3betRanges,
        Category::Cold4betRanges,
        Category::Vs4betRanges,
    ];

    /// Key used for this category in a range table document.
    pub fn key(self) -> &'static str {
        match self {
            Category::OpenRanges     => "open_ranges",
            Category::VsOpenRanges   => "vs_open_ranges",
            Category::Vs3betRanges   => "vs_3bet_ranges",
            Category::Cold4betRanges => "cold_4bet_ranges",
            Category::Vs4betRanges   => "vs_4bet_ranges",
        }
    }

    /// The aggressive answer offered to the hero in this category.
    pub fn raise_action(self) -> ActionKind {
        match self {
            Category::OpenRanges     => ActionKind::Raise,
            Category::VsOpenRanges   => ActionKind::ThreeBet,
            Category::Vs3betRanges   => ActionKind::FourBet,
            Category::Cold4betRanges => ActionKind::FourBet,
            Category::Vs4betRanges   => ActionKind::FiveBet,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| ParseError::Category(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Training request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyLevel::Easy   => write!(f, "easy"),
            DifficultyLevel::Medium => write!(f, "medium"),
            DifficultyLevel::Hard   => write!(f, "hard"),
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy"   => Ok(DifficultyLevel::Easy),
            "medium" => Ok(DifficultyLevel::Medium),
            "hard"   => Ok(DifficultyLevel::Hard),
            _ => Err(ParseError::Difficulty(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillRequest {
    pub category: Category,
    pub scenario_key: String,
    pub difficulty: DifficultyLevel,
    pub rng_seed: Option<u64>,
}

impl DrillRequest {
    /// Medium difficulty, entropy-seeded.
    pub fn new(category: Category, scenario_key: impl Into<String>) -> Self {
        DrillRequest {
            category,
            scenario_key: scenario_key.into(),
            difficulty: DifficultyLevel::default(),
            rng_seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub action: ActionKind,
    pub text: String,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drill {
    pub drill_id: String,
    pub category: Category,
    pub scenario_key: String,
    pub difficulty: DifficultyLevel,
    pub hand: Hand,
    pub question: String,
    pub decision: Decision,
    pub answers: Vec<AnswerOption>,
}
