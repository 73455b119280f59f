//! Range table schema and loader.
//!
//! A range table is a JSON document `category → scenario key → range`.
//! `open_ranges` entries are plain hand lists (members raise, the rest fold).
//! Every other category uses an object with exactly one raise-tier key
//! (`"3bet"`, `"4bet"` or `"5bet"`) plus optional `"call"` and `"mixed"` lists.
//!
//! ```json
//! {
//!   "open_ranges":    { "ep_open": ["AA", "KK", "AKs"] },
//!   "vs_open_ranges": { "btn_vs_ep_open": { "3bet": ["AA"], "call": ["TT"], "mixed": ["TT"] } }
//! }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::training_engine::{
    error::RangeError,
    models::{ActionKind, Category, Hand},
};

const BUILTIN_RANGES: &str = include_str!("../../data/ranges.json");

static BUILTIN: Lazy<RangeTable> = Lazy::new(|| {
    RangeTable::from_json(BUILTIN_RANGES).unwrap_or_else(|err| {
        log::error!("built-in range table rejected, every hand will fold: {err}");
        RangeTable::default()
    })
});

/// Action sets for a scenario that faces prior aggression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TieredRange {
    /// The one aggressive response modelled for this scenario, if any.
    pub raise_tier: Option<ActionKind>,
    pub raise: HashSet<Hand>,
    pub call: HashSet<Hand>,
    /// Hands where the raise tier and Call are both correct.
    pub mixed: HashSet<Hand>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioRange {
    /// Open-raise scenario: members raise, everything else folds.
    Flat(HashSet<Hand>),
    Tiered(TieredRange),
}

#[derive(Debug, Clone, Default)]
pub struct RangeTable {
    scenarios: BTreeMap<Category, BTreeMap<String, ScenarioRange>>,
}

impl RangeTable {
    /// The table compiled into the crate, parsed on first use.
    pub fn builtin() -> &'static RangeTable {
        &BUILTIN
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RangeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RangeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        RangeTable::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, RangeError> {
        let raw: BTreeMap<String, BTreeMap<String, RawScenario>> = serde_json::from_str(json)?;
        let mut table = RangeTable::default();
        for (category_key, entries) in raw {
            let category: Category = category_key
                .parse()
                .map_err(|_| RangeError::UnknownCategory(category_key.clone()))?;
            let scenarios = table.scenarios.entry(category).or_default();
            for (key, entry) in entries {
                let range = build_scenario(category, &key, entry)?;
                scenarios.insert(key, range);
            }
        }
        log::info!("loaded range table with {} scenarios", table.len());
        Ok(table)
    }

    pub fn scenario(&self, category: Category, key: &str) -> Option<&ScenarioRange> {
        self.scenarios.get(&category)?.get(key)
    }

    /// Scenario keys of `category`, sorted.
    pub fn scenario_keys(&self, category: Category) -> Vec<&str> {
        self.scenarios
            .get(&category)
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Total number of scenarios across all categories.
    pub fn len(&self) -> usize {
        self.scenarios.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Document schema
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScenario {
    Flat(Vec<String>),
    Tiered(RawTiered),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTiered {
    #[serde(rename = "3bet")]
    three_bet: Option<Vec<String>>,
    #[serde(rename = "4bet")]
    four_bet: Option<Vec<String>>,
    #[serde(rename = "5bet")]
    five_bet: Option<Vec<String>>,
    call: Option<Vec<String>>,
    mixed: Option<Vec<String>>,
}

fn build_scenario(
    category: Category,
    key: &str,
    raw: RawScenario,
) -> Result<ScenarioRange, RangeError> {
    let shape_mismatch = |expected| RangeError::ShapeMismatch {
        category,
        scenario: key.to_string(),
        expected,
    };
    match (category, raw) {
        (Category::OpenRanges, RawScenario::Flat(tokens)) => {
            Ok(ScenarioRange::Flat(parse_hands(category, key, &tokens)?))
        }
        (Category::OpenRanges, RawScenario::Tiered(_)) => Err(shape_mismatch("a list of hands")),
        (_, RawScenario::Flat(_)) => Err(shape_mismatch("an object of action lists")),
        (_, RawScenario::Tiered(raw)) => build_tiered(category, key, raw).map(ScenarioRange::Tiered),
    }
}

fn build_tiered(category: Category, key: &str, raw: RawTiered) -> Result<TieredRange, RangeError> {
    // A tier counts as present when its key is, even with an empty list.
    let mut tiers = [
        (ActionKind::FiveBet, raw.five_bet),
        (ActionKind::FourBet, raw.four_bet),
        (ActionKind::ThreeBet, raw.three_bet),
    ]
    .into_iter()
    .filter_map(|(action, tokens)| tokens.map(|t| (action, t)));

    let tier = tiers.next();
    if tiers.next().is_some() {
        return Err(RangeError::MultipleRaiseTiers {
            category,
            scenario: key.to_string(),
        });
    }
    if let Some((found, _)) = tier.as_ref().filter(|(action, _)| *action != category.raise_action()) {
        return Err(RangeError::TierMismatch {
            category,
            scenario: key.to_string(),
            found: *found,
        });
    }

    let parse = |tokens: Option<Vec<String>>| parse_hands(category, key, &tokens.unwrap_or_default());
    let range = TieredRange {
        raise_tier: tier.as_ref().map(|(action, _)| *action),
        raise: parse(tier.map(|(_, tokens)| tokens))?,
        call: parse(raw.call)?,
        mixed: parse(raw.mixed)?,
    };

    let mut overlap: Vec<String> = range.raise.intersection(&range.call).map(Hand::to_string).collect();
    if !overlap.is_empty() {
        overlap.sort();
        log::warn!(
            "{category}/{key}: {} listed under both raise and call, raise wins",
            overlap.join(", ")
        );
    }
    if range.raise_tier.is_none() {
        if range.mixed.is_empty() {
            log::warn!("{category}/{key}: no raise tier, only call or fold possible");
        } else {
            log::warn!("{category}/{key}: mixed hands without a raise tier are ignored");
        }
    }
    Ok(range)
}

fn parse_hands(category: Category, key: &str, tokens: &[String]) -> Result<HashSet<Hand>, RangeError> {
    tokens
        .iter()
        .map(|token| {
            token.parse::<Hand>().map_err(|_| RangeError::InvalidHand {
                category,
                scenario: key.to_string(),
                token: token.clone(),
            })
        })
        .collect()
}
