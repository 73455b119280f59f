//! Scenario metadata for the built-in range table: who the hero is, who
//! acted before them, and how each spot is labelled.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::training_engine::models::{ActionKind, Category};
use self::TablePosition::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TablePosition {
    UTG,
    EP,
    HJ,  // Hijack
    CO,  // Cutoff
    BTN, // Button
    SB,  // Small Blind
    BB,  // Big Blind
}

impl TablePosition {
    pub fn preflop_order(self) -> u8 {
        match self {
            TablePosition::UTG => 0,
            TablePosition::EP  => 1,
            TablePosition::HJ  => 2,
            TablePosition::CO  => 3,
            TablePosition::BTN => 4,
            TablePosition::SB  => 5,
            TablePosition::BB  => 6,
        }
    }

    pub fn acts_before(self, other: TablePosition) -> bool {
        self.preflop_order() < other.preflop_order()
    }
}

impl fmt::Display for TablePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TablePosition::UTG => "UTG",
            TablePosition::EP  => "EP",
            TablePosition::HJ  => "HJ",
            TablePosition::CO  => "CO",
            TablePosition::BTN => "BTN",
            TablePosition::SB  => "SB",
            TablePosition::BB  => "BB",
        };
        write!(f, "{}", s)
    }
}

/// The user-facing grouping of scenarios; one per [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Situation {
    Open,
    VsOpen,
    Vs3bet,
    Cold4bet,
    Vs4bet,
}

impl Situation {
    pub const ALL: [Situation; 5] = [
        Situation::Open,
        Situation::VsOpen,
        Situation::Vs3bet,
        Situation::Cold4bet,
        Situation::Vs4bet,
    ];

    pub fn category(self) -> Category {
        match self {
            Situation::Open     => Category::OpenRanges,
            Situation::VsOpen   => Category::VsOpenRanges,
            Situation::Vs3bet   => Category::Vs3betRanges,
            Situation::Cold4bet => Category::Cold4betRanges,
            Situation::Vs4bet   => Category::Vs4betRanges,
        }
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Situation::Open     => "Open Raise",
            Situation::VsOpen   => "Vs Open",
            Situation::Vs3bet   => "Vs 3-Bet",
            Situation::Cold4bet => "Cold 4-Bet",
            Situation::Vs4bet   => "Vs 4-Bet",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub situation: Situation,
    pub hero_positions: &'static [TablePosition],
    /// Players who limped in before the hero.
    pub limpers: &'static [TablePosition],
    pub villain: Option<(TablePosition, ActionKind)>,
    /// Second aggressor in cold 4-bet spots.
    pub villain2: Option<(TablePosition, ActionKind)>,
    /// Player who flat-called the open in squeeze spots.
    pub caller: Option<TablePosition>,
}

impl ScenarioInfo {
    pub fn category(&self) -> Category {
        self.situation.category()
    }
}

const fn open(key: &'static str, label: &'static str, hero: &'static [TablePosition]) -> ScenarioInfo {
    ScenarioInfo {
        key,
        label,
        situation: Situation::Open,
        hero_positions: hero,
        limpers: &[],
        villain: None,
        villain2: None,
        caller: None,
    }
}

const fn facing(
    key: &'static str,
    label: &'static str,
    situation: Situation,
    hero: &'static [TablePosition],
    villain: TablePosition,
    action: ActionKind,
) -> ScenarioInfo {
    ScenarioInfo {
        key,
        label,
        situation,
        hero_positions: hero,
        limpers: &[],
        villain: Some((villain, action)),
        villain2: None,
        caller: None,
    }
}

const fn cold_4bet(key: &'static str, label: &'static str, hero: &'static [TablePosition]) -> ScenarioInfo {
    ScenarioInfo {
        key,
        label,
        situation: Situation::Cold4bet,
        hero_positions: hero,
        limpers: &[],
        villain: Some((EP, ActionKind::Raise)),
        villain2: Some((HJ, ActionKind::ThreeBet)),
        caller: None,
    }
}

const fn squeeze(
    key: &'static str,
    label: &'static str,
    hero: &'static [TablePosition],
    villain: TablePosition,
    caller: TablePosition,
) -> ScenarioInfo {
    ScenarioInfo {
        caller: Some(caller),
        ..facing(key, label, Situation::VsOpen, hero, villain, ActionKind::Raise)
    }
}

const BTN_VS_LIMP: ScenarioInfo = ScenarioInfo { limpers: &[CO], ..open("btn_vs_limp", "BTN vs Limp", &[BTN]) };
const BTN_VS_2_FISH: ScenarioInfo = ScenarioInfo { limpers: &[HJ, CO], ..open("btn_vs_2_fish", "BTN vs 2 Fish", &[BTN]) };

static CATALOG: [ScenarioInfo; 33] = [
    // Open
    open("ep_open", "EP Open", &[EP]),
    open("hj_open", "HJ Open", &[HJ]),
    open("co_open", "CO Open", &[CO]),
    open("btn_open", "BTN Open", &[BTN]),
    open("sb_open", "SB Open", &[SB]),
    BTN_VS_LIMP,
    BTN_VS_2_FISH,
    // Vs open
    facing("hj_vs_ep_open", "HJ vs EP Open", Situation::VsOpen, &[HJ], EP, ActionKind::Raise),
    facing("btn_vs_aggro_open", "BTN vs Aggro Open", Situation::VsOpen, &[BTN], CO, ActionKind::Raise),
    facing("btn_vs_passive_open", "BTN vs Passive Open", Situation::VsOpen, &[BTN], CO, ActionKind::Raise),
    facing("bb_vs_passive_open", "BB vs Passive Open", Situation::VsOpen, &[BB], BTN, ActionKind::Raise),
    facing("bb_vs_aggro_open", "BB vs Aggro Open", Situation::VsOpen, &[BB], BTN, ActionKind::Raise),
    squeeze("btn_squeeze", "BTN Squeeze", &[BTN], HJ, CO),
    facing("ep_vs_pro_open", "EP vs Pro Open", Situation::VsOpen, &[EP], UTG, ActionKind::Raise),
    facing("btn_vs_co_pro_open", "BTN vs CO Pro Open", Situation::VsOpen, &[BTN], CO, ActionKind::Raise),
    facing("btn_vs_ep_open", "BTN vs EP Open", Situation::VsOpen, &[BTN], EP, ActionKind::Raise),
    facing("co_vs_hj_open", "CO vs HJ Open", Situation::VsOpen, &[CO], HJ, ActionKind::Raise),
    facing("bb_vs_sb_open", "BB vs SB Open", Situation::VsOpen, &[BB], SB, ActionKind::Raise),
    facing("sb_3bet_vs_btn", "SB 3bet vs BTN", Situation::VsOpen, &[SB], BTN, ActionKind::Raise),
    squeeze("bb_squeeze", "BB Squeeze", &[BB], BTN, SB),
    // Vs 3bet
    facing("oop_vs_passive_3bet", "OOP vs Passive 3bet", Situation::Vs3bet, &[EP, HJ, CO], BB, ActionKind::ThreeBet),
    facing("oop_vs_aggro_3bet", "OOP vs Aggro 3bet", Situation::Vs3bet, &[EP, HJ, CO], BB, ActionKind::ThreeBet),
    facing("ip_vs_passive_3bet", "IP vs Passive 3bet", Situation::Vs3bet, &[BTN], BB, ActionKind::ThreeBet),
    facing("ip_vs_aggro_3bet", "IP vs Aggro 3bet", Situation::Vs3bet, &[BTN], BB, ActionKind::ThreeBet),
    facing("sb_vs_bb_3bet", "SB vs BB 3bet", Situation::Vs3bet, &[SB], BB, ActionKind::ThreeBet),
    // Cold 4bet
    cold_4bet("oop_cold_4bet_vs_tight", "OOP Cold 4bet vs Tight", &[CO]),
    cold_4bet("ip_cold_4bet_vs_tight", "IP Cold 4bet vs Tight", &[BTN]),
    cold_4bet("oop_cold_4bet_vs_aggro", "OOP Cold 4bet vs Aggro", &[CO]),
    cold_4bet("ip_cold_4bet_vs_aggro", "IP Cold 4bet vs Aggro", &[BTN]),
    // Vs 4bet
    facing("oop_vs_passive_4bet", "OOP vs Passive 4bet", Situation::Vs4bet, &[BB, SB], BTN, ActionKind::FourBet),
    facing("ip_vs_passive_4bet", "IP vs Passive 4bet", Situation::Vs4bet, &[BTN], CO, ActionKind::FourBet),
    facing("oop_vs_aggro_4bet", "OOP vs Aggro 4bet", Situation::Vs4bet, &[BB, SB], BTN, ActionKind::FourBet),
    facing("ip_vs_aggro_4bet", "IP vs Aggro 4bet", Situation::Vs4bet, &[BTN], CO, ActionKind::FourBet),
];

/// Every built-in scenario.
pub fn catalog() -> &'static [ScenarioInfo] {
    &CATALOG
}

pub fn find_scenario(key: &str) -> Option<&'static ScenarioInfo> {
    CATALOG.iter().find(|s| s.key == key)
}

/// Scenarios matching one of `situations` with a hero seat in `positions`.
pub fn available_scenarios(
    positions: &[TablePosition],
    situations: &[Situation],
) -> Vec<ScenarioInfo> {
    CATALOG
        .iter()
        .filter(|s| situations.contains(&s.situation))
        .filter(|s| s.hero_positions.iter().any(|p| positions.contains(p)))
        .copied()
        .collect()
}
