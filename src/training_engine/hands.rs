use once_cell::sync::Lazy;
use rand::Rng;

use crate::training_engine::models::{Hand, Rank};

/// Number of distinct starting-hand classes: 13 pairs + 78 suited + 78 offsuit.
pub const HAND_COUNT: usize = 169;

static ALL_HANDS: Lazy<Vec<Hand>> = Lazy::new(generate_all_hands);

/// Build the 169-hand universe: pairs Ace down, then every suited/offsuit
/// combo with the higher rank first.
pub fn generate_all_hands() -> Vec<Hand> {
    let mut hands = Vec::with_capacity(HAND_COUNT);
    hands.extend(Rank::ALL.iter().map(|&rank| Hand::pair(rank)));
    for (i, &high) in Rank::ALL.iter().enumerate() {
        for &low in &Rank::ALL[i + 1..] {
            hands.push(Hand::suited(high, low));
            hands.push(Hand::offsuit(high, low));
        }
    }
    hands
}

/// The cached hand universe, same order as [`generate_all_hands`].
pub fn all_hands() -> &'static [Hand] {
    &ALL_HANDS
}

/// Uniform draw over all 169 hands.
pub fn random_hand<R: Rng>(rng: &mut R) -> Hand {
    let hands = all_hands();
    hands[rng.gen_range(0..hands.len())]
}

/// Hand shown in cell (`row`, `col`) of the 13×13 range chart.
///
/// Rows and columns run A..2. The diagonal holds pairs, cells above it
/// suited hands and cells below it offsuit hands.
pub fn chart_hand(row: usize, col: usize) -> Option<Hand> {
    let r = *Rank::ALL.get(row)?;
    let c = *Rank::ALL.get(col)?;
    Some(if row < col {
        Hand::suited(r, c)
    } else {
        Hand::offsuit(r, c)
    })
}
