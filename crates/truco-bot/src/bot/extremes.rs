use truco_core::model::card::Card;
use truco_core::model::hand::Hand;
use truco_core::model::oracle::CardOracle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremes {
    pub strongest: Card,
    pub weakest: Card,
}

/// Strongest and weakest card by relative value. On ties the strongest is the
/// last such card in hand order and the weakest is the first. `None` for an
/// empty hand.
pub fn find_extremes<O: CardOracle>(oracle: &O, hand: &Hand, vira: Card) -> Option<Extremes> {
    let value = |card: &&Card| oracle.relative_value(**card, vira);
    let strongest = hand.iter().max_by_key(value)?;
    let weakest = hand.iter().min_by_key(value)?;
    Some(Extremes {
        strongest: *strongest,
        weakest: *weakest,
    })
}
