use truco_core::model::card::Card;
use truco_core::model::hand::Hand;
use truco_core::model::oracle::CardOracle;

/// True when exactly two cards in hand are trumps.
pub fn has_trump_pair<O: CardOracle>(oracle: &O, hand: &Hand, vira: Card) -> bool {
    hand.iter()
        .filter(|card| oracle.is_trump(**card, vira))
        .count()
        == 2
}
