use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use std::array;

/// One deal of a two-sided hand: three cards per side plus the vira.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub vira: Card,
    pub hands: [Hand; 2],
}

impl Deal {
    pub fn from_deck(deck: &Deck) -> Self {
        let cards = deck.cards();
        let hands = array::from_fn(|side| {
            (0..Hand::MAX_CARDS)
                .map(|offset| cards[offset * 2 + side])
                .collect()
        });
        Self {
            vira: cards[Hand::MAX_CARDS * 2],
            hands,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::from_deck(&Deck::shuffled_with_seed(seed))
    }
}
