use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use std::cmp::Ordering;

/// Card strength under a hand's trump context.
///
/// Implementations must be stateless: every answer depends only on the
/// arguments, so a single oracle can be shared by any number of decisions.
pub trait CardOracle {
    /// Strength of `card` when `vira` is the trump indicator. Higher is
    /// stronger and values are meant to be summed across a hand.
    fn relative_value(&self, card: Card, vira: Card) -> i32;

    /// Whether `card` is promoted to trump ("manilha") this hand.
    fn is_trump(&self, card: Card, vira: Card) -> bool;

    /// Whether `card` is the single strongest trump ("zap").
    fn is_top_trump(&self, card: Card, vira: Card) -> bool;

    fn compare(&self, a: Card, b: Card, vira: Card) -> Ordering {
        self.relative_value(a, vira)
            .cmp(&self.relative_value(b, vira))
    }
}

impl<O: CardOracle + ?Sized> CardOracle for &O {
    fn relative_value(&self, card: Card, vira: Card) -> i32 {
        (**self).relative_value(card, vira)
    }

    fn is_trump(&self, card: Card, vira: Card) -> bool {
        (**self).is_trump(card, vira)
    }

    fn is_top_trump(&self, card: Card, vira: Card) -> bool {
        (**self).is_top_trump(card, vira)
    }

    fn compare(&self, a: Card, b: Card, vira: Card) -> Ordering {
        (**self).compare(a, b, vira)
    }
}

/// Standard rules: the rank after the vira becomes trump, and trumps are
/// ordered Diamonds < Spades < Hearts < Clubs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrucoRules;

impl TrucoRules {
    pub const TOP_TRUMP_SUIT: Suit = Suit::Clubs;

    pub const fn trump_rank(vira: Card) -> Rank {
        vira.rank.next()
    }

    const fn trump_value(suit: Suit) -> i32 {
        match suit {
            Suit::Hidden => 0,
            Suit::Diamonds => 10,
            Suit::Spades => 11,
            Suit::Hearts => 12,
            Suit::Clubs => 13,
        }
    }
}

impl CardOracle for TrucoRules {
    fn relative_value(&self, card: Card, vira: Card) -> i32 {
        if card.is_concealed() {
            return 0;
        }
        if self.is_trump(card, vira) {
            return Self::trump_value(card.suit);
        }
        let trump = Self::trump_rank(vira);
        let natural = i32::from(card.rank.value());
        // Non-trumps close the gap left by the promoted rank.
        if card.rank.value() > trump.value() {
            natural - 1
        } else {
            natural
        }
    }

    fn is_trump(&self, card: Card, vira: Card) -> bool {
        !card.is_concealed() && card.rank == Self::trump_rank(vira)
    }

    fn is_top_trump(&self, card: Card, vira: Card) -> bool {
        self.is_trump(card, vira) && card.suit == Self::TOP_TRUMP_SUIT
    }
}
