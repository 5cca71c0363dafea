use core::fmt;
use serde::{Deserialize, Serialize};

/// Suits ordered by their strength when a card of that suit is trump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Suit {
    Hidden = 0,
    Diamonds = 1,
    Spades = 2,
    Hearts = 3,
    Clubs = 4,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Spades, Suit::Hearts, Suit::Clubs];

    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Hidden => "?",
            Suit::Diamonds => "D",
            Suit::Spades => "S",
            Suit::Hearts => "H",
            Suit::Clubs => "C",
        };
        f.write_str(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::Suit;

    #[test]
    fn display_returns_ascii_symbols() {
        assert_eq!(Suit::Clubs.to_string(), "C");
        assert_eq!(Suit::Diamonds.to_string(), "D");
    }

    #[test]
    fn all_skips_hidden() {
        assert!(!Suit::ALL.contains(&Suit::Hidden));
        assert_eq!(Suit::ALL[3].value(), 4);
    }
}
