use core::fmt;
use serde::{Deserialize, Serialize};

/// Card ranks in ascending natural strength. `Hidden` marks a card played
/// face down; its identity is unknown to the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Rank {
    Hidden = 0,
    Four = 1,
    Five = 2,
    Six = 3,
    Seven = 4,
    Queen = 5,
    Jack = 6,
    King = 7,
    Ace = 8,
    Two = 9,
    Three = 10,
}

impl Rank {
    pub const ORDERED: [Rank; 10] = [
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Queen,
        Rank::Jack,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// The rank promoted to trump when `self` is the vira. Wraps from three
    /// back to four; a hidden rank has no successor.
    pub const fn next(self) -> Rank {
        match self {
            Rank::Hidden => Rank::Hidden,
            Rank::Four => Rank::Five,
            Rank::Five => Rank::Six,
            Rank::Six => Rank::Seven,
            Rank::Seven => Rank::Queen,
            Rank::Queen => Rank::Jack,
            Rank::Jack => Rank::King,
            Rank::King => Rank::Ace,
            Rank::Ace => Rank::Two,
            Rank::Two => Rank::Three,
            Rank::Three => Rank::Four,
        }
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Rank::Hidden)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rank::Hidden => "?",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
        };
        f.write_str(text)
    }
}
