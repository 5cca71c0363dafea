pub mod card;
pub mod deck;
pub mod hand;
pub mod oracle;
pub mod rank;
pub mod suit;
pub mod trick;
