use proptest::prelude::*;
use std::cmp::Ordering;
use truco_core::model::card::Card;
use truco_core::model::deck::Deck;
use truco_core::model::oracle::{CardOracle, TrucoRules};

fn any_card() -> impl Strategy<Value = Card> {
    (0..Deck::SIZE).prop_map(|index| Deck::standard().cards()[index])
}

proptest! {
    #[test]
    fn exactly_four_trumps_and_one_zap_per_vira(vira in any_card()) {
        let rules = TrucoRules;
        let deck = Deck::standard();
        let trumps = deck.cards().iter().filter(|card| rules.is_trump(**card, vira)).count();
        let zaps = deck.cards().iter().filter(|card| rules.is_top_trump(**card, vira)).count();
        prop_assert_eq!(trumps, 4);
        prop_assert_eq!(zaps, 1);
    }

    #[test]
    fn values_stay_within_table_bounds(card in any_card(), vira in any_card()) {
        let value = TrucoRules.relative_value(card, vira);
        prop_assert!((1..=13).contains(&value));
        if TrucoRules.is_trump(card, vira) {
            prop_assert!(value >= 10);
        } else {
            prop_assert!(value <= 9);
        }
    }

    #[test]
    fn compare_is_antisymmetric(a in any_card(), b in any_card(), vira in any_card()) {
        let forward = TrucoRules.compare(a, b, vira);
        let backward = TrucoRules.compare(b, a, vira);
        prop_assert_eq!(forward, backward.reverse());
        if a == b {
            prop_assert_eq!(forward, Ordering::Equal);
        }
    }
}

#[test]
fn three_card_hand_peaks_at_thirty_six() {
    let rules = TrucoRules;
    let deck = Deck::standard();
    let vira = deck.cards()[0];
    let mut values: Vec<i32> = deck
        .cards()
        .iter()
        .map(|card| rules.relative_value(*card, vira))
        .collect();
    values.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(values[..3].iter().sum::<i32>(), 36);
    assert_eq!(values[..2].iter().sum::<i32>(), 25);
}
