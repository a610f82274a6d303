use enumkit::prelude::*;

#[derive(Debug, Clone, PartialEq, MapValue)]
struct Card {
    rank: u8,
}

#[derive(Debug, MapValue)]
#[map_value(name = "cards.Hand")]
struct Hand<T> {
    cards: Vec<T>,
}

fn main() {
    assert_eq!(Card::value_type(), ValueType::Named("Card"));
    assert_eq!(<Hand<Card> as MapValue>::value_type().as_str(), "cards.Hand");
    assert!(!Card { rank: 1 }.is_null());
    let _ = Hand::<Card> { cards: Vec::new() }.cards;
}
