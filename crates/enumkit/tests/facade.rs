use enumkit::prelude::*;
use enumkit::{EnumMapPayload, MapField};
use serde_json::json;
use serial_test::serial;

#[derive(Debug, Enumeration)]
#[constants(HEARTS, SPADES, DIAMONDS, CLUBS)]
pub struct Suit;

#[derive(Debug, Enumeration)]
#[constants(
    MERCURY(3.303e23, 2.4397e6),
    VENUS(4.869e24, 6.0518e6),
    EARTH(5.976e24, 6.37814e6),
    MARS(6.421e23, 3.3972e6)
)]
pub struct Planet {
    mass: f64,
    radius: f64,
}

impl Planet {
    const G: f64 = 6.673e-11;

    fn surface_gravity(&self) -> f64 {
        Self::G * self.mass / (self.radius * self.radius)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, MapValue)]
struct Card {
    rank: u8,
}

#[test]
fn derived_constants_are_singletons_in_ordinal_order() {
    assert!(std::ptr::eq(Suit::hearts(), Suit::value_of("HEARTS").unwrap()));
    assert!(std::ptr::eq(Suit::values()[3], Suit::clubs()));

    let ordinals: Vec<_> = Suit::values().iter().map(|suit| suit.ordinal()).collect();
    assert_eq!(ordinals, vec![0, 1, 2, 3]);
    assert_eq!(Suit::cardinality(), 4);
    assert_eq!(format!("{:?}", Suit::diamonds()), "Suit::DIAMONDS");
}

#[test]
fn constants_carry_their_arguments() {
    let earth = Planet::earth();
    assert_eq!(earth.ordinal(), 2);
    assert!((earth.surface_gravity() - 9.80).abs() < 0.01);
    assert!(Planet::mars().surface_gravity() < earth.surface_gravity());
}

#[test]
fn comparing_across_enumerations_is_a_type_mismatch() {
    assert_eq!(Suit::hearts().compare_to(Suit::spades()).unwrap(), std::cmp::Ordering::Less);

    let err = Suit::hearts().compare_to(Planet::earth()).unwrap_err();
    assert_eq!(err.kind(), "TypeMismatch");
}

#[test]
fn suit_scores() {
    let mut map = EnumMap::<Suit, i64>::new(false);
    map.put(Suit::hearts(), 1).unwrap();
    map.put(Suit::clubs(), 4).unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(Suit::spades()).unwrap(), None);
    assert_eq!(map.values().flatten().copied().collect::<Vec<_>>(), vec![1, 4]);
    assert!(map.contains_value(Some(&4)));
    assert!(!map.contains_value(Some(&2)));

    let err = map.put(Planet::venus(), 2).unwrap_err();
    assert!(matches!(err, EnumError::IllegalArgument { .. }));
}

#[test]
fn named_value_types_round_trip() {
    let mut hands = EnumMap::<Suit, Card>::new(true);
    hands.put(Suit::spades(), Card { rank: 12 }).unwrap();
    hands.put(Suit::clubs(), None).unwrap();

    let json = serde_json::to_value(&hands).unwrap();
    assert_eq!(json["valueType"], json!("Card"));

    let restored: EnumMap<Suit, Card> = serde_json::from_value(json).unwrap();
    assert_eq!(restored, hands);
    assert!(hands.expect("Suit", "Card", true).is_ok());

    let err = hands.expect("Suit", "object", true).unwrap_err();
    assert!(matches!(err, EnumError::Expectation { field: MapField::ValueType, .. }));
}

#[test]
#[serial(registry)]
fn registry_resolves_payload_key_types() {
    Registry::builder().register::<Suit>().register::<Planet>().eager(true).build().unwrap();

    let payload: EnumMapPayload<f64> = serde_json::from_value(json!({
        "keyType": "Planet", "valueType": "float", "allowNullValues": false, "values": {"3": 0.107}
    }))
    .unwrap();
    let info = Registry::resolve(&payload.key_type).unwrap();
    assert_eq!(info.name_of(3), Some("MARS"));
    assert!(Planet::is_loaded());

    let restored = EnumMap::<Planet, f64>::from_payload(payload).unwrap();
    assert_eq!(restored.get(Planet::mars()).unwrap(), Some(&0.107));
}

#[test]
fn erased_maps_expect_their_shape() {
    let mut maps: Vec<Box<dyn AnyEnumMap>> =
        vec![Box::new(EnumMap::<Suit, Card>::new(false)), Box::new(EnumMap::<Planet, f64>::new(true))];

    maps[1].expect_mut::<Planet, f64>(true).unwrap().put(Planet::earth(), 1.0).unwrap();
    assert_eq!(maps[1].keys(), vec!["EARTH"]);

    let err = maps[0].expect::<Suit, Card>(true).unwrap_err();
    assert_eq!(err.to_string(), "Callee expected an EnumMap with nullable flag true, but got false");
}
