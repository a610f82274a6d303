use enumkit::prelude::*;

#[derive(Debug, Enumeration)]
#[constants(HEARTS, SPADES, DIAMONDS, CLUBS)]
pub struct Suit;

#[derive(Debug, Enumeration)]
#[enumeration(name = "solar.Planet")]
#[constants(MERCURY(3.303e23, 2.4397e6), VENUS(4.869e24, 6.0518e6))]
pub struct Planet {
    mass: f64,
    radius: f64,
}

#[derive(Debug, Enumeration)]
#[enumeration(accessors = false)]
#[constants(LOW(1), HIGH(u8::MAX))]
struct Level(u8);

#[derive(Debug, Enumeration)]
#[constants(Type, SELF, DarkBlue)]
struct Awkward;

fn main() {
    assert_eq!(Suit::clubs().ordinal(), 3);
    assert_eq!(<Planet as Enumeration>::TYPE_NAME, "solar.Planet");
    assert!(Planet::venus().mass > Planet::mercury().mass);
    assert!(Planet::mercury().radius < Planet::venus().radius);
    assert_eq!(Level::value_of("HIGH").map(|level| level.0).ok(), Some(255));
    assert_eq!(Awkward::r#type().name(), "Type");
    assert_eq!(Awkward::self_().ordinal(), 1);
    assert_eq!(Awkward::dark_blue().to_string(), "DarkBlue");
}
