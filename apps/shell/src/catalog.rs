//! Demo enumerations known to the shell.

use enumkit::domain::config::RegistryConfig;
use enumkit::{DomainInfo, EnumError, Enumeration, Registry};

#[derive(Debug, Enumeration)]
#[constants(HEARTS, SPADES, DIAMONDS, CLUBS)]
pub struct Suit;

#[derive(Debug, Enumeration)]
#[constants(
    MERCURY(3.303e23, 2.4397e6),
    VENUS(4.869e24, 6.0518e6),
    EARTH(5.976e24, 6.37814e6),
    MARS(6.421e23, 3.3972e6),
    JUPITER(1.9e27, 7.1492e7),
    SATURN(5.688e26, 6.0268e7),
    URANUS(8.686e25, 2.5559e7),
    NEPTUNE(1.024e26, 2.4746e7)
)]
pub struct Planet {
    /// In kilograms.
    pub mass: f64,
    /// In meters.
    pub radius: f64,
}

impl Planet {
    /// Universal gravitational constant (m3 kg-1 s-2).
    const G: f64 = 6.673e-11;

    #[must_use]
    pub fn surface_gravity(&self) -> f64 {
        Self::G * self.mass / (self.radius * self.radius)
    }
}

/// Registers every demo enumeration.
///
/// # Errors
/// Fails if another enumeration already holds one of the type names.
pub fn register(config: &RegistryConfig) -> Result<Vec<DomainInfo>, EnumError> {
    Registry::builder().register::<Suit>().register::<Planet>().config(config).build()
}
