//! Unit-attached quantity types and cgs constructors
//!
//! Stella works in cgs units, with masses in solar masses. Quantities are
//! stored as `uom` SI types so that callers can ask for any compatible unit.
//!
//! ```rust
//! # use stools_eve::units;
//! use uom::si::length::kilometer;
//!
//! let r = units::cm(1.0e10);
//! assert!((r.get::<kilometer>() - 1.0e5).abs() < 1.0e-6);
//! ```

use uom::si::f64::{
    Length as UomLength, Mass as UomMass, MassDensity as UomMassDensity,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Density = UomMassDensity;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

/// Nominal solar mass (g), IAU 2015 resolution B3
pub const SOLAR_MASS_G: f64 = 1.988_409_870_698_051e33;

#[inline]
pub fn cm(v: f64) -> Length {
    use uom::si::length::centimeter;
    Length::new::<centimeter>(v)
}

#[inline]
pub fn grams(v: f64) -> Mass {
    use uom::si::mass::gram;
    Mass::new::<gram>(v)
}

#[inline]
pub fn solar_masses(v: f64) -> Mass {
    grams(v * SOLAR_MASS_G)
}

#[inline]
pub fn g_per_cm3(v: f64) -> Density {
    use uom::si::mass_density::gram_per_cubic_centimeter;
    Density::new::<gram_per_cubic_centimeter>(v)
}

#[inline]
pub fn kelvin(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn cm_per_s(v: f64) -> Velocity {
    use uom::si::velocity::centimeter_per_second;
    Velocity::new::<centimeter_per_second>(v)
}

#[inline]
pub fn seconds(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

/// Value of a mass in units of the nominal solar mass
#[inline]
pub fn in_solar_masses(m: Mass) -> f64 {
    use uom::si::mass::gram;
    m.get::<gram>() / SOLAR_MASS_G
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        ((a - b) / b).abs() < 1e-12
    }

    #[test]
    fn solar_mass_round_trip() {
        assert!(close(in_solar_masses(solar_masses(1.4)), 1.4));
    }

    #[test]
    fn cgs_constructors() {
        use uom::si::length::meter;
        use uom::si::mass_density::kilogram_per_cubic_meter;
        use uom::si::velocity::meter_per_second;

        assert!(close(cm(100.0).get::<meter>(), 1.0));
        assert!(close(g_per_cm3(1.0).get::<kilogram_per_cubic_meter>(), 1000.0));
        assert!(close(cm_per_s(1.0e7).get::<meter_per_second>(), 1.0e5));
    }

    #[test]
    fn grams_and_solar_masses_agree() {
        assert!(close(in_solar_masses(grams(SOLAR_MASS_G * 0.5)), 0.5));
    }
}
