// vle-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};
use uom::si::pressure::millimeter_of_mercury;
use uom::si::thermodynamic_temperature::degree_celsius;

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Pressure from millimetres of mercury, the unit the Antoine tables are fitted in.
#[inline]
pub fn mmhg(v: f64) -> Pressure {
    Pressure::new::<millimeter_of_mercury>(v)
}

/// Temperature from degrees Celsius, the unit the Antoine tables are fitted in.
#[inline]
pub fn celsius(v: f64) -> Temperature {
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn to_mmhg(p: Pressure) -> f64 {
    p.get::<millimeter_of_mercury>()
}

#[inline]
pub fn to_celsius(t: Temperature) -> f64 {
    t.get::<degree_celsius>()
}

pub mod constants {
    /// One standard atmosphere in mmHg.
    pub const ATM_MMHG: f64 = 760.0;
    /// One standard atmosphere in Pa.
    pub const ATM_PA: f64 = 101_325.0;
}
