// jc-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Force as UomForce, MassDensity as UomMassDensity, MassRate as UomMassRate,
    Power as UomPower, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Density = UomMassDensity;
pub type Force = UomForce;
pub type MassRate = UomMassRate;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

/// Specific heat capacity [J/(kg·K)].
///
/// Kept as a plain f64; the derived uom quantity adds nothing here.
pub type SpecHeatCapacity = f64;

/// Specific entropy [J/(kg·K)].
pub type SpecEntropy = f64;

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

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn newton(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

#[inline]
pub fn watt(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn kg_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_store_si_base_values() {
        assert_eq!(pa(22_632.0).value, 22_632.0);
        assert_eq!(k(216.0).value, 216.0);
        assert_eq!(kgps(518.4).value, 518.4);
        assert_eq!(newton(1.0e5).value, 1.0e5);
        assert_eq!(watt(3.0).value, 3.0);
        assert_eq!(mps(240.0).value, 240.0);
        assert_eq!(m2(1.5).value, 1.5);
        assert_eq!(kg_m3(0.36).value, 0.36);
    }
}
