//! International Standard Atmosphere, troposphere and lower stratosphere.
//!
//! ```text
//! 0 ≤ h ≤ 11 km:   T = T0 + a·h,  p = p0 · (T/T0)^(-g/(a·R))      a = -6.5 K/km
//! 11 < h ≤ 25 km:  T = T11,       p = p11 · exp(-g·(h - 11 km)/(R·T11))
//! ρ = p / (R·T)
//! ```
//!
//! Sea-level values, g and R come from the injected [`GasConstants`].

use jc_core::{Density, GasConstants, Pressure, Temperature, k, kg_m3, pa};

use crate::error::{GasError, GasResult};
use crate::medium::Medium;
use crate::state::FlowStateInput;

/// Temperature gradient of the troposphere [K/m].
pub const LAPSE_RATE: f64 = -6.5e-3;
/// Geopotential altitude of the tropopause [m].
pub const TROPOPAUSE: f64 = 11_000.0;
/// Upper limit of the isothermal layer [m].
pub const CEILING: f64 = 25_000.0;

/// Static conditions at one altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsaState {
    pub temperature: Temperature,
    pub pressure: Pressure,
    pub density: Density,
}

/// ISA static conditions at a geopotential altitude.
///
/// # Errors
/// [`GasError::AltitudeOutOfRange`] outside `0..=25 000 m`.
pub fn isa(altitude_m: f64, constants: &GasConstants) -> GasResult<IsaState> {
    if !(0.0..=CEILING).contains(&altitude_m) {
        return Err(GasError::AltitudeOutOfRange {
            altitude_m,
            max_m: CEILING,
        });
    }
    let c = constants;
    let exponent = -c.g / (LAPSE_RATE * c.gas_constant);
    let troposphere = |h: f64| {
        let t = c.temperature_sl + LAPSE_RATE * h;
        (t, c.pressure_sl * (t / c.temperature_sl).powf(exponent))
    };

    let (t, p) = if altitude_m <= TROPOPAUSE {
        troposphere(altitude_m)
    } else {
        let (t11, p11) = troposphere(TROPOPAUSE);
        let decay = -c.g * (altitude_m - TROPOPAUSE) / (c.gas_constant * t11);
        (t11, p11 * decay.exp())
    };

    Ok(IsaState {
        temperature: k(t),
        pressure: pa(p),
        density: kg_m3(p / (c.gas_constant * t)),
    })
}

impl FlowStateInput {
    /// Free-stream air at `altitude_m` flying at `mach`.
    pub fn at_altitude(
        station: impl Into<String>,
        altitude_m: f64,
        mach: f64,
        constants: &GasConstants,
    ) -> GasResult<Self> {
        let state = isa(altitude_m, constants)?;
        Ok(Self::new(station)
            .mach(mach)
            .t_static(state.temperature)
            .p_static(state.pressure)
            .medium(Medium::Air))
    }
}
