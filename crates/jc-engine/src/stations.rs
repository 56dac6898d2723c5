//! Station-keyed pressure / temperature / mass-flow lookup.

use serde::Serialize;

use crate::engine::Engine;
use crate::error::EngineResult;
use crate::topology::station;

/// One row of the station table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRecord {
    pub station: String,
    pub pressure_pa: f64,
    pub temperature_k: f64,
    pub mass_flow_kg_s: f64,
    /// Static values rather than totals.
    pub is_static: bool,
}

/// Every station of an evaluated engine, upstream first.
///
/// The nozzle throats ("8", "18") report static conditions; every other
/// station reports totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationTable {
    records: Vec<StationRecord>,
}

impl StationTable {
    pub fn from_engine(engine: &Engine) -> EngineResult<Self> {
        let mut records = Vec::with_capacity(station::ALL.len());
        for label in station::ALL {
            let state = engine.station(label)?;
            let is_static = station::STATIC.contains(&label);
            let (pressure, temperature) = if is_static {
                (state.p_static()?, state.t_static()?)
            } else {
                (state.p_total()?, state.t_total()?)
            };
            records.push(StationRecord {
                station: label.to_string(),
                pressure_pa: pressure.value,
                temperature_k: temperature.value,
                mass_flow_kg_s: state.mass_flow()?.value,
                is_static,
            });
        }
        Ok(Self { records })
    }

    pub fn get(&self, station: &str) -> Option<&StationRecord> {
        self.records.iter().find(|r| r.station == station)
    }

    pub fn records(&self) -> &[StationRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &StationRecord> + '_ {
        self.records.iter()
    }
}
