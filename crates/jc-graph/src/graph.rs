//! Core graph data structures.

use jc_core::{StageId, StationId};
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Role of a stage in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    AmbientInterface,
    Inlet,
    Fan,
    Compressor,
    Bypass,
    Combustor,
    Spool,
    Turbine,
    Nozzle,
}

/// A point on the gas path where a flow state is defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    pub label: String,
}

/// A stage: consumes its inlet stations and produces its outlet stations.
///
/// Spools have no stations; they are wired with shaft links only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageNode {
    pub id: StageId,
    pub name: String,
    pub kind: StageKind,
    pub inlets: Vec<StationId>,
    pub outlets: Vec<StationId>,
}

/// Mechanical dependency: `to` needs `from` to be evaluated first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaftLink {
    pub from: StageId,
    pub to: StageId,
}

/// A validated, immutable stage graph.
///
/// Stations and stages are stored in vectors indexed by their IDs. The
/// evaluation order is computed once at build time.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) stations: Vec<Station>,
    pub(crate) stages: Vec<StageNode>,
    pub(crate) shafts: Vec<ShaftLink>,
    /// Producing stage per station slot.
    pub(crate) producers: Vec<Option<StageId>>,
    pub(crate) order: Vec<StageId>,
}

impl Graph {
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn stages(&self) -> &[StageNode] {
        &self.stages
    }

    pub fn shaft_links(&self) -> &[ShaftLink] {
        &self.shafts
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.slot())
    }

    pub fn stage(&self, id: StageId) -> Option<&StageNode> {
        self.stages.get(id.slot())
    }

    pub fn station_by_label(&self, label: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.label == label)
    }

    /// Resolve a station label to its id.
    pub fn station_id(&self, label: &str) -> GraphResult<StationId> {
        self.station_by_label(label)
            .map(|s| s.id)
            .ok_or_else(|| GraphError::UnknownStation {
                label: label.to_string(),
            })
    }

    pub fn stage_by_name(&self, name: &str) -> Option<&StageNode> {
        self.stages.iter().find(|s| s.name == name)
    }

    /// Stage producing a station; `None` for external sources.
    pub fn producer(&self, station: StationId) -> Option<StageId> {
        self.producers.get(station.slot()).copied().flatten()
    }

    /// Stages reading a station, in id order.
    pub fn consumers(&self, station: StationId) -> Vec<StageId> {
        self.stages
            .iter()
            .filter(|s| s.inlets.contains(&station))
            .map(|s| s.id)
            .collect()
    }

    /// Stages that must be evaluated before `stage`, sorted and deduplicated.
    pub fn upstream(&self, stage: StageId) -> Vec<StageId> {
        let mut deps: Vec<StageId> = Vec::new();
        if let Some(node) = self.stage(stage) {
            deps.extend(node.inlets.iter().filter_map(|&s| self.producer(s)));
        }
        deps.extend(self.shafts.iter().filter(|l| l.to == stage).map(|l| l.from));
        deps.sort();
        deps.dedup();
        deps
    }

    /// Topological order over flow and shaft dependencies, ties broken by id.
    pub fn evaluation_order(&self) -> &[StageId] {
        &self.order
    }

    pub fn stages_of_kind(&self, kind: StageKind) -> impl Iterator<Item = &StageNode> + '_ {
        self.stages.iter().filter(move |s| s.kind == kind)
    }
}
