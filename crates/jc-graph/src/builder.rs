//! Incremental graph builder.

use jc_core::{Id, StageId, StationId};

use crate::error::GraphResult;
use crate::graph::{Graph, ShaftLink, StageKind, StageNode, Station};
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// Use `add_station`, `add_stage` and `add_shaft_link` to describe the
/// engine, then call `build()` to validate and freeze it into an immutable
/// `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    stations: Vec<Station>,
    stages: Vec<StageNode>,
    shafts: Vec<ShaftLink>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station and return its ID.
    pub fn add_station(&mut self, label: impl Into<String>) -> StationId {
        let id = Id::from_index(self.stations.len() as u32);
        self.stations.push(Station {
            id,
            label: label.into(),
        });
        id
    }

    /// Add a stage reading `inlets` and producing `outlets`.
    pub fn add_stage(
        &mut self,
        name: impl Into<String>,
        kind: StageKind,
        inlets: &[StationId],
        outlets: &[StationId],
    ) -> StageId {
        let id = Id::from_index(self.stages.len() as u32);
        self.stages.push(StageNode {
            id,
            name: name.into(),
            kind,
            inlets: inlets.to_vec(),
            outlets: outlets.to_vec(),
        });
        id
    }

    /// Record that `to` depends mechanically on `from`.
    pub fn add_shaft_link(&mut self, from: StageId, to: StageId) {
        self.shafts.push(ShaftLink { from, to });
    }

    /// Validate the description and compute the evaluation order.
    pub fn build(self) -> GraphResult<Graph> {
        validate::validate_structure(&self.stations, &self.stages, &self.shafts)?;
        let producers = validate::collect_producers(&self.stations, &self.stages)?;
        let order = validate::topological_order(&self.stages, &self.shafts, &producers)?;

        Ok(Graph {
            stations: self.stations,
            stages: self.stages,
            shafts: self.shafts,
            producers,
            order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assigns_sequential_ids() {
        let mut builder = GraphBuilder::new();
        let s0 = builder.add_station("0");
        let s1 = builder.add_station("1");
        let c0 = builder.add_stage("interface", StageKind::AmbientInterface, &[s0], &[s1]);

        assert_eq!(s0.index(), 0);
        assert_eq!(s1.index(), 1);
        assert_eq!(c0.index(), 0);
        assert_eq!(builder.stations.len(), 2);
        assert_eq!(builder.stages.len(), 1);
    }

    #[test]
    fn external_station_has_no_producer() {
        let mut builder = GraphBuilder::new();
        let s0 = builder.add_station("0");
        let s1 = builder.add_station("1");
        let c0 = builder.add_stage("interface", StageKind::AmbientInterface, &[s0], &[s1]);
        let graph = builder.build().unwrap();

        assert_eq!(graph.producer(s0), None);
        assert_eq!(graph.producer(s1), Some(c0));
        assert_eq!(graph.consumers(s0), vec![c0]);
    }
}
