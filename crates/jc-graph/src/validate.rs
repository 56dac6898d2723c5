//! Graph validation logic.

use std::collections::{BTreeSet, HashSet};

use jc_core::{StageId, StationId};

use crate::error::{GraphError, GraphResult};
use crate::graph::{ShaftLink, StageNode, Station};

/// Check that every reference resolves and names are unique.
pub(crate) fn validate_structure(
    stations: &[Station],
    stages: &[StageNode],
    shafts: &[ShaftLink],
) -> GraphResult<()> {
    let mut labels = HashSet::new();
    for station in stations {
        if !labels.insert(station.label.as_str()) {
            return Err(GraphError::DuplicateLabel {
                label: station.label.clone(),
            });
        }
    }

    let mut names = HashSet::new();
    for stage in stages {
        if !names.insert(stage.name.as_str()) {
            return Err(GraphError::DuplicateStageName {
                name: stage.name.clone(),
            });
        }
        for &station in stage.inlets.iter().chain(&stage.outlets) {
            if station.slot() >= stations.len() {
                return Err(GraphError::InvalidStationRef {
                    stage: stage.id,
                    station,
                });
            }
        }
    }

    for link in shafts {
        for stage in [link.from, link.to] {
            if stage.slot() >= stages.len() {
                return Err(GraphError::InvalidStageRef { stage });
            }
        }
    }

    Ok(())
}

/// Map each station to the single stage producing it.
pub(crate) fn collect_producers(
    stations: &[Station],
    stages: &[StageNode],
) -> GraphResult<Vec<Option<StageId>>> {
    let mut producers: Vec<Option<StageId>> = vec![None; stations.len()];
    for stage in stages {
        for &station in &stage.outlets {
            let slot = &mut producers[station.slot()];
            if let Some(first) = *slot {
                return Err(GraphError::DuplicateProducer {
                    station: stations[station.slot()].label.clone(),
                    first: stages[first.slot()].name.clone(),
                    second: stage.name.clone(),
                });
            }
            *slot = Some(stage.id);
        }
    }
    Ok(producers)
}

/// Kahn's algorithm over flow and shaft edges; ready stages leave in id order.
pub(crate) fn topological_order(
    stages: &[StageNode],
    shafts: &[ShaftLink],
    producers: &[Option<StageId>],
) -> GraphResult<Vec<StageId>> {
    let n = stages.len();
    let mut edges: BTreeSet<(StageId, StageId)> = BTreeSet::new();
    for stage in stages {
        for &inlet in &stage.inlets {
            if let Some(from) = producer_of(producers, inlet) {
                edges.insert((from, stage.id));
            }
        }
    }
    for link in shafts {
        edges.insert((link.from, link.to));
    }

    let mut indegree = vec![0_usize; n];
    let mut downstream: Vec<Vec<StageId>> = vec![Vec::new(); n];
    for &(from, to) in &edges {
        indegree[to.slot()] += 1;
        downstream[from.slot()].push(to);
    }

    let mut ready: BTreeSet<StageId> = stages
        .iter()
        .filter(|s| indegree[s.id.slot()] == 0)
        .map(|s| s.id)
        .collect();
    let mut order = Vec::with_capacity(n);
    while let Some(next) = ready.pop_first() {
        order.push(next);
        for &to in &downstream[next.slot()] {
            indegree[to.slot()] -= 1;
            if indegree[to.slot()] == 0 {
                ready.insert(to);
            }
        }
    }

    if order.len() < n {
        let stuck = stages
            .iter()
            .filter(|s| indegree[s.id.slot()] > 0)
            .map(|s| s.name.clone())
            .collect();
        return Err(GraphError::Cycle { stages: stuck });
    }
    Ok(order)
}

fn producer_of(producers: &[Option<StageId>], station: StationId) -> Option<StageId> {
    producers.get(station.slot()).copied().flatten()
}
