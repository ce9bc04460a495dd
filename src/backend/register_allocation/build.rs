use std::fmt::{self, Display};
use std::str::FromStr;

use super::{InterferenceGraph, LiveState, LivenessTable};
use crate::ir::Variable;

/// Decides which entries of a liveness point take part in edge formation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeMembership {
    /// Every entry of a point, defined or live, interferes with every other entry
    AllEntries,
    /// Only live entries interfere, a defined destination is left out of its own point
    LiveOnly,
}

impl EdgeMembership {
    pub fn participates(&self, state: LiveState) -> bool {
        match self {
            EdgeMembership::AllEntries => true,
            EdgeMembership::LiveOnly => state == LiveState::Live,
        }
    }
}

impl Default for EdgeMembership {
    fn default() -> Self {
        EdgeMembership::AllEntries
    }
}

impl FromStr for EdgeMembership {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(EdgeMembership::AllEntries),
            "live" => Ok(EdgeMembership::LiveOnly),
            _ => Err(format!("unknown interference policy '{}'", s)),
        }
    }
}

impl Display for EdgeMembership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeMembership::AllEntries => write!(f, "all"),
            EdgeMembership::LiveOnly => write!(f, "live"),
        }
    }
}

// One node per variable of the universe
// Every pair of participating names at a point interferes
pub fn build(
    table: &LivenessTable,
    universe: &[Variable],
    membership: EdgeMembership,
) -> InterferenceGraph {
    log::debug!("Starting build stage");
    let mut graph = InterferenceGraph::new(universe);

    for (index, point) in table.points().iter().enumerate() {
        let members: Vec<u32> = point
            .entries()
            .filter(|&(_, state)| membership.participates(state))
            .filter_map(|(variable, _)| {
                let node = graph.node(variable);
                if node.is_none() {
                    log::warn!(
                        "{} at point {} is not part of the variable universe",
                        variable,
                        index
                    );
                }
                node
            })
            .collect();

        for (i, &x) in members.iter().enumerate() {
            for &y in &members[i + 1..] {
                graph.let_interfere(x, y);
            }
        }
    }

    log::trace!("Graph:{:?}", graph);
    log::debug!(
        "interference graph has {} nodes and {} edges",
        graph.len(),
        graph.edge_count()
    );
    graph
}
