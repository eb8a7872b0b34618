//! The reducer: turns the solved graph back into a flat, ordered package list.

use log::trace;

use crate::{
    Origin,
    graph::{Graph, NodeId},
    traits::ResolverPackage,
};

/// Traverses the enabled subgraph reachable from `node`, appending non-local packages to
/// `solution` in true dependency order: a node's dependencies are emitted before the node itself,
/// so callers never see a package ahead of something it needs.
///
/// Guarded by `disabled`/`picked` so each node is visited at most once per resolution, and only
/// the first enabled satisfier of each dependency is followed, even when several remain enabled.
pub fn reduce<P: ResolverPackage>(graph: &mut Graph<P>, node: NodeId, solution: &mut Vec<P>) {
    if graph.node(node).disabled || graph.node(node).picked {
        return;
    }
    graph.node_mut(node).picked = true;

    let rdeps = graph.node(node).rdeps.clone();
    for edge_id in rdeps {
        let edge = graph.edge(edge_id);
        let next = edge
            .satisfiers
            .iter()
            .copied()
            .find(|&s| !graph.node(s).disabled);
        if let Some(next) = next {
            reduce(graph, next, solution);
        }
    }

    if graph.node(node).pkg.origin() != Origin::Local {
        trace!("emitting {:?}", node);
        solution.push(graph.node(node).pkg.clone());
    }
}
