//! The backtracking conflict solver.

use log::{debug, trace};

use crate::{
    Error,
    conflict::RConflict,
    graph::{Graph, NodeId},
    traits::{Named, ResolverPackage},
};

/// Returns whether `node` can currently be disabled: it is not a non-local root, and disabling it
/// would not leave any of its owning dependencies without an enabled satisfier.
fn is_disableable<P: ResolverPackage>(graph: &Graph<P>, node: NodeId, roots: &[NodeId]) -> bool {
    let is_non_local_root = roots
        .iter()
        .any(|&root| root == node && graph.node(root).pkg.origin() != crate::Origin::Local);
    if is_non_local_root {
        trace!("{:?} cannot be disabled because it is a root", node);
        return false;
    }

    for &owner_edge in &graph.node(node).owners {
        let edge = graph.edge(owner_edge);
        let has_alternative = edge
            .satisfiers
            .iter()
            .any(|&s| s != node && !graph.node(s).disabled);
        if !has_alternative {
            trace!(
                "{:?} cannot be disabled because it is a sole dependency of {:?}",
                node, edge.owner
            );
            return false;
        }
    }
    true
}

/// Recursively resolves `conflicts[0..]`, mutating `graph`'s `disabled` flags in place and
/// restoring them on backtrack. Returns whether every conflict in the slice was resolved.
fn solve<P: ResolverPackage>(
    graph: &mut Graph<P>,
    conflicts: &[RConflict],
    roots: &[NodeId],
    budget: &mut Option<u32>,
) -> bool {
    let Some((conflict, rest)) = conflicts.split_first() else {
        return true;
    };

    if let Some(remaining) = budget.as_mut() {
        if *remaining == 0 {
            return false;
        }
        *remaining -= 1;
    }

    if graph.node(conflict.preferred).disabled || graph.node(conflict.other).disabled {
        return solve(graph, rest, roots, budget);
    }

    debug!(
        "resolving conflict between {:?} and {:?}",
        conflict.preferred, conflict.other
    );

    // Preferred-side-wins: try disabling `other` first.
    if is_disableable(graph, conflict.other, roots) {
        graph.node_mut(conflict.other).disabled = true;
        if solve(graph, rest, roots, budget) {
            return true;
        }
        graph.node_mut(conflict.other).disabled = false;
    }

    if is_disableable(graph, conflict.preferred, roots) {
        graph.node_mut(conflict.preferred).disabled = true;
        if solve(graph, rest, roots, budget) {
            return true;
        }
        graph.node_mut(conflict.preferred).disabled = false;
    }

    debug!(
        "unable to resolve conflict between {:?} and {:?}",
        conflict.preferred, conflict.other
    );
    false
}

/// Attempts to resolve every conflict in `conflicts` by disabling one node per conflict, subject
/// to the root-preservation and sole-satisfier constraints enforced by [`is_disableable`].
///
/// `budget`, if set, bounds the number of recursive steps taken before giving up with
/// [`Error::BudgetExhausted`] rather than exhaustively searching; `None` preserves the original's
/// unbounded worst case.
pub fn solve_conflicts<P: ResolverPackage>(
    graph: &mut Graph<P>,
    conflicts: &[RConflict],
    roots: &[NodeId],
    mut budget: Option<u32>,
) -> Result<(), Error> {
    if solve(graph, conflicts, roots, &mut budget) {
        return Ok(());
    }

    if budget == Some(0) {
        return Err(Error::BudgetExhausted);
    }

    // Recover a concrete offending pair for diagnostics: the first still-unresolved conflict.
    let offending = conflicts
        .iter()
        .find(|c| !graph.node(c.preferred).disabled && !graph.node(c.other).disabled);
    let (a, b) = match offending {
        Some(c) => (
            graph.node(c.preferred).pkg.name().to_string(),
            graph.node(c.other).pkg.name().to_string(),
        ),
        None => ("<unknown>".to_string(), "<unknown>".to_string()),
    };
    Err(Error::UnresolvableConflict(a, b))
}
