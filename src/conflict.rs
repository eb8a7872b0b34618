//! Pairwise conflict detection over an already-built graph.

use log::trace;

use crate::{
    graph::{Graph, NodeId},
    traits::{DependencyExpr, Named, ResolverPackage},
};

/// An unordered conflict between two graph nodes, with a preferred side.
///
/// `preferred` is the earlier node in graph order; the solver tries to disable `other` first, so
/// that the later-discovered (typically: less-wanted) package is the one that gets dropped when
/// both sides are otherwise equally disableable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RConflict {
    /// The earlier, preferred node.
    pub preferred: NodeId,
    /// The later node; the solver tries to disable this one first.
    pub other: NodeId,
}

/// Returns whether `a` and `b` conflict: same name, or either one's conflict list matches the
/// other package.
fn packages_conflict<P: ResolverPackage>(a: &P, b: &P) -> bool {
    if a.name() == b.name() {
        trace!("{} conflicts with {} (same name)", a.name(), b.name());
        return true;
    }
    for conflict in a.conflicts() {
        if conflict.is_satisfied_by(b, false) {
            trace!("{} conflicts with {}", a.name(), b.name());
            return true;
        }
    }
    for conflict in b.conflicts() {
        if conflict.is_satisfied_by(a, false) {
            trace!("{} conflicts with {}", a.name(), b.name());
            return true;
        }
    }
    false
}

/// Enumerates every unordered pair of nodes in `graph` and returns the ones that conflict.
///
/// Iterates pairs `(i, j)` with `i < j` in graph order, so [`RConflict::preferred`] is always the
/// earlier-seeded node — this preference is an emergent property of pool/graph seeding order and
/// must not be re-sorted by any other criterion (e.g. name or version).
pub fn find_conflicts<P: ResolverPackage>(graph: &Graph<P>) -> Vec<RConflict> {
    let ids: Vec<NodeId> = graph.node_ids().collect();
    let mut conflicts = Vec::new();
    for (i, &preferred) in ids.iter().enumerate() {
        for &other in &ids[i + 1..] {
            trace!("checking conflict {:?} {:?}", preferred, other);
            if packages_conflict(&graph.node(preferred).pkg, &graph.node(other).pkg) {
                conflicts.push(RConflict { preferred, other });
            }
        }
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Origin;

    #[derive(Clone, Eq, PartialEq)]
    struct Pkg {
        name: &'static str,
        conflicts: Vec<Rel>,
    }

    impl Named for Pkg {
        fn name(&self) -> &str {
            self.name
        }
    }

    #[derive(Clone, Eq, PartialEq)]
    struct Rel(&'static str);

    impl DependencyExpr<Pkg> for Rel {
        fn is_satisfied_by(&self, candidate: &Pkg, _ignore_version: bool) -> bool {
            candidate.name == self.0
        }
    }

    impl ResolverPackage for Pkg {
        type Dependency = Rel;
        type Conflict = Rel;

        fn origin(&self) -> Origin {
            Origin::Sync
        }

        fn depends(&self) -> &[Rel] {
            &[]
        }

        fn conflicts(&self) -> &[Rel] {
            &self.conflicts
        }
    }

    fn leaf(name: &'static str, conflicts: Vec<&'static str>) -> Pkg {
        Pkg {
            name,
            conflicts: conflicts.into_iter().map(Rel).collect(),
        }
    }

    #[test]
    fn same_name_is_a_conflict() {
        assert!(packages_conflict(
            &leaf("a", vec![]),
            &leaf("a", vec![])
        ));
    }

    #[test]
    fn conflict_expression_is_symmetric() {
        let a = leaf("a", vec!["b"]);
        let b = leaf("b", vec![]);
        assert!(packages_conflict(&a, &b));
        assert!(packages_conflict(&b, &a));
    }

    #[test]
    fn unrelated_packages_do_not_conflict() {
        assert!(!packages_conflict(&leaf("a", vec![]), &leaf("b", vec![])));
    }
}
