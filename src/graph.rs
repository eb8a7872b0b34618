//! The resolver graph: an arena of resolver packages (`RPkg`) linked by resolver dependencies
//! (`RDep`), and the recursive builder that grows it from a single root package.

use log::{debug, trace};

use crate::{
    ResolverFlags,
    satisfier::satisfiers,
    traits::{ResolverHandle, ResolverPackage},
};

/// An index into [`Graph`]'s node arena.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

/// An index into [`Graph`]'s edge arena.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(usize);

/// A resolver package: a single node in the dependency graph.
#[derive(Debug)]
pub struct RPkg<P: ResolverPackage> {
    /// The backing package this node was built from.
    pub pkg: P,
    /// Outgoing dependency edges, in declaration order.
    pub rdeps: Vec<EdgeId>,
    /// Incoming edges: dependencies that list this node among their satisfiers.
    pub owners: Vec<EdgeId>,
    /// Set by the conflict solver during search; always restored on backtrack.
    pub disabled: bool,
    /// Set by the reducer to prevent re-emission; never reset within one resolution.
    pub picked: bool,
}

/// A resolver dependency: a directed edge from an owning node to its satisfiers.
#[derive(Debug)]
pub struct RDep<P: ResolverPackage> {
    /// The node that declared this dependency.
    pub owner: NodeId,
    /// The source dependency expression.
    pub dep: <P as ResolverPackage>::Dependency,
    /// Nodes that can satisfy [`RDep::dep`], in pool order.
    pub satisfiers: Vec<NodeId>,
}

/// The resolver's dependency graph, owning all [`RPkg`]/[`RDep`] values created during one
/// resolution call in two index-addressed arenas.
///
/// Dropping a `Graph` frees every node and edge it owns; there is no separate teardown pass.
#[derive(Debug)]
pub struct Graph<P: ResolverPackage> {
    nodes: Vec<RPkg<P>>,
    edges: Vec<RDep<P>>,
}

impl<P: ResolverPackage> Default for Graph<P> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<P: ResolverPackage> Graph<P> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node for `pkg`, if one has already been built (node uniqueness).
    pub fn find(&self, pkg: &P) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| &node.pkg == pkg)
            .map(NodeId)
    }

    /// Returns the node at `id`.
    pub fn node(&self, id: NodeId) -> &RPkg<P> {
        &self.nodes[id.0]
    }

    /// Returns a mutable reference to the node at `id`.
    pub fn node_mut(&mut self, id: NodeId) -> &mut RPkg<P> {
        &mut self.nodes[id.0]
    }

    /// Returns the edge at `id`.
    pub fn edge(&self, id: EdgeId) -> &RDep<P> {
        &self.edges[id.0]
    }

    /// Returns an iterator over all node ids, in construction order.
    ///
    /// Construction order is graph order: it determines both the reducer's traversal and the
    /// conflict finder's preference policy.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Returns the number of nodes currently in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push_node(&mut self, pkg: P) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(RPkg {
            pkg,
            rdeps: Vec::new(),
            owners: Vec::new(),
            disabled: false,
            picked: false,
        });
        id
    }

    fn push_edge(&mut self, owner: NodeId, dep: <P as ResolverPackage>::Dependency) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(RDep {
            owner,
            dep,
            satisfiers: Vec::new(),
        });
        id
    }
}

/// Idempotently adds `pkg` (and everything it transitively depends on) to `graph`.
///
/// Returns the node built for `pkg`, or `None` if any of its dependencies (directly or
/// transitively) has zero satisfiers in `pool` — an [`crate::Error::UnresolvableDependency`] for
/// the caller to report. On failure the graph retains whatever partial state was built before the
/// failing dependency; there is no rollback, it is simply dropped with the rest of the graph when
/// the driver returns.
pub fn extend_graph<H>(
    handle: &H,
    graph: &mut Graph<H::Package>,
    pkg: &H::Package,
    pool: &[H::Package],
    flags: ResolverFlags,
) -> Result<NodeId, crate::Error>
where
    H: ResolverHandle,
{
    use crate::traits::Named;

    if let Some(existing) = graph.find(pkg) {
        return Ok(existing);
    }

    debug!(
        "extending graph with {}/{}",
        match pkg.origin() {
            crate::Origin::Local => "local",
            crate::Origin::Sync => "sync",
        },
        pkg.name()
    );

    let node_id = graph.push_node(pkg.clone());

    for dep in pkg.depends() {
        if handle.provides_satisfies(dep) {
            trace!("dependency of {} satisfied by assume-installed list", pkg.name());
            continue;
        }

        trace!("resolving {} dep {}", pkg.name(), dep.name());
        let found = satisfiers(dep, pool, flags);
        if found.is_empty() {
            debug!("no satisfiers found for {} {}", pkg.name(), dep.name());
            return Err(crate::Error::UnresolvableDependency {
                dependent: pkg.name().to_string(),
                dependency: dep.name().to_string(),
            });
        }

        let edge_id = graph.push_edge(node_id, dep.clone());
        graph.node_mut(node_id).rdeps.push(edge_id);

        // `found` borrows `pool`, collect owned packages first so the recursive call below can
        // take a fresh `&H::Package` without fighting the borrow checker over `pool`.
        let candidates: Vec<H::Package> = found.into_iter().cloned().collect();
        for candidate in &candidates {
            let satisfier_id = extend_graph(handle, graph, candidate, pool, flags)?;
            graph.edges[edge_id.0].satisfiers.push(satisfier_id);
            graph.node_mut(satisfier_id).owners.push(edge_id);
        }
    }

    Ok(node_id)
}
