//! The top-level driver: `resolve_dependencies_thorough`.

use log::{debug, info};

use crate::{
    Error, ResolverFlags,
    conflict::find_conflicts,
    graph::{Graph, extend_graph},
    reduce::reduce,
    solver::solve_conflicts,
    traits::{Named, ResolverHandle, find_by_name},
};

/// Resolves dependencies for installing `add` and removing `remove`, against the package
/// catalogues and oracles exposed by `handle`.
///
/// Returns an ordered list of non-local packages to install — both the requested additions and
/// every transitively required package — in dependency order (dependencies before dependents).
/// Packages that are already installed and remain installed are never part of the result, even if
/// they end up as graph roots.
///
/// # Errors
///
/// Returns [`Error::UnresolvableDependency`] if any package ending up in the graph has a
/// dependency with zero satisfiers in the pool, or [`Error::UnresolvableConflict`] /
/// [`Error::BudgetExhausted`] if the backtracking solver cannot resolve every pairwise conflict.
/// Callers must distinguish "no solution" from "nothing to do" out of band, e.g. by checking
/// whether `add` itself was empty.
pub fn resolve_dependencies_thorough<H>(
    handle: &H,
    add: &[H::Package],
    remove: &[H::Package],
    flags: ResolverFlags,
) -> Result<Vec<H::Package>, Error>
where
    H: ResolverHandle,
{
    resolve_dependencies_thorough_with_budget(handle, add, remove, flags, None)
}

/// As [`resolve_dependencies_thorough`], but bounds the conflict solver's backtracking search to
/// at most `budget` recursive steps, returning [`Error::BudgetExhausted`] instead of exhausting
/// the search. `None` (used by the unbounded entry point above) preserves the original's
/// worst-case behavior.
pub fn resolve_dependencies_thorough_with_budget<H>(
    handle: &H,
    add: &[H::Package],
    remove: &[H::Package],
    flags: ResolverFlags,
    budget: Option<u32>,
) -> Result<Vec<H::Package>, Error>
where
    H: ResolverHandle,
{
    info!("resolve_dependencies_thorough: {} add, {} remove", add.len(), remove.len());

    let pool = assemble_pool(handle, add, remove);

    let mut graph = Graph::new();
    let mut roots = Vec::new();

    for pkg in add {
        let node = extend_graph(handle, &mut graph, pkg, &pool, flags)?;
        roots.push(node);
    }
    for pkg in handle.local_packages() {
        if find_by_name(add, pkg.name()).is_some() || find_by_name(remove, pkg.name()).is_some() {
            continue;
        }
        let node = extend_graph(handle, &mut graph, pkg, &pool, flags)?;
        roots.push(node);
    }

    let conflicts = find_conflicts(&graph);
    solve_conflicts(&mut graph, &conflicts, &roots, budget)?;

    // `reduce` itself emits in dependency order and guards against re-emission via `picked`, so
    // accumulating straight into one vector across all roots is safe even when two roots share a
    // downstream dependency: the shared node is emitted once, the first time it's reached, ahead
    // of every root that needs it.
    let mut solution = Vec::new();
    for &root in &roots {
        reduce(&mut graph, root, &mut solution);
    }

    debug!(
        "solution: {} graph: {} roots: {}",
        solution.len(),
        graph.len(),
        roots.len()
    );

    Ok(solution)
}

/// Assembles the pool of candidate satisfiers: all `add` packages, then local packages not in
/// `add`/`remove`, then, for each sync database in order, packages not in `add`, not in `remove`,
/// and not ignored by the handle.
fn assemble_pool<H: ResolverHandle>(
    handle: &H,
    add: &[H::Package],
    remove: &[H::Package],
) -> Vec<H::Package> {
    let mut pool = Vec::new();
    for pkg in add {
        pool.push(pkg.clone());
    }
    for pkg in handle.local_packages() {
        if find_by_name(add, pkg.name()).is_none() && find_by_name(remove, pkg.name()).is_none() {
            pool.push(pkg.clone());
        }
    }
    for db in handle.sync_databases() {
        for pkg in db {
            if find_by_name(add, pkg.name()).is_none()
                && find_by_name(remove, pkg.name()).is_none()
                && !handle.should_ignore(pkg)
            {
                pool.push(pkg.clone());
            }
        }
    }
    pool
}
