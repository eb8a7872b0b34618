//! The satisfier oracle: finding which candidates in a pool satisfy a dependency expression.

use log::trace;

use crate::{ResolverFlags, traits::DependencyExpr};

/// Returns the subsequence of `pool` (preserving its order) that satisfies `dep`.
///
/// When `flags` contains [`ResolverFlags::IGNORE_DEPENDENCY_VERSION`], candidates are matched as
/// if `dep` carried no version constraint. Returns an empty vector when nothing matches; this is
/// not itself a failure, the caller (the graph builder) decides what an empty result means.
pub fn satisfiers<'pool, P, D>(dep: &D, pool: &'pool [P], flags: ResolverFlags) -> Vec<&'pool P>
where
    D: DependencyExpr<P>,
{
    let ignore_version = flags.contains(ResolverFlags::IGNORE_DEPENDENCY_VERSION);
    let found: Vec<&P> = pool
        .iter()
        .filter(|candidate| dep.is_satisfied_by(candidate, ignore_version))
        .collect();
    trace!("found {} satisfier(s) in pool of {}", found.len(), pool.len());
    found
}
