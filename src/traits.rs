//! Interfaces the resolver core consumes from the surrounding package-manager library.
//!
//! None of these traits prescribe a concrete name, version or dependency-expression type. The
//! resolver treats packages and dependency expressions as opaque values and only calls the
//! operations described here, so a caller's own package-database layer, version-comparison
//! oracle (`depcmp`) and data model can be plugged in without this crate knowing anything about
//! their representation.

/// Where a [`ResolverPackage`] was obtained from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Origin {
    /// The package is part of the local, currently-installed package cache.
    Local,
    /// The package comes from a sync (remote) database.
    Sync,
}

/// An interface for retrieving the name of a package-like value (packages or dependency
/// expressions).
pub trait Named {
    /// Returns the name of this value.
    fn name(&self) -> &str;
}

/// The opaque package type the resolver builds a dependency graph over.
///
/// Implementors are expected to behave as simple handles (e.g. a reference-counted pointer or a
/// small `Copy` index) into the caller's own package database; the resolver never attempts to
/// construct, mutate or deep-compare packages, only to clone the handle and compare identity.
pub trait ResolverPackage: Named + Clone + Eq {
    /// The dependency-expression type used by [`ResolverPackage::depends`].
    type Dependency: DependencyExpr<Self>;

    /// The dependency-expression type used by [`ResolverPackage::conflicts`], matched against
    /// other packages to detect pairwise conflicts.
    type Conflict: DependencyExpr<Self>;

    /// Returns whether this package is currently installed ([`Origin::Local`]) or available from
    /// a sync database ([`Origin::Sync`]).
    fn origin(&self) -> Origin;

    /// Returns the ordered sequence of run-time dependency expressions of this package.
    fn depends(&self) -> &[Self::Dependency];

    /// Returns the ordered sequence of conflict expressions of this package.
    fn conflicts(&self) -> &[Self::Conflict];
}

/// An opaque dependency (or conflict) expression, matched against candidate packages through the
/// external `depcmp` comparison oracle.
pub trait DependencyExpr<P>: Clone + Named {
    /// Returns whether `candidate` satisfies this expression (the `depcmp` oracle).
    ///
    /// When `ignore_version` is `true`, implementations must behave as though the expression
    /// carried no version constraint at all (`mod = ANY` in the original C model), without
    /// mutating `self` — the caller passes `ignore_version` per call rather than relying on any
    /// persisted state.
    fn is_satisfied_by(&self, candidate: &P, ignore_version: bool) -> bool;
}

/// Provides the ambient state and oracles the driver needs beyond the package pool itself:
/// the local package cache, the ordered sync databases, the assume-installed list, and the
/// `should_ignore` and `depcmp_provides` oracles.
pub trait ResolverHandle {
    /// The package type this handle's catalogues hold.
    type Package: ResolverPackage;

    /// Returns the currently-installed package cache.
    fn local_packages(&self) -> &[Self::Package];

    /// Returns the ordered sequence of sync (remote) package catalogues.
    fn sync_databases(&self) -> &[Vec<Self::Package>];

    /// Returns whether a dependency expression is already satisfied by the assume-installed
    /// list (the `depcmp_provides` oracle), short-circuiting graph construction for it.
    fn provides_satisfies(&self, dep: &<Self::Package as ResolverPackage>::Dependency) -> bool;

    /// Returns whether `pkg` should be excluded from the sync-database portion of the pool
    /// (e.g. due to an `IgnorePkg`-style configuration directive).
    fn should_ignore(&self, pkg: &Self::Package) -> bool;
}

/// Returns the first package in `list` whose name equals `name`, mirroring the `pkg_find` oracle
/// used throughout pool assembly to test add/remove membership.
pub fn find_by_name<'a, P: Named>(list: &'a [P], name: &str) -> Option<&'a P> {
    list.iter().find(|pkg| pkg.name() == name)
}
