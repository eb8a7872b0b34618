//! Resolution flags.

bitflags::bitflags! {
    /// Behavioral flags accepted by [`resolve_dependencies_thorough`](crate::resolve_dependencies_thorough).
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct ResolverFlags: u32 {
        /// Treat every dependency expression as if it had no version constraint.
        ///
        /// Applies only to the [`DependencyExpr::is_satisfied_by`](crate::DependencyExpr::is_satisfied_by)
        /// calls made while enumerating satisfiers; conflict-expression matching always uses exact
        /// version semantics regardless of this flag.
        const IGNORE_DEPENDENCY_VERSION = 1 << 0;
    }
}
