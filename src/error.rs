//! Error handling for alpm-solve.

/// alpm-solve error.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A dependency of a package being resolved has no satisfiers in the pool.
    #[error("unable to satisfy dependency '{dependency}' of package '{dependent}'")]
    UnresolvableDependency {
        /// The name of the package that declared the unsatisfiable dependency.
        dependent: String,
        /// A display form of the unsatisfied dependency expression.
        dependency: String,
    },

    /// The backtracking conflict solver exhausted every branch for some conflict.
    #[error("unable to resolve conflict between '{0}' and '{1}'")]
    UnresolvableConflict(String, String),

    /// The optional backtrack budget was exhausted before a solution was found.
    ///
    /// Distinct from [`Error::UnresolvableConflict`] so that callers can tell "no solution
    /// exists" apart from "search was cut short".
    #[error("exhausted the backtracking budget before finding a solution")]
    BudgetExhausted,
}
