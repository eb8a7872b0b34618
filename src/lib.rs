#![doc = include_str!("../README.md")]

pub mod conflict;
mod driver;
mod error;
mod flags;
pub mod graph;
mod reduce;
pub mod satisfier;
mod solver;
pub mod traits;

pub use driver::{resolve_dependencies_thorough, resolve_dependencies_thorough_with_budget};
pub use error::Error;
pub use flags::ResolverFlags;
pub use traits::{DependencyExpr, Named, Origin, ResolverHandle, ResolverPackage};
