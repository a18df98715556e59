//! Dense square linear systems `A x = b`.
//!
//! ┌ One-shot  : [`gaussian_elimination`] with partial pivoting
//! ├ Factored  : [`LuFactorization`] (`P A = L U`), reused across right-hand sides
//! ├ Refined   : [`refine`] iterative refinement on top of an LU factorization
//! └ Triangular: [`forward_substitution`], [`backward_substitution`]
//!
//! A pivot with `|p| <= pivot_tol · ||A||_∞` is treated as zero and the
//! matrix reported as [`LinearSystemError::Singular`].

pub mod config;
pub mod errors;
pub mod report;
pub(crate) mod validate;

pub mod substitution;
pub mod gaussian_elimination;
pub mod lu;
pub mod refinement;
pub mod condition;

pub use condition::condition_number_1;
pub use config::{PivotCfg, RefinementCfg};
pub use errors::LinearSystemError;
pub use gaussian_elimination::gaussian_elimination;
pub use lu::LuFactorization;
pub use refinement::refine;
pub use report::SolveReport;
pub use substitution::{backward_substitution, forward_substitution};
