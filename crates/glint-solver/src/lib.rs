//! Type representation, constraint accumulation, and unification for the
//! glint compiler front end.

pub mod constraints;
pub mod substitution;
pub mod types;
pub mod unify;

pub use constraints::{Constraint, Constraints, NumericOrigin};
pub use substitution::Substitution;
pub use types::{MonoType, TypeVar};
pub use unify::{UnifyError, solve, unify};
