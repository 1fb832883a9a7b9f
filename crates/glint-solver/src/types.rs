//! The type algebra: ground types, inference variables, and functions.

use glint_common::GroundTypeName;
use smallvec::SmallVec;

/// An inference variable identity, minted monotonically by [`crate::constraints::Constraints`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeVar(pub u32);

/// A concrete type or an unresolved inference variable. No generalization
/// to polytypes occurs in this language — every binding has exactly one
/// monotype for its lifetime.
#[derive(Clone, Debug, PartialEq)]
pub enum MonoType {
    Ground(GroundTypeName),
    TypeVar(TypeVar),
    Function {
        parameters: SmallVec<[MonoType; 4]>,
        return_type: Box<MonoType>,
    },
    /// The type of a foreign-imported module handle.
    Module,
}

impl MonoType {
    #[must_use]
    pub fn function(parameters: impl IntoIterator<Item = MonoType>, return_type: MonoType) -> Self {
        MonoType::Function {
            parameters: parameters.into_iter().collect(),
            return_type: Box::new(return_type),
        }
    }
}
