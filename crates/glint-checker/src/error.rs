//! Structured checker errors. No `Display` impl and no message
//! templates: every variant carries the kind, span, and referenced types
//! needed for an embedder to render its own diagnostic text.

use glint_common::{Atom, Span};
use glint_solver::{MonoType, TypeVar, UnifyError};

#[derive(Clone, Debug, PartialEq)]
pub enum CheckError {
    UnknownSymbol {
        name: Atom,
        span: Span,
    },
    AssignToImmutable {
        name: Atom,
        span: Span,
    },
    TypeMismatch {
        expected: MonoType,
        found: MonoType,
        span: Span,
    },
    ArityMismatch {
        expected: usize,
        found: usize,
        span: Span,
    },
    InfiniteType {
        var: TypeVar,
        ty: MonoType,
        span: Span,
    },
    RecursiveValue {
        name: Atom,
    },
    /// Surfaced by the embedder, not by this workspace's core: raised
    /// when a core-emitted type has no WebAssembly representation. The
    /// variant exists here so embedders share one error vocabulary with
    /// the checker.
    UnsupportedReturnType {
        ty: MonoType,
    },
    UnusedForeignImport {
        module: Atom,
        name: Atom,
        span: Span,
    },
}

impl From<UnifyError> for CheckError {
    fn from(err: UnifyError) -> Self {
        match err {
            UnifyError::TypeMismatch { expected, found, span } => {
                CheckError::TypeMismatch { expected, found, span }
            }
            UnifyError::ArityMismatch { expected, found, span } => {
                CheckError::ArityMismatch { expected, found, span }
            }
            UnifyError::InfiniteType { var, ty, span } => CheckError::InfiniteType { var, ty, span },
        }
    }
}
