//! Shared primitives for the glint compiler front end.
//!
//! This crate sits below the scanner, solver, and checker crates:
//! - String interning (`Atom`, `Interner`)
//! - Source positions and spans (`Position`, `Span`, `Spanned`)
//! - The ground type-name vocabulary (`GroundTypeName`)
//! - Reserved keyword atoms (`Keywords`)
//! - Checker configuration (`CheckerOptions`)

pub mod checker_options;
pub use checker_options::CheckerOptions;

pub mod ground;
pub use ground::GroundTypeName;

pub mod interner;
pub use interner::{Atom, Interner};

pub mod keywords;
pub use keywords::Keywords;

pub mod position;
pub use position::Position;

pub mod span;
pub use span::{Span, Spanned};
