pub mod ast;
pub use ast::{BinaryOpKind, Parameter, TypedBranchArm, TypedExpr, UntypedBranchArm, UntypedExpr};
pub mod builtins;
pub use builtins::Builtins;
pub mod error;
pub use error::CheckError;
pub mod infer;
pub use infer::{InferCtx, infer};
pub mod module;
pub use module::{Module, check_module};
pub mod scope;
pub use scope::{Binding, Scope};
