//! Untyped and typed expression trees.
//!
//! The untyped shape is what an external parser would hand to `infer`;
//! since parsing is out of scope here, tests build these trees by hand.
//! The typed shape mirrors it field-for-field, with every node carrying
//! a resolved [`MonoType`] and every bound name carrying a `global` flag.

use glint_common::{Atom, Span};
use glint_solver::MonoType;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOpKind {
    Plus,
    Minus,
    Times,
    Slash,
    Caret,
    Percent,
    EqualEqual,
    Greater,
    Less,
}

impl BinaryOpKind {
    /// Comparison operators always produce `bool`, regardless of the
    /// shared operand type.
    #[must_use]
    pub fn is_comparison(self) -> bool {
        matches!(self, Self::EqualEqual | Self::Greater | Self::Less)
    }
}

/// A function parameter, with its optional syntactic ground-type
/// annotation.
#[derive(Clone, Debug)]
pub struct Parameter {
    pub name: Atom,
    pub declared_type: Option<glint_common::GroundTypeName>,
}

#[derive(Clone, Debug)]
pub struct UntypedBranchArm {
    pub condition: UntypedExpr,
    pub body: UntypedExpr,
}

#[derive(Clone, Debug)]
pub enum UntypedExpr {
    Int {
        text: Atom,
        span: Span,
    },
    Float {
        text: Atom,
        span: Span,
    },
    Bool {
        value: bool,
        span: Span,
    },
    String {
        text: Atom,
        span: Span,
    },
    Symbol {
        name: Atom,
        span: Span,
    },
    Define {
        name: Atom,
        value: Box<UntypedExpr>,
        mutable: bool,
        span: Span,
    },
    Drop {
        value: Box<UntypedExpr>,
        span: Span,
    },
    PlusEqual {
        name: Atom,
        value: Box<UntypedExpr>,
        span: Span,
    },
    TimesEqual {
        name: Atom,
        value: Box<UntypedExpr>,
        span: Span,
    },
    Function {
        parameters: SmallVec<[Parameter; 4]>,
        return_type: Option<glint_common::GroundTypeName>,
        body: Box<UntypedExpr>,
        span: Span,
    },
    BinaryOp {
        kind: BinaryOpKind,
        left: Box<UntypedExpr>,
        right: Box<UntypedExpr>,
        span: Span,
    },
    Group {
        expressions: Vec<UntypedExpr>,
        span: Span,
    },
    Block {
        expressions: Vec<UntypedExpr>,
        span: Span,
    },
    Branch {
        arms: Vec<UntypedBranchArm>,
        else_body: Box<UntypedExpr>,
        span: Span,
    },
    Call {
        function: Box<UntypedExpr>,
        arguments: Vec<UntypedExpr>,
        span: Span,
    },
    Intrinsic {
        name: Atom,
        arguments: Vec<UntypedExpr>,
        span: Span,
    },
    ForeignImport {
        module: Atom,
        name: Atom,
        span: Span,
    },
    ForeignExport {
        name: Atom,
        value: Box<UntypedExpr>,
        span: Span,
    },
    Convert {
        value: Box<UntypedExpr>,
        span: Span,
    },
    Undefined {
        span: Span,
    },
}

impl UntypedExpr {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Int { span, .. }
            | Self::Float { span, .. }
            | Self::Bool { span, .. }
            | Self::String { span, .. }
            | Self::Symbol { span, .. }
            | Self::Define { span, .. }
            | Self::Drop { span, .. }
            | Self::PlusEqual { span, .. }
            | Self::TimesEqual { span, .. }
            | Self::Function { span, .. }
            | Self::BinaryOp { span, .. }
            | Self::Group { span, .. }
            | Self::Block { span, .. }
            | Self::Branch { span, .. }
            | Self::Call { span, .. }
            | Self::Intrinsic { span, .. }
            | Self::ForeignImport { span, .. }
            | Self::ForeignExport { span, .. }
            | Self::Convert { span, .. }
            | Self::Undefined { span } => *span,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TypedBranchArm {
    pub condition: TypedExpr,
    pub body: TypedExpr,
}

#[derive(Clone, Debug)]
pub enum TypedExpr {
    Int {
        text: Atom,
        ty: MonoType,
        span: Span,
    },
    Float {
        text: Atom,
        ty: MonoType,
        span: Span,
    },
    Bool {
        value: bool,
        ty: MonoType,
        span: Span,
    },
    String {
        text: Atom,
        ty: MonoType,
        span: Span,
    },
    Symbol {
        name: Atom,
        global: bool,
        ty: MonoType,
        span: Span,
    },
    Define {
        name: Atom,
        value: Box<TypedExpr>,
        mutable: bool,
        global: bool,
        ty: MonoType,
        span: Span,
    },
    Drop {
        value: Box<TypedExpr>,
        ty: MonoType,
        span: Span,
    },
    PlusEqual {
        name: Atom,
        value: Box<TypedExpr>,
        ty: MonoType,
        span: Span,
    },
    TimesEqual {
        name: Atom,
        value: Box<TypedExpr>,
        ty: MonoType,
        span: Span,
    },
    Function {
        parameters: SmallVec<[Atom; 4]>,
        body: Box<TypedExpr>,
        ty: MonoType,
        span: Span,
    },
    BinaryOp {
        kind: BinaryOpKind,
        left: Box<TypedExpr>,
        right: Box<TypedExpr>,
        ty: MonoType,
        span: Span,
    },
    Group {
        expressions: Vec<TypedExpr>,
        ty: MonoType,
        span: Span,
    },
    Block {
        expressions: Vec<TypedExpr>,
        ty: MonoType,
        span: Span,
    },
    Branch {
        arms: Vec<TypedBranchArm>,
        else_body: Box<TypedExpr>,
        ty: MonoType,
        span: Span,
    },
    Call {
        function: Box<TypedExpr>,
        arguments: Vec<TypedExpr>,
        ty: MonoType,
        span: Span,
    },
    Intrinsic {
        name: Atom,
        arguments: Vec<TypedExpr>,
        ty: MonoType,
        span: Span,
    },
    ForeignImport {
        module: Atom,
        name: Atom,
        ty: MonoType,
        span: Span,
    },
    ForeignExport {
        name: Atom,
        value: Box<TypedExpr>,
        ty: MonoType,
        span: Span,
    },
    Convert {
        value: Box<TypedExpr>,
        ty: MonoType,
        span: Span,
    },
    Undefined {
        ty: MonoType,
        span: Span,
    },
}

impl TypedExpr {
    #[must_use]
    pub fn ty(&self) -> &MonoType {
        match self {
            Self::Int { ty, .. }
            | Self::Float { ty, .. }
            | Self::Bool { ty, .. }
            | Self::String { ty, .. }
            | Self::Symbol { ty, .. }
            | Self::Define { ty, .. }
            | Self::Drop { ty, .. }
            | Self::PlusEqual { ty, .. }
            | Self::TimesEqual { ty, .. }
            | Self::Function { ty, .. }
            | Self::BinaryOp { ty, .. }
            | Self::Group { ty, .. }
            | Self::Block { ty, .. }
            | Self::Branch { ty, .. }
            | Self::Call { ty, .. }
            | Self::Intrinsic { ty, .. }
            | Self::ForeignImport { ty, .. }
            | Self::ForeignExport { ty, .. }
            | Self::Convert { ty, .. }
            | Self::Undefined { ty, .. } => ty,
        }
    }

    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Int { span, .. }
            | Self::Float { span, .. }
            | Self::Bool { span, .. }
            | Self::String { span, .. }
            | Self::Symbol { span, .. }
            | Self::Define { span, .. }
            | Self::Drop { span, .. }
            | Self::PlusEqual { span, .. }
            | Self::TimesEqual { span, .. }
            | Self::Function { span, .. }
            | Self::BinaryOp { span, .. }
            | Self::Group { span, .. }
            | Self::Block { span, .. }
            | Self::Branch { span, .. }
            | Self::Call { span, .. }
            | Self::Intrinsic { span, .. }
            | Self::ForeignImport { span, .. }
            | Self::ForeignExport { span, .. }
            | Self::Convert { span, .. }
            | Self::Undefined { span } => *span,
        }
    }
}
