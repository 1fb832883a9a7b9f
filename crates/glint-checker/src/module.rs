//! The module: the per-compilation-job container the driver walks, plus
//! the driver itself.

use crate::ast::{TypedBranchArm, TypedExpr, UntypedExpr};
use crate::builtins::Builtins;
use crate::error::CheckError;
use crate::infer::{InferCtx, infer};
use crate::scope::Scope;
use glint_common::{Atom, CheckerOptions, Interner};
use glint_solver::{Constraints, MonoType, Substitution};
use rustc_hash::FxHashMap;

/// `{order, untyped, typed, scope, foreign_exports, constraints,
/// builtins}`. Assembled once from parser output; `scope` is populated
/// lazily as definitions are inferred.
pub struct Module {
    /// Topological sort of reference dependencies among top-level names.
    /// Kept for data-model fidelity; the driver itself does not need to
    /// walk it, since `infer` pulls in dependencies on demand.
    pub order: Vec<Atom>,
    pub untyped: FxHashMap<Atom, UntypedExpr>,
    pub typed: FxHashMap<Atom, TypedExpr>,
    pub scope: Scope,
    pub foreign_exports: Vec<Atom>,
    pub constraints: Constraints,
    pub builtins: Builtins,
    pub interner: Interner,
}

impl Module {
    #[must_use]
    pub fn new(
        mut interner: Interner,
        order: Vec<Atom>,
        untyped: FxHashMap<Atom, UntypedExpr>,
        foreign_exports: Vec<Atom>,
    ) -> Self {
        let builtins = Builtins::new(&mut interner);
        Self {
            order,
            untyped,
            typed: FxHashMap::default(),
            scope: Scope::new(),
            foreign_exports,
            constraints: Constraints::new(),
            builtins,
            interner,
        }
    }
}

/// Runs inference over every declared export (or the implicit `start`
/// definition when none are declared), solves the resulting constraints,
/// applies the substitution to every typed node, and optionally reports
/// unused foreign imports. Returns every structured error accumulated
/// along the way.
#[tracing::instrument(skip(module, options))]
pub fn check_module(module: &mut Module, options: &CheckerOptions) -> Vec<CheckError> {
    let mut ctx = InferCtx::new();

    let seeds: Vec<Atom> = if module.foreign_exports.is_empty() {
        let start = module.interner.store("start");
        vec![start]
    } else {
        module.foreign_exports.clone()
    };

    for name in seeds {
        infer(module, &mut ctx, name);
    }

    let (subst, unify_errors) = glint_solver::solve(&module.constraints);

    let names: Vec<Atom> = module.typed.keys().copied().collect();
    for name in names {
        if let Some(expr) = module.typed.remove(&name) {
            module.typed.insert(name, apply_substitution(&expr, &subst));
        }
    }

    let mut errors = ctx.errors;
    errors.extend(unify_errors.into_iter().map(CheckError::from));

    if options.report_unused_foreign_imports {
        let mut imports = Vec::new();
        for expr in module.typed.values() {
            collect_foreign_imports(expr, &mut imports);
        }
        for (module_name, name, span, ty) in imports {
            if matches!(ty, MonoType::TypeVar(_)) {
                errors.push(CheckError::UnusedForeignImport {
                    module: module_name,
                    name,
                    span,
                });
            }
        }
    }

    tracing::debug!(errors = errors.len(), "checked module");
    errors
}

fn apply_substitution(expr: &TypedExpr, subst: &Substitution) -> TypedExpr {
    match expr {
        TypedExpr::Int { text, ty, span } => TypedExpr::Int {
            text: *text,
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::Float { text, ty, span } => TypedExpr::Float {
            text: *text,
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::Bool { value, ty, span } => TypedExpr::Bool {
            value: *value,
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::String { text, ty, span } => TypedExpr::String {
            text: *text,
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::Symbol { name, global, ty, span } => TypedExpr::Symbol {
            name: *name,
            global: *global,
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::Define {
            name,
            value,
            mutable,
            global,
            ty,
            span,
        } => TypedExpr::Define {
            name: *name,
            value: Box::new(apply_substitution(value, subst)),
            mutable: *mutable,
            global: *global,
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::Drop { value, ty, span } => TypedExpr::Drop {
            value: Box::new(apply_substitution(value, subst)),
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::PlusEqual { name, value, ty, span } => TypedExpr::PlusEqual {
            name: *name,
            value: Box::new(apply_substitution(value, subst)),
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::TimesEqual { name, value, ty, span } => TypedExpr::TimesEqual {
            name: *name,
            value: Box::new(apply_substitution(value, subst)),
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::Function {
            parameters,
            body,
            ty,
            span,
        } => TypedExpr::Function {
            parameters: parameters.clone(),
            body: Box::new(apply_substitution(body, subst)),
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::BinaryOp {
            kind,
            left,
            right,
            ty,
            span,
        } => TypedExpr::BinaryOp {
            kind: *kind,
            left: Box::new(apply_substitution(left, subst)),
            right: Box::new(apply_substitution(right, subst)),
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::Group { expressions, ty, span } => TypedExpr::Group {
            expressions: expressions.iter().map(|e| apply_substitution(e, subst)).collect(),
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::Block { expressions, ty, span } => TypedExpr::Block {
            expressions: expressions.iter().map(|e| apply_substitution(e, subst)).collect(),
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::Branch {
            arms,
            else_body,
            ty,
            span,
        } => TypedExpr::Branch {
            arms: arms
                .iter()
                .map(|arm| TypedBranchArm {
                    condition: apply_substitution(&arm.condition, subst),
                    body: apply_substitution(&arm.body, subst),
                })
                .collect(),
            else_body: Box::new(apply_substitution(else_body, subst)),
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::Call {
            function,
            arguments,
            ty,
            span,
        } => TypedExpr::Call {
            function: Box::new(apply_substitution(function, subst)),
            arguments: arguments.iter().map(|a| apply_substitution(a, subst)).collect(),
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::Intrinsic {
            name,
            arguments,
            ty,
            span,
        } => TypedExpr::Intrinsic {
            name: *name,
            arguments: arguments.iter().map(|a| apply_substitution(a, subst)).collect(),
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::ForeignImport { module, name, ty, span } => TypedExpr::ForeignImport {
            module: *module,
            name: *name,
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::ForeignExport { name, value, ty, span } => TypedExpr::ForeignExport {
            name: *name,
            value: Box::new(apply_substitution(value, subst)),
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::Convert { value, ty, span } => TypedExpr::Convert {
            value: Box::new(apply_substitution(value, subst)),
            ty: subst.apply(ty),
            span: *span,
        },
        TypedExpr::Undefined { ty, span } => TypedExpr::Undefined {
            ty: subst.apply(ty),
            span: *span,
        },
    }
}

fn collect_foreign_imports(expr: &TypedExpr, out: &mut Vec<(Atom, Atom, glint_common::Span, MonoType)>) {
    match expr {
        TypedExpr::ForeignImport { module, name, ty, span } => {
            out.push((*module, *name, *span, ty.clone()));
        }
        TypedExpr::Define { value, .. }
        | TypedExpr::Drop { value, .. }
        | TypedExpr::PlusEqual { value, .. }
        | TypedExpr::TimesEqual { value, .. }
        | TypedExpr::ForeignExport { value, .. }
        | TypedExpr::Convert { value, .. } => collect_foreign_imports(value, out),
        TypedExpr::Function { body, .. } => collect_foreign_imports(body, out),
        TypedExpr::BinaryOp { left, right, .. } => {
            collect_foreign_imports(left, out);
            collect_foreign_imports(right, out);
        }
        TypedExpr::Group { expressions, .. } | TypedExpr::Block { expressions, .. } => {
            for e in expressions {
                collect_foreign_imports(e, out);
            }
        }
        TypedExpr::Branch { arms, else_body, .. } => {
            for arm in arms {
                collect_foreign_imports(&arm.condition, out);
                collect_foreign_imports(&arm.body, out);
            }
            collect_foreign_imports(else_body, out);
        }
        TypedExpr::Call { function, arguments, .. } => {
            collect_foreign_imports(function, out);
            for a in arguments {
                collect_foreign_imports(a, out);
            }
        }
        TypedExpr::Intrinsic { arguments, .. } => {
            for a in arguments {
                collect_foreign_imports(a, out);
            }
        }
        TypedExpr::Int { .. }
        | TypedExpr::Float { .. }
        | TypedExpr::Bool { .. }
        | TypedExpr::String { .. }
        | TypedExpr::Symbol { .. }
        | TypedExpr::Undefined { .. } => {}
    }
}
