//! The inference engine: walks an untyped tree, produces a typed tree,
//! emits constraints, and resolves names against the module's scope.

use crate::ast::{BinaryOpKind, TypedBranchArm, TypedExpr, UntypedExpr};
use crate::error::CheckError;
use crate::module::Module;
use crate::scope::Binding;
use glint_common::Atom;
use glint_solver::{MonoType, NumericOrigin};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Per-run inference state: the accumulated errors and the set of
/// top-level names currently being elaborated, used to detect
/// non-function cyclic top-level definitions.
#[derive(Default)]
pub struct InferCtx {
    pub errors: Vec<CheckError>,
    in_progress: FxHashSet<Atom>,
}

impl InferCtx {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Infers the top-level definition `name`, memoizing into
/// `module.typed`. Returns `None` if this definition's inference failed
/// locally; the caller (the module driver, or a `Symbol` rule pulling in
/// a dependency on demand) should continue with the next name rather
/// than stopping.
#[tracing::instrument(skip(module, ctx))]
pub fn infer(module: &mut Module, ctx: &mut InferCtx, name: Atom) -> Option<()> {
    if module.typed.contains_key(&name) {
        return Some(());
    }

    let Some(value) = module.untyped.get(&name).cloned() else {
        return None;
    };

    ctx.in_progress.insert(name);
    let var = module.constraints.fresh();
    module.scope.insert(
        name,
        Binding {
            ty: MonoType::TypeVar(var),
            global: true,
            mutable: false,
        },
    );

    let result = infer_expr(module, ctx, &value);
    ctx.in_progress.remove(&name);

    let typed_value = result?;
    module
        .constraints
        .equate(MonoType::TypeVar(var), typed_value.ty().clone(), typed_value.span());
    module.typed.insert(name, typed_value);
    Some(())
}

fn infer_expr(module: &mut Module, ctx: &mut InferCtx, expr: &UntypedExpr) -> Option<TypedExpr> {
    match expr {
        UntypedExpr::Int { text, span } => {
            let var = module.constraints.fresh_numeric(NumericOrigin::Int);
            Some(TypedExpr::Int {
                text: *text,
                ty: MonoType::TypeVar(var),
                span: *span,
            })
        }
        UntypedExpr::Float { text, span } => {
            let var = module.constraints.fresh_numeric(NumericOrigin::Float);
            Some(TypedExpr::Float {
                text: *text,
                ty: MonoType::TypeVar(var),
                span: *span,
            })
        }
        UntypedExpr::Bool { value, span } => Some(TypedExpr::Bool {
            value: *value,
            ty: MonoType::Ground(glint_common::GroundTypeName::Bool),
            span: *span,
        }),
        UntypedExpr::String { text, span } => Some(TypedExpr::String {
            text: *text,
            ty: MonoType::Ground(glint_common::GroundTypeName::String),
            span: *span,
        }),
        UntypedExpr::Symbol { name, span } => infer_symbol(module, ctx, *name, *span),
        UntypedExpr::Define {
            name,
            value,
            mutable,
            span,
        } => {
            let typed_value = infer_expr(module, ctx, value)?;
            module.scope.insert(
                *name,
                Binding {
                    ty: typed_value.ty().clone(),
                    global: false,
                    mutable: *mutable,
                },
            );
            Some(TypedExpr::Define {
                name: *name,
                value: Box::new(typed_value),
                mutable: *mutable,
                global: false,
                ty: MonoType::Ground(glint_common::GroundTypeName::Void),
                span: *span,
            })
        }
        UntypedExpr::Drop { value, span } => {
            let typed_value = infer_expr(module, ctx, value)?;
            Some(TypedExpr::Drop {
                value: Box::new(typed_value),
                ty: MonoType::Ground(glint_common::GroundTypeName::Void),
                span: *span,
            })
        }
        UntypedExpr::PlusEqual { name, value, span } => infer_compound_assign(module, ctx, *name, value, *span, true),
        UntypedExpr::TimesEqual { name, value, span } => {
            infer_compound_assign(module, ctx, *name, value, *span, false)
        }
        UntypedExpr::Function {
            parameters,
            return_type,
            body,
            span,
        } => infer_function(module, ctx, parameters, *return_type, body, *span),
        UntypedExpr::BinaryOp { kind, left, right, span } => infer_binary_op(module, ctx, *kind, left, right, *span),
        UntypedExpr::Group { expressions, span } => {
            let typed = infer_sequence(module, ctx, expressions)?;
            let ty = typed
                .last()
                .map(|e| e.ty().clone())
                .unwrap_or(MonoType::Ground(glint_common::GroundTypeName::Void));
            Some(TypedExpr::Group {
                expressions: typed,
                ty,
                span: *span,
            })
        }
        UntypedExpr::Block { expressions, span } => {
            module.scope.push();
            let typed = infer_sequence(module, ctx, expressions);
            module.scope.pop();
            let typed = typed?;
            let ty = typed
                .last()
                .map(|e| e.ty().clone())
                .unwrap_or(MonoType::Ground(glint_common::GroundTypeName::Void));
            Some(TypedExpr::Block {
                expressions: typed,
                ty,
                span: *span,
            })
        }
        UntypedExpr::Branch { arms, else_body, span } => infer_branch(module, ctx, arms, else_body, *span),
        UntypedExpr::Call {
            function,
            arguments,
            span,
        } => infer_call(module, ctx, function, arguments, *span),
        UntypedExpr::Intrinsic { name, arguments, span } => infer_intrinsic(module, ctx, *name, arguments, *span),
        UntypedExpr::ForeignImport { module: modname, name, span } => Some(TypedExpr::ForeignImport {
            module: *modname,
            name: *name,
            ty: MonoType::TypeVar(module.constraints.fresh()),
            span: *span,
        }),
        UntypedExpr::ForeignExport { name, value, span } => {
            let typed_value = infer_expr(module, ctx, value)?;
            Some(TypedExpr::ForeignExport {
                name: *name,
                value: Box::new(typed_value),
                ty: MonoType::Ground(glint_common::GroundTypeName::Void),
                span: *span,
            })
        }
        UntypedExpr::Convert { value, span } => {
            let typed_value = infer_expr(module, ctx, value)?;
            Some(TypedExpr::Convert {
                value: Box::new(typed_value),
                ty: MonoType::TypeVar(module.constraints.fresh()),
                span: *span,
            })
        }
        UntypedExpr::Undefined { span } => Some(TypedExpr::Undefined {
            ty: MonoType::TypeVar(module.constraints.fresh()),
            span: *span,
        }),
    }
}

fn infer_symbol(module: &mut Module, ctx: &mut InferCtx, name: Atom, span: glint_common::Span) -> Option<TypedExpr> {
    if module.scope.lookup(name).is_none() {
        if module.untyped.contains_key(&name) {
            infer(module, ctx, name)?;
        } else {
            ctx.errors.push(CheckError::UnknownSymbol { name, span });
            return None;
        }
    }

    if ctx.in_progress.contains(&name) && !matches!(module.untyped.get(&name), Some(UntypedExpr::Function { .. })) {
        ctx.errors.push(CheckError::RecursiveValue { name });
        return None;
    }

    let binding = module.scope.lookup(name).expect("just resolved above");
    Some(TypedExpr::Symbol {
        name,
        global: binding.global,
        ty: binding.ty.clone(),
        span,
    })
}

fn infer_compound_assign(
    module: &mut Module,
    ctx: &mut InferCtx,
    name: Atom,
    value: &UntypedExpr,
    span: glint_common::Span,
    is_plus: bool,
) -> Option<TypedExpr> {
    let Some(binding) = module.scope.lookup(name).cloned() else {
        ctx.errors.push(CheckError::UnknownSymbol { name, span });
        return None;
    };
    if !binding.mutable {
        ctx.errors.push(CheckError::AssignToImmutable { name, span });
        return None;
    }
    let typed_value = infer_expr(module, ctx, value)?;
    module
        .constraints
        .equate(binding.ty.clone(), typed_value.ty().clone(), span);
    let ty = MonoType::Ground(glint_common::GroundTypeName::Void);
    Some(if is_plus {
        TypedExpr::PlusEqual {
            name,
            value: Box::new(typed_value),
            ty,
            span,
        }
    } else {
        TypedExpr::TimesEqual {
            name,
            value: Box::new(typed_value),
            ty,
            span,
        }
    })
}

fn infer_function(
    module: &mut Module,
    ctx: &mut InferCtx,
    parameters: &[crate::ast::Parameter],
    return_type: Option<glint_common::GroundTypeName>,
    body: &UntypedExpr,
    span: glint_common::Span,
) -> Option<TypedExpr> {
    module.scope.push();

    let mut param_names = SmallVec::with_capacity(parameters.len());
    let mut param_types = Vec::with_capacity(parameters.len());
    for param in parameters {
        let var = module.constraints.fresh();
        if let Some(declared) = param.declared_type {
            module
                .constraints
                .equate(MonoType::TypeVar(var), MonoType::Ground(declared), span);
        }
        module.scope.insert(
            param.name,
            Binding {
                ty: MonoType::TypeVar(var),
                global: false,
                mutable: false,
            },
        );
        param_names.push(param.name);
        param_types.push(MonoType::TypeVar(var));
    }

    let body_typed = infer_expr(module, ctx, body);
    module.scope.pop();
    let body_typed = body_typed?;

    let ret_var = module.constraints.fresh();
    module
        .constraints
        .equate(MonoType::TypeVar(ret_var), body_typed.ty().clone(), span);
    if let Some(declared) = return_type {
        module
            .constraints
            .equate(MonoType::TypeVar(ret_var), MonoType::Ground(declared), span);
    }

    Some(TypedExpr::Function {
        parameters: param_names,
        body: Box::new(body_typed),
        ty: MonoType::function(param_types, MonoType::TypeVar(ret_var)),
        span,
    })
}

fn infer_binary_op(
    module: &mut Module,
    ctx: &mut InferCtx,
    kind: BinaryOpKind,
    left: &UntypedExpr,
    right: &UntypedExpr,
    span: glint_common::Span,
) -> Option<TypedExpr> {
    let left_typed = infer_expr(module, ctx, left)?;
    let right_typed = infer_expr(module, ctx, right)?;
    module
        .constraints
        .equate(left_typed.ty().clone(), right_typed.ty().clone(), span);
    let ty = if kind.is_comparison() {
        MonoType::Ground(glint_common::GroundTypeName::Bool)
    } else {
        left_typed.ty().clone()
    };
    Some(TypedExpr::BinaryOp {
        kind,
        left: Box::new(left_typed),
        right: Box::new(right_typed),
        ty,
        span,
    })
}

fn infer_sequence(module: &mut Module, ctx: &mut InferCtx, exprs: &[UntypedExpr]) -> Option<Vec<TypedExpr>> {
    let mut out = Vec::with_capacity(exprs.len());
    for expr in exprs {
        out.push(infer_expr(module, ctx, expr)?);
    }
    Some(out)
}

fn infer_branch(
    module: &mut Module,
    ctx: &mut InferCtx,
    arms: &[crate::ast::UntypedBranchArm],
    else_body: &UntypedExpr,
    span: glint_common::Span,
) -> Option<TypedExpr> {
    let result_var = module.constraints.fresh();
    let mut typed_arms = Vec::with_capacity(arms.len());
    for arm in arms {
        let condition = infer_expr(module, ctx, &arm.condition)?;
        module.constraints.equate(
            condition.ty().clone(),
            MonoType::Ground(glint_common::GroundTypeName::Bool),
            span,
        );
        let body = infer_expr(module, ctx, &arm.body)?;
        module
            .constraints
            .equate(body.ty().clone(), MonoType::TypeVar(result_var), span);
        typed_arms.push(TypedBranchArm { condition, body });
    }
    let typed_else = infer_expr(module, ctx, else_body)?;
    module
        .constraints
        .equate(typed_else.ty().clone(), MonoType::TypeVar(result_var), span);

    Some(TypedExpr::Branch {
        arms: typed_arms,
        else_body: Box::new(typed_else),
        ty: MonoType::TypeVar(result_var),
        span,
    })
}

fn infer_call(
    module: &mut Module,
    ctx: &mut InferCtx,
    function: &UntypedExpr,
    arguments: &[UntypedExpr],
    span: glint_common::Span,
) -> Option<TypedExpr> {
    let function_typed = infer_expr(module, ctx, function)?;
    let arguments_typed = infer_sequence(module, ctx, arguments)?;
    let ret_var = module.constraints.fresh();
    let synthetic = MonoType::function(
        arguments_typed.iter().map(|a| a.ty().clone()),
        MonoType::TypeVar(ret_var),
    );
    module.constraints.equate(function_typed.ty().clone(), synthetic, span);
    Some(TypedExpr::Call {
        function: Box::new(function_typed),
        arguments: arguments_typed,
        ty: MonoType::TypeVar(ret_var),
        span,
    })
}

fn infer_intrinsic(
    module: &mut Module,
    ctx: &mut InferCtx,
    name: Atom,
    arguments: &[UntypedExpr],
    span: glint_common::Span,
) -> Option<TypedExpr> {
    let Some(signature) = module.builtins.intrinsic_signature(name).cloned() else {
        ctx.errors.push(CheckError::UnknownSymbol { name, span });
        return None;
    };
    let arguments_typed = infer_sequence(module, ctx, arguments)?;
    let ret_var = module.constraints.fresh();
    let synthetic = MonoType::function(
        arguments_typed.iter().map(|a| a.ty().clone()),
        MonoType::TypeVar(ret_var),
    );
    module.constraints.equate(signature, synthetic, span);
    Some(TypedExpr::Intrinsic {
        name,
        arguments: arguments_typed,
        ty: MonoType::TypeVar(ret_var),
        span,
    })
}
