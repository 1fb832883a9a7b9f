//! Unification and the top-level solve loop.

use crate::constraints::{Constraints, NumericOrigin};
use crate::substitution::Substitution;
use crate::types::{MonoType, TypeVar};
use glint_common::{GroundTypeName, Span};

/// A unification failure. Carries only structured data (kind, span,
/// referenced types) rather than a rendered message — formatting is an
/// embedder concern.
#[derive(Clone, Debug, PartialEq)]
pub enum UnifyError {
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
}

/// Resolves `a` and `b` through `subst` and unifies them, binding
/// variables and recursing structurally into function types.
pub fn unify(a: &MonoType, b: &MonoType, subst: &mut Substitution, span: Span) -> Result<(), UnifyError> {
    let a = subst.resolve(a);
    let b = subst.resolve(b);

    match (&a, &b) {
        (MonoType::TypeVar(v1), MonoType::TypeVar(v2)) if v1 == v2 => Ok(()),
        (MonoType::TypeVar(v), other) | (other, MonoType::TypeVar(v)) => bind(*v, other.clone(), subst, span),
        (MonoType::Ground(g1), MonoType::Ground(g2)) if g1 == g2 => Ok(()),
        (MonoType::Module, MonoType::Module) => Ok(()),
        (
            MonoType::Function {
                parameters: p1,
                return_type: r1,
            },
            MonoType::Function {
                parameters: p2,
                return_type: r2,
            },
        ) => {
            if p1.len() != p2.len() {
                return Err(UnifyError::ArityMismatch {
                    expected: p1.len(),
                    found: p2.len(),
                    span,
                });
            }
            for (x, y) in p1.iter().zip(p2.iter()) {
                unify(x, y, subst, span)?;
            }
            unify(r1, r2, subst, span)
        }
        _ => Err(UnifyError::TypeMismatch {
            expected: a.clone(),
            found: b.clone(),
            span,
        }),
    }
}

fn bind(var: TypeVar, ty: MonoType, subst: &mut Substitution, span: Span) -> Result<(), UnifyError> {
    if let MonoType::TypeVar(other) = ty {
        if other == var {
            return Ok(());
        }
    }
    if occurs(var, &ty, subst) {
        return Err(UnifyError::InfiniteType { var, ty, span });
    }
    subst.bind(var, ty);
    Ok(())
}

fn occurs(var: TypeVar, ty: &MonoType, subst: &Substitution) -> bool {
    match subst.resolve(ty) {
        MonoType::TypeVar(other) => other == var,
        MonoType::Function {
            parameters,
            return_type,
        } => parameters.iter().any(|p| occurs(var, p, subst)) || occurs(var, &return_type, subst),
        MonoType::Ground(_) | MonoType::Module => false,
    }
}

/// Processes every constraint, accumulating unification failures rather
/// than stopping at the first one, then runs the numeric-literal
/// defaulting pass in literal-site order.
#[tracing::instrument(skip(constraints))]
pub fn solve(constraints: &Constraints) -> (Substitution, Vec<UnifyError>) {
    let mut subst = Substitution::new();
    let mut errors = Vec::new();

    for constraint in constraints.items() {
        if let Err(err) = unify(&constraint.left, &constraint.right, &mut subst, constraint.span) {
            errors.push(err);
        }
    }

    apply_defaulting(constraints.numeric_origins(), &mut subst);
    tracing::debug!(errors = errors.len(), "solved constraints");
    (subst, errors)
}

/// Defaults any numeric type variable still free after solving to `i32`
/// (int origin) or `f64` (float origin), in literal-site order. Only the
/// final representative of a variable chain is bound, since earlier
/// links in the chain are already bound to something else.
fn apply_defaulting(numeric_origins: &[(TypeVar, NumericOrigin)], subst: &mut Substitution) {
    for (var, origin) in numeric_origins {
        if let MonoType::TypeVar(free_var) = subst.resolve(&MonoType::TypeVar(*var)) {
            let ground = match origin {
                NumericOrigin::Int => GroundTypeName::I32,
                NumericOrigin::Float => GroundTypeName::F64,
            };
            subst.bind(free_var, MonoType::Ground(ground));
        }
    }
}
