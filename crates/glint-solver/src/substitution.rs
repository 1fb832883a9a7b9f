//! The idempotent mapping from type variables to monotypes produced by
//! the solver.

use crate::types::{MonoType, TypeVar};
use rustc_hash::FxHashMap;

/// Monotonic: once a variable is bound to a type it stays bound for the
/// lifetime of the substitution. The final substitution exposed to
/// consumers is idempotent: applying it twice yields the same result.
#[derive(Default)]
pub struct Substitution {
    bindings: FxHashMap<TypeVar, MonoType>,
}

impl Substitution {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `var` to `ty`. Does nothing if `var` is already bound,
    /// preserving the monotonic invariant; callers only ever reach this
    /// with an unbound representative (see `crate::unify`).
    pub fn bind(&mut self, var: TypeVar, ty: MonoType) {
        self.bindings.entry(var).or_insert(ty);
    }

    #[must_use]
    pub fn is_bound(&self, var: TypeVar) -> bool {
        self.bindings.contains_key(&var)
    }

    /// Follows a chain of variable bindings until it reaches a ground
    /// type, a function, a module, or an unbound variable.
    #[must_use]
    pub fn resolve(&self, ty: &MonoType) -> MonoType {
        let mut current = ty.clone();
        while let MonoType::TypeVar(var) = current {
            match self.bindings.get(&var) {
                Some(next) => current = next.clone(),
                None => return MonoType::TypeVar(var),
            }
        }
        current
    }

    /// Resolves `ty` and recursively applies the substitution to every
    /// nested type, including function parameters and return types.
    /// Idempotent: `apply(&apply(ty))` equals `apply(ty)`.
    #[must_use]
    pub fn apply(&self, ty: &MonoType) -> MonoType {
        match self.resolve(ty) {
            MonoType::Function {
                parameters,
                return_type,
            } => MonoType::Function {
                parameters: parameters.iter().map(|p| self.apply(p)).collect(),
                return_type: Box::new(self.apply(&return_type)),
            },
            resolved => resolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_common::GroundTypeName;

    #[test]
    fn resolve_follows_chains_to_a_ground_type() {
        let mut subst = Substitution::new();
        let a = TypeVar(0);
        let b = TypeVar(1);
        subst.bind(a, MonoType::TypeVar(b));
        subst.bind(b, MonoType::Ground(GroundTypeName::I32));
        assert_eq!(
            subst.resolve(&MonoType::TypeVar(a)),
            MonoType::Ground(GroundTypeName::I32)
        );
    }

    #[test]
    fn resolve_of_unbound_var_returns_itself() {
        let subst = Substitution::new();
        let a = TypeVar(0);
        assert_eq!(subst.resolve(&MonoType::TypeVar(a)), MonoType::TypeVar(a));
    }

    #[test]
    fn bind_does_not_overwrite_an_existing_binding() {
        let mut subst = Substitution::new();
        let a = TypeVar(0);
        subst.bind(a, MonoType::Ground(GroundTypeName::I32));
        subst.bind(a, MonoType::Ground(GroundTypeName::F64));
        assert_eq!(
            subst.resolve(&MonoType::TypeVar(a)),
            MonoType::Ground(GroundTypeName::I32)
        );
    }

    #[test]
    fn apply_is_idempotent_on_nested_function_types() {
        let mut subst = Substitution::new();
        let a = TypeVar(0);
        subst.bind(a, MonoType::Ground(GroundTypeName::Bool));
        let ty = MonoType::function([MonoType::TypeVar(a)], MonoType::TypeVar(a));
        let once = subst.apply(&ty);
        let twice = subst.apply(&once);
        assert_eq!(once, twice);
    }
}
