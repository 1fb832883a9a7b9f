//! The builtins table supplied to the checker at init: keyword handles,
//! intrinsic signatures, and (implicitly, via `GroundTypeName`) the
//! ground type vocabulary.

use glint_common::{GroundTypeName, Interner, Keywords};
use glint_solver::MonoType;
use rustc_hash::FxHashMap;

/// Real WebAssembly numeric-conversion instruction names, since this
/// workspace has no original source to recover concrete intrinsic
/// signatures from: these are the handful of primitive numeric
/// conversions a WebAssembly-targeting core language needs regardless of
/// surface syntax.
pub const INTRINSIC_NAMES: [(&str, GroundTypeName, GroundTypeName); 6] = [
    ("i32_trunc_f64", GroundTypeName::F64, GroundTypeName::I32),
    ("f64_convert_i32", GroundTypeName::I32, GroundTypeName::F64),
    ("i32_wrap_i64", GroundTypeName::I64, GroundTypeName::I32),
    ("i64_extend_i32", GroundTypeName::I32, GroundTypeName::I64),
    ("f32_demote_f64", GroundTypeName::F64, GroundTypeName::F32),
    ("f64_promote_f32", GroundTypeName::F32, GroundTypeName::F64),
];

pub struct Builtins {
    pub keywords: Keywords,
    intrinsics: FxHashMap<glint_common::Atom, MonoType>,
}

impl Builtins {
    #[must_use]
    pub fn new(interner: &mut Interner) -> Self {
        let keywords = Keywords::interned(interner);
        let mut intrinsics = FxHashMap::default();
        for (name, param, ret) in INTRINSIC_NAMES {
            let handle = interner.store(name);
            intrinsics.insert(
                handle,
                MonoType::function([MonoType::Ground(param)], MonoType::Ground(ret)),
            );
        }
        Self {
            keywords,
            intrinsics,
        }
    }

    /// Looks up an intrinsic's function signature by its interned name
    /// handle.
    #[must_use]
    pub fn intrinsic_signature(&self, handle: glint_common::Atom) -> Option<&MonoType> {
        self.intrinsics.get(&handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_intrinsic_name_resolves_to_a_function_type() {
        let mut interner = Interner::new();
        let builtins = Builtins::new(&mut interner);
        for (name, ..) in INTRINSIC_NAMES {
            let handle = interner.store(name);
            assert!(matches!(
                builtins.intrinsic_signature(handle),
                Some(MonoType::Function { .. })
            ));
        }
    }

    #[test]
    fn unknown_name_has_no_intrinsic_signature() {
        let mut interner = Interner::new();
        let builtins = Builtins::new(&mut interner);
        let handle = interner.store("not_an_intrinsic");
        assert!(builtins.intrinsic_signature(handle).is_none());
    }
}
