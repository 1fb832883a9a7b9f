//! The fixed vocabulary of ground (non-variable, non-function) types.

/// One of the seven ground types the language's type system knows about.
/// `MonoType::ground` in `glint-solver` carries one of these rather than
/// an interned name, so ground-type equality is a plain enum compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroundTypeName {
    Void,
    Bool,
    I32,
    I64,
    F32,
    F64,
    String,
}

impl GroundTypeName {
    /// The spelling used in the builtins table and in source text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Bool => "bool",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "string",
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_a_distinct_spelling() {
        let variants = [
            GroundTypeName::Void,
            GroundTypeName::Bool,
            GroundTypeName::I32,
            GroundTypeName::I64,
            GroundTypeName::F32,
            GroundTypeName::F64,
            GroundTypeName::String,
        ];
        for (i, a) in variants.iter().enumerate() {
            for b in &variants[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
