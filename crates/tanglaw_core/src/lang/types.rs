//! Builtin data types and the literal-compatibility policy used by the parser.
//!
//! TanglawPL has no type checker. The parser performs exactly one shallow static check: when a declaration is
//! initialised with a literal, the literal's kind must be compatible with the declared data type. That policy lives
//! here so it has one definition.
//!
//! ## Examples
//! ```rust
//! use tanglaw_core::lang::types::{self, DataTypeId, LiteralKind};
//!
//! assert_eq!(types::from_str("double"), Some(DataTypeId::Double));
//! assert!(types::accepts(DataTypeId::Double, LiteralKind::Integer));
//! assert!(!types::accepts(DataTypeId::Int, LiteralKind::Character));
//! ```

/// Stable identifier for every builtin data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataTypeId {
    Int,
    String,
    Char,
    Boolean,
    Float,
    Double,
    Long,
    Short,
    Void,
    Byte,
}

/// Broad value family of a data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    Integral,
    Floating,
    Text,
    Character,
    Boolean,
    Void,
}

/// Kind of a literal as the lexer produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Integer,
    Real,
    String,
    Character,
    Boolean,
}

impl LiteralKind {
    /// Spelling used in diagnostics (matches the token category name).
    pub fn as_str(self) -> &'static str {
        match self {
            LiteralKind::Integer => "INTEGER",
            LiteralKind::Real => "REAL_NUMBER",
            LiteralKind::String => "STRING_LITERAL",
            LiteralKind::Character => "CHARACTER_LITERAL",
            LiteralKind::Boolean => "BOOLEAN",
        }
    }
}

/// Metadata for a data type.
#[derive(Debug, Clone, Copy)]
pub struct DataTypeInfo {
    pub id: DataTypeId,
    pub canonical: &'static str,
    pub family: TypeFamily,
}

/// Registry of all builtin data types.
pub const DATA_TYPES: &[DataTypeInfo] = &[
    info(DataTypeId::Int, "int", TypeFamily::Integral),
    info(DataTypeId::String, "String", TypeFamily::Text),
    info(DataTypeId::Char, "char", TypeFamily::Character),
    info(DataTypeId::Boolean, "boolean", TypeFamily::Boolean),
    info(DataTypeId::Float, "float", TypeFamily::Floating),
    info(DataTypeId::Double, "double", TypeFamily::Floating),
    info(DataTypeId::Long, "long", TypeFamily::Integral),
    info(DataTypeId::Short, "short", TypeFamily::Integral),
    info(DataTypeId::Void, "void", TypeFamily::Void),
    info(DataTypeId::Byte, "byte", TypeFamily::Integral),
];

/// Return the full metadata entry for a data type.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: DataTypeId) -> &'static DataTypeInfo {
    DATA_TYPES.iter().find(|t| t.id == id).expect("data type info missing")
}

/// Canonical spelling.
pub fn as_str(id: DataTypeId) -> &'static str {
    info_for(id).canonical
}

/// Value family.
pub fn family(id: DataTypeId) -> TypeFamily {
    info_for(id).family
}

/// Lookup by spelling (case-sensitive: `String` is a type, `string` is not).
pub fn from_str(s: &str) -> Option<DataTypeId> {
    DATA_TYPES.iter().find(|t| t.canonical == s).map(|t| t.id)
}

/// Whether a literal of kind `literal` may initialise a variable declared as `declared`.
///
/// ## Notes
/// - Integral types accept integer literals only.
/// - Floating types accept integer and real literals (widening).
/// - `void` accepts nothing.
pub fn accepts(declared: DataTypeId, literal: LiteralKind) -> bool {
    match family(declared) {
        TypeFamily::Integral => literal == LiteralKind::Integer,
        TypeFamily::Floating => matches!(literal, LiteralKind::Integer | LiteralKind::Real),
        TypeFamily::Text => literal == LiteralKind::String,
        TypeFamily::Character => literal == LiteralKind::Character,
        TypeFamily::Boolean => literal == LiteralKind::Boolean,
        TypeFamily::Void => false,
    }
}

impl std::fmt::Display for DataTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}

impl std::fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn info(id: DataTypeId, canonical: &'static str, family: TypeFamily) -> DataTypeInfo {
    DataTypeInfo { id, canonical, family }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_rejects_real() {
        for ty in [DataTypeId::Int, DataTypeId::Long, DataTypeId::Short, DataTypeId::Byte] {
            assert!(accepts(ty, LiteralKind::Integer));
            assert!(!accepts(ty, LiteralKind::Real));
            assert!(!accepts(ty, LiteralKind::Character));
        }
    }

    #[test]
    fn test_floating_widens_integer() {
        assert!(accepts(DataTypeId::Float, LiteralKind::Integer));
        assert!(accepts(DataTypeId::Float, LiteralKind::Real));
        assert!(!accepts(DataTypeId::Float, LiteralKind::String));
    }

    #[test]
    fn test_void_accepts_nothing() {
        for lit in [
            LiteralKind::Integer,
            LiteralKind::Real,
            LiteralKind::String,
            LiteralKind::Character,
            LiteralKind::Boolean,
        ] {
            assert!(!accepts(DataTypeId::Void, lit));
        }
    }
}
