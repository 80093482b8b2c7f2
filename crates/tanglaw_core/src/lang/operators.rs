//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the metadata the lexer and parser need: the
//! operator class (arithmetic, relational, ...), binary precedence, associativity, and whether the operator may
//! appear in prefix position.
//!
//! ## Notes
//! - Each spelling belongs to exactly one class. The only context-dependent spellings are `+` and `-`, which the
//!   lexer reclassifies as [`OperatorClass::Unary`] when they do not follow a value.
//! - `precedence` is a relative ordering where higher binds tighter; `0` marks operators that never appear in
//!   binary position.
//!
//! ## Examples
//! ```rust
//! use tanglaw_core::lang::operators::{self, OperatorClass, OperatorId};
//!
//! assert_eq!(operators::from_str("<<="), Some(OperatorId::ShiftLeftAssign));
//! assert_eq!(operators::class(OperatorId::LessThan), OperatorClass::Relational);
//! assert!(operators::precedence(OperatorId::Multiply) > operators::precedence(OperatorId::Plus));
//! ```

/// Define how binary operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Operator group, as shown in token tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    Assignment,
    Arithmetic,
    Relational,
    Logical,
    Bitwise,
    Unary,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Exponent,

    // Relational
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    EqualTo,
    NotEqualTo,

    // Assignment
    Assign,
    PlusAssign,
    MinusAssign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
    AndAssign,
    XorAssign,
    ShiftLeftAssign,
    ShiftRightAssign,

    // Logical
    And,
    Or,
    Not,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    ShiftLeft,
    ShiftRight,

    // Unary-only
    Increment,
    Decrement,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub class: OperatorClass,
    pub precedence: u8,
    pub associativity: Associativity,
    /// Whether the operator may appear before its operand.
    pub prefix: bool,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", OperatorClass::Arithmetic, 90, Associativity::Left, true),
    op(OperatorId::Minus, "-", OperatorClass::Arithmetic, 90, Associativity::Left, true),
    op(OperatorId::Multiply, "*", OperatorClass::Arithmetic, 100, Associativity::Left, false),
    op(OperatorId::Divide, "/", OperatorClass::Arithmetic, 100, Associativity::Left, false),
    op(OperatorId::Modulo, "%", OperatorClass::Arithmetic, 100, Associativity::Left, false),
    op(OperatorId::Exponent, "**", OperatorClass::Arithmetic, 110, Associativity::Right, false),
    // Relational
    op(OperatorId::LessThan, "<", OperatorClass::Relational, 70, Associativity::Left, false),
    op(OperatorId::GreaterThan, ">", OperatorClass::Relational, 70, Associativity::Left, false),
    op(OperatorId::LessThanOrEqual, "<=", OperatorClass::Relational, 70, Associativity::Left, false),
    op(OperatorId::GreaterThanOrEqual, ">=", OperatorClass::Relational, 70, Associativity::Left, false),
    op(OperatorId::EqualTo, "==", OperatorClass::Relational, 60, Associativity::Left, false),
    op(OperatorId::NotEqualTo, "!=", OperatorClass::Relational, 60, Associativity::Left, false),
    // Assignment
    op(OperatorId::Assign, "=", OperatorClass::Assignment, 0, Associativity::Right, false),
    op(OperatorId::PlusAssign, "+=", OperatorClass::Assignment, 0, Associativity::Right, false),
    op(OperatorId::MinusAssign, "-=", OperatorClass::Assignment, 0, Associativity::Right, false),
    op(OperatorId::MultiplyAssign, "*=", OperatorClass::Assignment, 0, Associativity::Right, false),
    op(OperatorId::DivideAssign, "/=", OperatorClass::Assignment, 0, Associativity::Right, false),
    op(OperatorId::ModuloAssign, "%=", OperatorClass::Assignment, 0, Associativity::Right, false),
    op(OperatorId::AndAssign, "&=", OperatorClass::Assignment, 0, Associativity::Right, false),
    op(OperatorId::XorAssign, "^=", OperatorClass::Assignment, 0, Associativity::Right, false),
    op(OperatorId::ShiftLeftAssign, "<<=", OperatorClass::Assignment, 0, Associativity::Right, false),
    op(OperatorId::ShiftRightAssign, ">>=", OperatorClass::Assignment, 0, Associativity::Right, false),
    // Logical
    op(OperatorId::And, "&&", OperatorClass::Logical, 20, Associativity::Left, false),
    op(OperatorId::Or, "||", OperatorClass::Logical, 10, Associativity::Left, false),
    op(OperatorId::Not, "!", OperatorClass::Logical, 0, Associativity::Right, true),
    // Bitwise
    op(OperatorId::BitAnd, "&", OperatorClass::Bitwise, 50, Associativity::Left, false),
    op(OperatorId::BitOr, "|", OperatorClass::Bitwise, 30, Associativity::Left, false),
    op(OperatorId::BitXor, "^", OperatorClass::Bitwise, 40, Associativity::Left, false),
    op(OperatorId::BitNot, "~", OperatorClass::Bitwise, 0, Associativity::Right, true),
    op(OperatorId::ShiftLeft, "<<", OperatorClass::Bitwise, 80, Associativity::Left, false),
    op(OperatorId::ShiftRight, ">>", OperatorClass::Bitwise, 80, Associativity::Left, false),
    // Unary-only
    op(OperatorId::Increment, "++", OperatorClass::Unary, 0, Associativity::Right, true),
    op(OperatorId::Decrement, "--", OperatorClass::Unary, 0, Associativity::Right, true),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Return the spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the default class for an operator.
pub fn class(id: OperatorId) -> OperatorClass {
    info_for(id).class
}

/// Binary precedence of `id`, or `None` when it never appears between two operands.
pub fn precedence(id: OperatorId) -> Option<u8> {
    match info_for(id).precedence {
        0 => None,
        p => Some(p),
    }
}

/// Return the associativity for an operator.
pub fn associativity(id: OperatorId) -> Associativity {
    info_for(id).associativity
}

/// Return `true` if `id` may appear in prefix position.
pub fn is_prefix(id: OperatorId) -> bool {
    info_for(id).prefix
}

/// Resolve an operator spelling to its identifier.
///
/// ## Notes
/// - Matching is exact; `"< ="` is not `"<="`.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Return `true` if `candidate` is a multi-character operator spelling.
///
/// The lexer extends a symbol run one character at a time for as long as this holds (maximal munch).
pub fn is_compound(candidate: &str) -> bool {
    candidate.len() > 1 && from_str(candidate).is_some()
}

const fn op(
    id: OperatorId,
    spelling: &'static str,
    class: OperatorClass,
    precedence: u8,
    associativity: Associativity,
    prefix: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        class,
        precedence,
        associativity,
        prefix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_spellings() {
        for sp in ["**", "<=", ">=", "==", "!=", "<<", ">>", "<<=", ">>=", "&&", "||", "++", "--", "+="] {
            assert!(is_compound(sp), "{sp} should be a compound operator");
        }
        assert!(!is_compound("<"));
        assert!(!is_compound("**="));
        assert!(!is_compound("=<"));
    }

    #[test]
    fn test_precedence_ladder() {
        let ladder = [
            OperatorId::Or,
            OperatorId::And,
            OperatorId::BitOr,
            OperatorId::BitXor,
            OperatorId::BitAnd,
            OperatorId::EqualTo,
            OperatorId::LessThan,
            OperatorId::ShiftLeft,
            OperatorId::Plus,
            OperatorId::Multiply,
            OperatorId::Exponent,
        ];
        for pair in ladder.windows(2) {
            assert!(
                precedence(pair[0]) < precedence(pair[1]),
                "{:?} should bind looser than {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_non_binary_operators_have_no_precedence() {
        assert_eq!(precedence(OperatorId::Assign), None);
        assert_eq!(precedence(OperatorId::Not), None);
        assert_eq!(precedence(OperatorId::Increment), None);
    }
}
