//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy to work with ID-based
//! tokens.

use crate::lexer::{Token, TokenCategory, TokenKind};
use tanglaw_core::lang::keywords::KeywordId;
use tanglaw_core::lang::operators::{OperatorClass, OperatorId};
use tanglaw_core::lang::punctuation::{self, PunctuationCategory, PunctuationId};
use tanglaw_core::lang::reserved::ReservedWordId;
use tanglaw_core::lang::types::DataTypeId;

impl TokenKind {
    /// Payload-free category of this token.
    pub fn category(&self) -> TokenCategory {
        match self {
            TokenKind::Integer(_) => TokenCategory::Integer,
            TokenKind::RealNumber(_) => TokenCategory::RealNumber,
            TokenKind::StringLiteral(_) => TokenCategory::StringLiteral,
            TokenKind::CharacterLiteral(_) => TokenCategory::CharacterLiteral,
            TokenKind::Boolean(_) => TokenCategory::Boolean,
            TokenKind::Identifier(_) => TokenCategory::Identifier,
            TokenKind::Keyword(_) => TokenCategory::Keyword,
            TokenKind::ReservedWord(_) => TokenCategory::ReservedWord,
            TokenKind::DataType(_) => TokenCategory::DataType,
            TokenKind::Operator(class, _) => match class {
                OperatorClass::Assignment => TokenCategory::Assignment,
                OperatorClass::Arithmetic => TokenCategory::Arithmetic,
                OperatorClass::Relational => TokenCategory::Relational,
                OperatorClass::Logical => TokenCategory::Logical,
                OperatorClass::Bitwise => TokenCategory::Bitwise,
                OperatorClass::Unary => TokenCategory::Unary,
            },
            TokenKind::Punctuation(id) => match id {
                PunctuationId::LParen => TokenCategory::LParenthesis,
                PunctuationId::RParen => TokenCategory::RParenthesis,
                PunctuationId::LCurly => TokenCategory::LCurly,
                PunctuationId::RCurly => TokenCategory::RCurly,
                PunctuationId::LBracket => TokenCategory::LBracket,
                PunctuationId::RBracket => TokenCategory::RBracket,
                _ => match punctuation::category(*id) {
                    PunctuationCategory::Terminating => TokenCategory::Semicolon,
                    PunctuationCategory::Separating => TokenCategory::SeparatingSymbol,
                    PunctuationCategory::Accessor => TokenCategory::AccessorSymbol,
                    PunctuationCategory::Special | PunctuationCategory::Parenthesis => TokenCategory::SpecialSymbol,
                },
            },
            TokenKind::Comment(_) => TokenCategory::Comment,
            TokenKind::Eof => TokenCategory::Eof,
        }
    }

    /// Return `true` for `COMMENT` tokens, which the parser never sees.
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::Comment(_))
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token (of any class).
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(_, id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(_, o) if *o == id)
    }

    /// Return the operator id if this is an assignment-class operator.
    pub fn assignment_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(OperatorClass::Assignment, id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    pub fn data_type_id(&self) -> Option<DataTypeId> {
        match self {
            TokenKind::DataType(id) => Some(*id),
            _ => None,
        }
    }

    pub fn reserved_word_id(&self) -> Option<ReservedWordId> {
        match self {
            TokenKind::ReservedWord(id) => Some(*id),
            _ => None,
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.category()`.
    pub fn category(&self) -> TokenCategory {
        self.kind.category()
    }

    /// Short human description used in parse errors: `IDENTIFIER 'x'`, `EOF`.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "EOF".to_string(),
            _ => format!("{} '{}'", self.category(), self.lexeme),
        }
    }
}
