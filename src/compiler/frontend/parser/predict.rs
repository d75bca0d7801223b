//! Predict sets of the grammar.
//!
//! Each parse function starts by checking that the current token is in the
//! predict set of the production it is about to parse. The sets are small
//! bitsets over `TokenKind` so membership is a single mask test.

use crate::compiler::frontend::lexer::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const fn of(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;

        while i < kinds.len() {
            bits |= 1 << (kinds[i] as u8);
            i += 1;
        }

        TokenSet(bits)
    }

    pub const fn union(self, other: TokenSet) -> Self {
        TokenSet(self.0 | other.0)
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        self.0 & (1 << (kind as u8)) != 0
    }
}

use TokenKind::*;

pub const PRIMARY: TokenSet = TokenSet::of(&[
    BooleanLit, StringLit, IntLit, FloatLit, Ident, ColorConst, KwConsole, LAngle, LParen,
]);

pub const UNARY_OPERATORS: TokenSet = TokenSet::of(&[Bang, Minus, ColorOp, ImageOp]);

pub const UNARY: TokenSet = PRIMARY.union(UNARY_OPERATORS);

pub const EXPRESSION: TokenSet = UNARY.union(TokenSet::of(&[KwIf]));

pub const LOGICAL_OR_OPERATORS: TokenSet = TokenSet::of(&[Or]);
pub const LOGICAL_AND_OPERATORS: TokenSet = TokenSet::of(&[And]);
pub const COMPARISON_OPERATORS: TokenSet = TokenSet::of(&[Lt, Gt, Equals, NotEquals, Le, Ge]);
pub const ADDITIVE_OPERATORS: TokenSet = TokenSet::of(&[Plus, Minus]);
pub const MULTIPLICATIVE_OPERATORS: TokenSet = TokenSet::of(&[Times, Div, Mod]);

pub const DECLARATION: TokenSet = TokenSet::of(&[Type]);
pub const STATEMENT: TokenSet = TokenSet::of(&[Ident, KwWrite, Return]);
pub const RETURN_TYPE: TokenSet = TokenSet::of(&[Type, KwVoid]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        assert!(PRIMARY.contains(LAngle));
        assert!(!PRIMARY.contains(Minus));
        assert!(UNARY.contains(Minus));
        assert!(UNARY.contains(IntLit));
        assert!(EXPRESSION.contains(KwIf));
        assert!(!UNARY.contains(KwIf));
        assert!(COMPARISON_OPERATORS.contains(NotEquals));
        assert!(!COMPARISON_OPERATORS.contains(Assign));
        assert!(!STATEMENT.contains(Type));
    }

    #[test]
    fn test_highest_kind_fits() {
        let set = TokenSet::of(&[ImageOp]);
        assert!(set.contains(ImageOp));
        assert!(!set.contains(ColorOp));
    }
}
