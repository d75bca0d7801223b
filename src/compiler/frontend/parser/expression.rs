//! Expressions, from lowest to highest precedence.
//!
//! ```grammar
//! <expr>           -> <conditional> | <logical_or>
//! <conditional>    -> KW_IF ( <expr> ) <expr> KW_ELSE <expr> KW_FI
//! <logical_or>     -> <logical_and> ( | <logical_and> )*
//! <logical_and>    -> <comparison> ( & <comparison> )*
//! <comparison>     -> <additive> ( ( < | > | == | != | <= | >= ) <additive> )*
//! <additive>       -> <multiplicative> ( ( + | - ) <multiplicative> )*
//! <multiplicative> -> <unary> ( ( * | / | % ) <unary> )*
//! <unary>          -> ( ! | - | COLOR_OP | IMAGE_OP ) <unary> | <postfix>
//! <postfix>        -> <primary> <pixel_selector>?
//! <primary>        -> BOOLEAN_LIT | STRING_LIT | INT_LIT | FLOAT_LIT | IDENT
//!                   | COLOR_CONST | KW_CONSOLE | ( <expr> )
//!                   | << <expr> , <expr> , <expr> >>
//! <pixel_selector> -> [ <expr> , <expr> ]
//! ```
//!
//! All binary levels are left associative.

use super::ast::{BinaryOp, Expr, ExprKind, PixelSelector, UnaryOp};
use super::predict::{self, TokenSet};
use super::{Error, Parser, Result};
use crate::compiler::frontend::lexer::{Token, TokenKind};

type Operand = fn(&mut Parser) -> Result<Expr>;

impl Parser {
    pub fn expr(&mut self) -> Result<Expr> {
        self.expect_start(predict::EXPRESSION, "an expression")?;

        self.nested(|parser| {
            if parser.check(TokenKind::KwIf) {
                parser.conditional_expr()
            } else {
                parser.logical_or_expr()
            }
        })
    }

    fn conditional_expr(&mut self) -> Result<Expr> {
        let location = self.expect(TokenKind::KwIf)?.location;

        self.expect(TokenKind::LParen)?;
        let condition = self.expr()?;
        self.expect(TokenKind::RParen)?;
        let true_case = self.expr()?;
        self.expect(TokenKind::KwElse)?;
        let false_case = self.expr()?;
        self.expect(TokenKind::KwFi)?;

        let kind = ExprKind::Conditional {
            condition: Box::new(condition),
            true_case: Box::new(true_case),
            false_case: Box::new(false_case),
        };

        Ok(self.node(kind, location))
    }

    fn logical_or_expr(&mut self) -> Result<Expr> {
        self.binary_level(predict::LOGICAL_OR_OPERATORS, Parser::logical_and_expr)
    }

    fn logical_and_expr(&mut self) -> Result<Expr> {
        self.binary_level(predict::LOGICAL_AND_OPERATORS, Parser::comparison_expr)
    }

    fn comparison_expr(&mut self) -> Result<Expr> {
        self.binary_level(predict::COMPARISON_OPERATORS, Parser::additive_expr)
    }

    fn additive_expr(&mut self) -> Result<Expr> {
        self.binary_level(predict::ADDITIVE_OPERATORS, Parser::multiplicative_expr)
    }

    fn multiplicative_expr(&mut self) -> Result<Expr> {
        self.binary_level(predict::MULTIPLICATIVE_OPERATORS, Parser::unary_expr)
    }

    fn binary_level(&mut self, operators: TokenSet, operand: Operand) -> Result<Expr> {
        let mut left = operand(self)?;

        while operators.contains(self.current.kind) {
            let operator = self.consume()?;
            let op = binary_op(&operator)?;

            self.expect_start(predict::UNARY, "an operand")?;
            let right = operand(self)?;
            let location = left.location;

            let kind = ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
            left = self.node(kind, location);
        }

        Ok(left)
    }

    fn unary_expr(&mut self) -> Result<Expr> {
        if predict::UNARY_OPERATORS.contains(self.current.kind) {
            let operator = self.consume()?;
            let op = UnaryOp::from_token(&operator)
                .ok_or_else(|| Error::unexpected(&operator, "a unary operator"))?;

            self.expect_start(predict::UNARY, "an operand")?;
            let operand = self.nested(Parser::unary_expr)?;
            let kind = ExprKind::Unary {
                op,
                operand: Box::new(operand),
            };

            return Ok(self.node(kind, operator.location));
        }

        self.postfix_expr()
    }

    fn postfix_expr(&mut self) -> Result<Expr> {
        let primary = self.primary_expr()?;

        if !self.check(TokenKind::LSquare) {
            return Ok(primary);
        }

        let selector = self.pixel_selector()?;
        let location = primary.location;
        let kind = ExprKind::UnaryPostfix {
            image: Box::new(primary),
            selector: Box::new(selector),
        };

        Ok(self.node(kind, location))
    }

    fn primary_expr(&mut self) -> Result<Expr> {
        self.expect_start(predict::PRIMARY, "an expression")?;

        match self.current.kind {
            TokenKind::LParen => {
                self.consume()?;
                let inner = self.expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::LAngle => self.color_expr(),
            _ => {
                let token = self.consume()?;
                let kind = literal(&token)?;
                Ok(self.node(kind, token.location))
            }
        }
    }

    fn color_expr(&mut self) -> Result<Expr> {
        let location = self.expect(TokenKind::LAngle)?.location;

        let red = self.expr()?;
        self.expect(TokenKind::Comma)?;
        let green = self.expr()?;
        self.expect(TokenKind::Comma)?;
        let blue = self.expr()?;
        self.expect(TokenKind::RAngle)?;

        let kind = ExprKind::Color {
            red: Box::new(red),
            green: Box::new(green),
            blue: Box::new(blue),
        };

        Ok(self.node(kind, location))
    }

    pub fn pixel_selector(&mut self) -> Result<PixelSelector> {
        let location = self.expect(TokenKind::LSquare)?.location;

        let x = self.expr()?;
        self.expect(TokenKind::Comma)?;
        let y = self.expr()?;
        self.expect(TokenKind::RSquare)?;

        Ok(PixelSelector {
            id: self.node_id(),
            x,
            y,
            location,
        })
    }
}

fn binary_op(token: &Token) -> Result<BinaryOp> {
    BinaryOp::from_token_kind(token.kind).ok_or_else(|| Error::unexpected(token, "a binary operator"))
}

// the single token primaries
fn literal(token: &Token) -> Result<ExprKind> {
    let kind = match token.kind {
        TokenKind::BooleanLit => token.bool_value().map(ExprKind::BooleanLit),
        TokenKind::StringLit => token.string_value().map(ExprKind::StringLit),
        TokenKind::IntLit => token.int_value().map(ExprKind::IntLit),
        TokenKind::FloatLit => token.float_value().map(ExprKind::FloatLit),
        TokenKind::ColorConst => token.color_value().map(ExprKind::ColorConst),
        TokenKind::Ident => Some(ExprKind::Ident(token.text.clone())),
        TokenKind::KwConsole => Some(ExprKind::Console),
        _ => None,
    };

    kind.ok_or_else(|| Error::unexpected(token, "an expression"))
}
