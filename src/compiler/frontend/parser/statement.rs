//! Declarations and statements.
//!
//! ```grammar
//! <statement> -> IDENT <pixel_selector>? = <expr>
//!              | IDENT <pixel_selector>? <- <expr>
//!              | KW_WRITE <expr> -> <expr>
//!              | ^ <expr>
//! ```
//!
//! A name definition also accepts its dimension after the name
//! (`image m[10, 10]`), which is the same as `image[10, 10] m`.

use super::ast::{
    AssignmentStatement, Dimension, Initializer, InitializerOp, NameDef, ReadStatement,
    ReturnStatement, Statement, VarDeclaration, WriteStatement,
};
use super::{Error, Parser, Result};
use crate::compiler::frontend::lexer::TokenKind;
use crate::compiler::frontend::types::Type;

impl Parser {
    pub(super) fn declaration(&mut self) -> Result<VarDeclaration> {
        let name_def = self.name_def()?;
        let location = name_def.location;

        let op = match self.current.kind {
            TokenKind::Assign => InitializerOp::Assign,
            TokenKind::LArrow => InitializerOp::Read,
            _ => {
                return Ok(VarDeclaration {
                    name_def,
                    initializer: None,
                    location,
                })
            }
        };

        self.consume()?;
        let expr = self.expr()?;

        Ok(VarDeclaration {
            name_def,
            initializer: Some(Initializer { op, expr }),
            location,
        })
    }

    pub(super) fn name_def(&mut self) -> Result<NameDef> {
        let type_token = self.expect(TokenKind::Type)?;
        let ty = match Type::from_keyword(&type_token.text) {
            Some(ty) => ty,
            None => return Error::unexpected_token(&type_token, "TYPE"),
        };

        let mut dimension = None;
        if self.check(TokenKind::LSquare) {
            dimension = Some(self.dimension()?);
        }

        let name = self.expect(TokenKind::Ident)?.text;

        if dimension.is_none() && self.check(TokenKind::LSquare) {
            dimension = Some(self.dimension()?);
        }

        Ok(NameDef {
            id: self.node_id(),
            ty,
            name,
            dimension,
            location: type_token.location,
        })
    }

    fn dimension(&mut self) -> Result<Dimension> {
        let location = self.expect(TokenKind::LSquare)?.location;

        let width = self.expr()?;
        self.expect(TokenKind::Comma)?;
        let height = self.expr()?;
        self.expect(TokenKind::RSquare)?;

        Ok(Dimension {
            id: self.node_id(),
            width,
            height,
            location,
        })
    }

    pub(super) fn statement(&mut self) -> Result<Statement> {
        match self.current.kind {
            TokenKind::Ident => self.assignment_or_read(),
            TokenKind::KwWrite => {
                let location = self.consume()?.location;
                let source = self.expr()?;
                self.expect(TokenKind::RArrow)?;
                let dest = self.expr()?;

                Ok(Statement::Write(WriteStatement {
                    source,
                    dest,
                    location,
                }))
            }
            TokenKind::Return => {
                let location = self.consume()?.location;
                let expr = self.expr()?;

                Ok(Statement::Return(ReturnStatement { expr, location }))
            }
            _ => Error::unexpected_token(&self.current, "a statement"),
        }
    }

    fn assignment_or_read(&mut self) -> Result<Statement> {
        let target = self.expect(TokenKind::Ident)?;

        let selector = if self.check(TokenKind::LSquare) {
            Some(self.pixel_selector()?)
        } else {
            None
        };

        match self.current.kind {
            TokenKind::Assign => {
                self.consume()?;
                let expr = self.expr()?;

                Ok(Statement::Assignment(AssignmentStatement {
                    id: self.node_id(),
                    name: target.text,
                    selector,
                    expr,
                    location: target.location,
                }))
            }
            TokenKind::LArrow => {
                self.consume()?;
                let source = self.expr()?;

                Ok(Statement::Read(ReadStatement {
                    id: self.node_id(),
                    name: target.text,
                    selector,
                    source,
                    location: target.location,
                }))
            }
            _ => Error::unexpected_token(&self.current, "ASSIGN or LARROW"),
        }
    }
}
