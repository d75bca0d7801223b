//! Recursive descent parser.
//!
//! ```grammar
//! <program>     -> (TYPE | KW_VOID) IDENT ( <params>? ) ( <item> ; )* EOF
//! <params>      -> <name_def> ( , <name_def> )*
//! <item>        -> <declaration> | <statement>
//! <declaration> -> <name_def> ( ( = | <- ) <expr> )?
//! <name_def>    -> TYPE <dimension>? IDENT
//! <dimension>   -> [ <expr> , <expr> ]
//! ```
//!
//! Expressions are handled in [`expression`], statements and declarations
//! in [`statement`].

pub mod ast;
pub mod error;
pub mod expression;
pub mod predict;
pub mod statement;

pub use error::{Error, SyntaxError};

use super::lexer::{Lexer, Token, TokenKind};
use super::types::Type;
use crate::compiler::source_location::SourceLocation;
use ast::{Expr, ExprKind, Item, NodeId, Program};
use predict::TokenSet;

pub type Result<T> = std::result::Result<T, Error>;

/// Deepest nesting of expressions the parser accepts.
pub const MAX_NESTING: usize = 100;

#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    current: Token,
    next_id: usize,
    depth: usize,
}

impl Parser {
    /// Reads the first token right away, which fails if the source starts
    /// with a lexical error.
    pub fn new(mut lexer: Lexer) -> Result<Self> {
        let current = lexer.next()?;

        Ok(Parser {
            lexer,
            current,
            next_id: 0,
            depth: 0,
        })
    }

    pub fn from_source(source: &str) -> Result<Self> {
        Self::new(Lexer::new(source))
    }

    pub fn parse(&mut self) -> Result<Program> {
        let program = self.program()?;
        log::debug!(
            "parsed program {} with {} items",
            program.name,
            program.items.len()
        );
        Ok(program)
    }

    fn program(&mut self) -> Result<Program> {
        let location = self.current.location;
        let return_type = self.return_type()?;
        let name = self.expect(TokenKind::Ident)?.text;

        self.expect(TokenKind::LParen)?;
        let params = self.params()?;
        self.expect(TokenKind::RParen)?;

        let mut items = vec![];

        while !self.check(TokenKind::Eof) {
            items.push(self.item()?);
            self.expect(TokenKind::Semi)?;
        }

        Ok(Program {
            return_type,
            name,
            params,
            items,
            location,
        })
    }

    fn return_type(&mut self) -> Result<Type> {
        self.expect_start(predict::RETURN_TYPE, "TYPE or KW_VOID")?;

        match Type::from_keyword(&self.current.text) {
            Some(ty) => {
                self.consume()?;
                Ok(ty)
            }
            None => Error::unexpected_token(&self.current, "TYPE or KW_VOID"),
        }
    }

    // `void` is only a return type; as a parameter it fails in `name_def`
    fn params(&mut self) -> Result<Vec<ast::NameDef>> {
        let mut params = vec![];

        if self.check(TokenKind::Type) || self.check(TokenKind::KwVoid) {
            params.push(self.name_def()?);

            while self.check(TokenKind::Comma) {
                self.consume()?;
                params.push(self.name_def()?);
            }
        }

        Ok(params)
    }

    fn item(&mut self) -> Result<Item> {
        let kind = self.current.kind;

        if predict::DECLARATION.contains(kind) {
            return Ok(Item::Declaration(self.declaration()?));
        }

        // two identifiers in a row: most likely a misspelled type name
        if kind == TokenKind::Ident && self.peek()?.is(TokenKind::Ident) {
            return Error::unexpected_token(&self.current, "TYPE");
        }

        if predict::STATEMENT.contains(kind) {
            return Ok(Item::Statement(self.statement()?));
        }

        Error::unexpected_token(&self.current, "a declaration or statement")
    }

    /// Advance to the next token and return the one that was current. At
    /// the end of input this keeps returning `EOF`.
    fn consume(&mut self) -> Result<Token> {
        if self.current.is(TokenKind::Eof) {
            return Ok(self.current.clone());
        }

        let next = self.lexer.next()?;
        log::trace!("consumed {} {:?}", self.current.kind, self.current.text);
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// The token after the current one.
    fn peek(&self) -> Result<&Token> {
        Ok(self.lexer.peek()?)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.check(kind) {
            self.consume()
        } else {
            Error::unexpected_token(&self.current, kind.name())
        }
    }

    fn expect_start(&self, set: TokenSet, expected: &str) -> Result<()> {
        if set.contains(self.current.kind) {
            Ok(())
        } else {
            Error::unexpected_token(&self.current, expected)
        }
    }

    // guards every recursive descent into a subexpression
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Parser) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_NESTING {
            let expected = format!("at most {} nested expressions", MAX_NESTING);
            return Error::unexpected_token(&self.current, &expected);
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn node_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    fn node(&mut self, kind: ExprKind, location: SourceLocation) -> Expr {
        Expr::new(self.node_id(), kind, location)
    }
}
