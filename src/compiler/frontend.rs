//! The front end: lexing, parsing and type checking of a single program.
//!
//! Each phase can be driven on its own. [`Frontend::pass`] runs all of them
//! and stops at the first error.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod type_checker;
pub mod types;

use lexer::{Lexer, Token};
use parser::ast::Program;
use parser::Parser;
use type_checker::{CheckedProgram, TypeChecker};

pub use error::{Error, ErrorKind};

pub type Result<T> = std::result::Result<T, Error>;

pub fn make_lexer(source: &str) -> Lexer {
    Lexer::new(source)
}

pub fn make_parser(source: &str) -> parser::Result<Parser> {
    Parser::from_source(source)
}

pub fn make_type_checker() -> TypeChecker {
    TypeChecker::new()
}

#[derive(Debug, Clone, Default)]
pub struct Frontend;

impl Frontend {
    pub fn new() -> Self {
        Frontend
    }

    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>> {
        Ok(Lexer::tokenize(source)?)
    }

    pub fn parse(&self, source: &str) -> Result<Program> {
        let program = make_parser(source)?.parse()?;
        Ok(program)
    }

    pub fn check(&self, program: Program) -> Result<CheckedProgram> {
        Ok(make_type_checker().check(program)?)
    }

    pub fn pass(&self, source: &str) -> Result<CheckedProgram> {
        self.check(self.parse(source)?)
    }
}
