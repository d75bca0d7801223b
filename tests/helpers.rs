#![allow(dead_code)]

pub use matches::assert_matches;
use pixelc::compiler::frontend::lexer::{Lexer, Token, TokenKind};
use pixelc::compiler::frontend::parser::ast::{Item, Program};
use pixelc::compiler::frontend::type_checker::CheckedProgram;
pub use pixelc::compiler::frontend::{Error, ErrorKind, Frontend, Result};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn tokens(source: &str) -> Vec<Token> {
    Lexer::tokenize(source).unwrap()
}

pub fn kinds(source: &str) -> Vec<TokenKind> {
    tokens(source).into_iter().map(|t| t.kind).collect()
}

pub fn parse(source: &str) -> Result<Program> {
    init_logging();
    Frontend::new().parse(source)
}

pub fn check(source: &str) -> Result<CheckedProgram> {
    init_logging();
    Frontend::new().pass(source)
}

pub fn check_body(body: &str) -> Result<CheckedProgram> {
    check(&format!("void p() {}", body))
}

pub fn type_error(body: &str) -> String {
    let e = check_body(body).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Type, "expected a type error, got {}", e);
    e.message()
}

pub fn item(program: &Program, index: usize) -> &Item {
    &program.items[index]
}
