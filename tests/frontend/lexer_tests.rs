use crate::helpers::*;
use pixelc::compiler::frontend::lexer::{ErrorKind as LexicalErrorKind, Lexer, TokenKind};
use pixelc::compiler::source_location::SourceLocation;

fn lexical_error(source: &str) -> LexicalErrorKind {
    Lexer::tokenize(source).unwrap_err().kind
}

#[test]
fn int_boundaries() {
    let tokens = tokens("2147483647");
    assert_eq!(tokens[0].kind, TokenKind::IntLit);
    assert_eq!(tokens[0].int_value(), Some(i32::MAX));

    assert_matches!(
        lexical_error("2147483648"),
        LexicalErrorKind::IntegerOverflow(_)
    );
}

#[test]
fn leading_zeros() {
    assert_eq!(kinds("0"), vec![TokenKind::IntLit, TokenKind::Eof]);
    assert_eq!(
        kinds("00"),
        vec![TokenKind::IntLit, TokenKind::IntLit, TokenKind::Eof]
    );
    assert_eq!(lexical_error("01"), LexicalErrorKind::LeadingZero);
    assert_eq!(kinds("0.5"), vec![TokenKind::FloatLit, TokenKind::Eof]);
}

#[test]
fn program_tokens_and_locations() {
    let tokens = tokens("image f(int w)\n\tm[x, y] = <<w, 0, 0>>;");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Type,
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::Type,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::Ident,
            TokenKind::LSquare,
            TokenKind::Ident,
            TokenKind::Comma,
            TokenKind::Ident,
            TokenKind::RSquare,
            TokenKind::Assign,
            TokenKind::LAngle,
            TokenKind::Ident,
            TokenKind::Comma,
            TokenKind::IntLit,
            TokenKind::Comma,
            TokenKind::IntLit,
            TokenKind::RAngle,
            TokenKind::Semi,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[6].location, SourceLocation::new(1, 3));
}

#[test]
fn errors_stop_the_stream() {
    let mut lexer = Lexer::new("int x = 1 $ 2");

    for _ in 0..4 {
        assert!(lexer.next().is_ok());
    }
    let e = lexer.next().unwrap_err();
    assert_eq!(e.kind, LexicalErrorKind::IllegalCharacter('$'));
    assert_eq!(e.location, SourceLocation::new(0, 10));
    assert_eq!(lexer.peek().unwrap_err(), e);
}

#[test]
fn lexical_errors_surface_through_the_frontend() {
    let e = check("void p() string s = \"open").unwrap_err();

    assert_eq!(e.kind(), ErrorKind::Lexical);
    assert_eq!(e.message(), "unterminated string literal");
}
