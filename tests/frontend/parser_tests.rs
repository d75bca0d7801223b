use crate::helpers::*;
use pixelc::compiler::frontend::lexer::TokenKind;
use pixelc::compiler::frontend::parser::ast::{
    BinaryOp, ExprKind, Item, ReturnStatement, Statement, WriteStatement,
};
use pixelc::compiler::frontend::types::Type;

#[test]
fn return_statement() {
    let program = parse("int f() ^ 1 + 2;").unwrap();

    match item(&program, 0) {
        Item::Statement(Statement::Return(ReturnStatement { expr, .. })) => {
            match &expr.kind {
                ExprKind::Binary { op, left, right } => {
                    assert_eq!(*op, BinaryOp::Plus);
                    assert_eq!(left.kind, ExprKind::IntLit(1));
                    assert_eq!(right.kind, ExprKind::IntLit(2));
                }
                other => panic!("expected a binary expression, got {:?}", other),
            }
        }
        other => panic!("expected a return statement, got {:?}", other),
    }
}

#[test]
fn write_statement() {
    let program = parse("void p() int x = 1; write x -> console;").unwrap();

    match item(&program, 1) {
        Item::Statement(Statement::Write(WriteStatement { source, dest, .. })) => {
            assert_eq!(source.as_ident(), Some("x"));
            assert_eq!(dest.kind, ExprKind::Console);
        }
        other => panic!("expected a write statement, got {:?}", other),
    }
}

#[test]
fn program_header() {
    let program = parse("image blur(image src, int radius)").unwrap();

    assert_eq!(program.return_type, Type::Image);
    assert_eq!(program.name, "blur");
    assert_eq!(program.params.len(), 2);
    assert_eq!(program.params[1].ty, Type::Int);
    assert!(program.items.is_empty());
}

#[test]
fn printed_program_is_fully_parenthesized() {
    let program = parse("int f(int a) int b = a + 2 * -a; ^ b;").unwrap();

    assert_eq!(
        program.to_string(),
        "int f(int a)\nint b = (a + (2 * (-a)));\n^ b;\n"
    );
}

#[test]
fn syntax_errors() {
    let e = parse("void p() int x = 1").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Syntax);

    match parse("void p() foo x = 1;") {
        Err(Error::Syntax(e)) => {
            assert_eq!(e.expected, "TYPE");
            assert_eq!(e.found, TokenKind::Ident);
            assert_eq!(e.text, "foo");
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }

    assert_matches!(parse("void p(void v)"), Err(Error::Syntax(_)));
}

#[test]
fn deeply_nested_expressions_are_rejected() {
    let depth = 20_000;
    let source = format!(
        "int f() int x = {}1{}; ^ x;",
        "(".repeat(depth),
        ")".repeat(depth)
    );

    let e = check(&source).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Syntax);
    assert!(e.message().contains("nested expressions"), "{}", e.message());

    assert!(check("int f() int x = ((((((1)))))); ^ x;").is_ok());
}
