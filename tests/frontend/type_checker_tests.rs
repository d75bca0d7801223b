use crate::helpers::*;
use pixelc::compiler::frontend::parser::ast::{ExprKind, Item, VarDeclaration};
use pixelc::compiler::frontend::type_checker::DeclarationKind;
use pixelc::compiler::frontend::types::Type;

/// The binary rule for INT + FLOAT coerces the INT operand node, here the use of `x`.
#[test]
fn coercion_of_int_operand() {
    let checked = check_body("int x = 3; float y = x + 2.0;").unwrap();

    match item(&checked.program, 1) {
        Item::Declaration(VarDeclaration {
            initializer: Some(init),
            ..
        }) => {
            assert_eq!(checked.resolved_type(&init.expr), Some(Type::Float));

            match &init.expr.kind {
                ExprKind::Binary { left, right, .. } => {
                    assert_eq!(checked.resolved_type(left), Some(Type::Int));
                    assert_eq!(checked.coerce_to(left), Some(Type::Float));
                    assert_eq!(checked.coerce_to(right), None);
                    assert_eq!(
                        checked.binding(left.id).map(|d| d.name.as_str()),
                        Some("x")
                    );
                }
                other => panic!("expected a binary expression, got {:?}", other),
            }
        }
        other => panic!("expected a declaration, got {:?}", other),
    }
}

#[test]
fn pixel_selector_scoping() {
    let checked = check_body("image m[10,10]; m[i,j] = BLACK;").unwrap();
    let indices: Vec<_> = checked
        .annotations
        .declarations()
        .iter()
        .filter(|d| d.kind == DeclarationKind::PixelIndex)
        .map(|d| (d.name.as_str(), d.ty))
        .collect();

    assert_eq!(indices, vec![("i", Type::Int), ("j", Type::Int)]);

    assert_eq!(
        type_error("image m[10,10]; m[i,j] = BLACK; int k = i;"),
        "undefined identifier i"
    );
}

#[test]
fn pixel_indices_can_be_reused() {
    assert!(check_body("image[4, 4] m; m[x, y] = RED; m[x, y] = m[y, x];").is_ok());
}

#[test]
fn uninitialized_use() {
    assert_eq!(
        type_error("int a; int b = a + 1;"),
        "using uninitialized variable a"
    );
}

#[test]
fn assignment_initializes() {
    assert!(check_body("int a; a = 2; int b = a + 1;").is_ok());
}

#[test]
fn return_type_must_match() {
    assert!(check("float f(int a) ^ a * 1.5;").is_ok());

    let e = check("int f() ^ 1.5;").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Type);
    assert_eq!(e.message(), "return type mismatch: expected INT, found FLOAT");
}

#[test]
fn write_and_read() {
    assert!(check_body("int x = 1; write x -> console; string f = \"out.png\"; write x -> f;").is_ok());
    assert!(check_body("image m <- \"in.png\"; int n <- console;").is_ok());

    assert_eq!(type_error("int x = 1; write x -> x;"), "can't write to INT");
}

#[test]
fn duplicate_declarations() {
    assert_eq!(
        type_error("int a = 1; float a = 2.0;"),
        "variable a already declared"
    );
    assert_eq!(
        check("void p(int a) int a = 1;").unwrap_err().message(),
        "variable a already declared"
    );
}

#[test]
fn errors_carry_locations() {
    let e = check("void p()\nint b = c;").unwrap_err();

    assert_eq!(e.location().row, 1);
    assert_eq!(e.location().column, 8);
}
