use super::coercion;
use super::{Error, Result, TypeChecker};
use crate::compiler::frontend::parser::ast::{Expr, ExprKind, PixelSelector};
use crate::compiler::frontend::types::Type;

impl TypeChecker {
    /// Resolve the type of `expr` and its subexpressions.
    ///
    /// The returned type is the one the parent works with. It is the resolved
    /// type for every expression but a pixel read, which is resolved as `INT`
    /// and immediately coerced to `COLOR`.
    pub(super) fn check_expr(&mut self, expr: &Expr) -> Result<Type> {
        match &expr.kind {
            ExprKind::BooleanLit(_) => self.resolve(expr, Type::Boolean),
            ExprKind::StringLit(_) => self.resolve(expr, Type::String),
            ExprKind::IntLit(_) => self.resolve(expr, Type::Int),
            ExprKind::FloatLit(_) => self.resolve(expr, Type::Float),
            ExprKind::ColorConst(_) => self.resolve(expr, Type::Color),
            ExprKind::Console => self.resolve(expr, Type::Console),
            ExprKind::Color { red, green, blue } => {
                let r = self.check_expr(red)?;
                let g = self.check_expr(green)?;
                let b = self.check_expr(blue)?;

                if r != g || r != b {
                    return Error::type_error(
                        format!("color components must have the same type, found {}, {}, {}", r, g, b),
                        expr.location,
                    );
                }

                match r {
                    Type::Int => self.resolve(expr, Type::Color),
                    Type::Float => self.resolve(expr, Type::ColorFloat),
                    _ => Error::type_error(
                        format!("color components must be INT or FLOAT, found {}", r),
                        expr.location,
                    ),
                }
            }
            ExprKind::Unary { op, operand } => {
                let ty = self.check_expr(operand)?;

                match coercion::unary(*op, ty) {
                    Some(result) => self.resolve(expr, result),
                    None => Error::type_error(
                        format!("operator {} can't be applied to {}", op, ty),
                        expr.location,
                    ),
                }
            }
            ExprKind::Binary { op, left, right } => {
                let l = self.check_expr(left)?;
                let r = self.check_expr(right)?;

                let rule = match coercion::binary(*op, l, r) {
                    Some(rule) => rule,
                    None => {
                        return Error::type_error(
                            format!("incompatible operand types for {}: {} and {}", op, l, r),
                            expr.location,
                        )
                    }
                };

                if let Some(to) = rule.coerce_left {
                    self.coerce(left, to);
                }
                if let Some(to) = rule.coerce_right {
                    self.coerce(right, to);
                }

                self.resolve(expr, rule.result)
            }
            ExprKind::Ident(name) => {
                let (id, ty) = self.target(name, expr.location)?;
                let initialized = self
                    .annotations
                    .declaration(id)
                    .map_or(false, |d| d.initialized);

                if !initialized {
                    return Error::type_error(
                        format!("using uninitialized variable {}", name),
                        expr.location,
                    );
                }

                self.annotations.bind(expr.id, id);
                self.resolve(expr, ty)
            }
            ExprKind::Conditional {
                condition,
                true_case,
                false_case,
            } => {
                let c = self.check_expr(condition)?;
                if c != Type::Boolean {
                    return Error::type_error(
                        format!("condition must be BOOLEAN, found {}", c),
                        condition.location,
                    );
                }

                let t = self.check_expr(true_case)?;
                let f = self.check_expr(false_case)?;
                if t != f {
                    return Error::type_error(
                        format!("branches of a conditional must have the same type, found {} and {}", t, f),
                        expr.location,
                    );
                }

                self.resolve(expr, t)
            }
            ExprKind::UnaryPostfix { image, selector } => {
                let ty = self.check_expr(image)?;
                if ty != Type::Image {
                    return Error::type_error(
                        format!("pixel selector can only be applied to an IMAGE, found {}", ty),
                        expr.location,
                    );
                }

                self.check_pixel_selector(selector)?;
                self.resolve(expr, Type::Int)?;
                self.coerce(expr, Type::Color);
                Ok(Type::Color)
            }
        }
    }

    pub(super) fn check_pixel_selector(&mut self, selector: &PixelSelector) -> Result<()> {
        for coordinate in &[&selector.x, &selector.y] {
            let ty = self.check_expr(coordinate)?;

            if ty != Type::Int {
                return Error::type_error(
                    format!("pixel selector coordinates must be INT, found {}", ty),
                    coordinate.location,
                );
            }
        }

        Ok(())
    }

    fn resolve(&mut self, expr: &Expr, ty: Type) -> Result<Type> {
        self.annotations.set_resolved(expr.id, ty);
        Ok(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::super::CheckedProgram;
    use super::*;
    use crate::compiler::frontend::parser::ast::{Item, VarDeclaration};
    use crate::compiler::frontend::parser::Parser;

    // checks `void p() <declarations>` and returns the last initializer
    fn run(declarations: &str) -> Result<(CheckedProgram, usize)> {
        let program = Parser::from_source(&format!("void p() {}", declarations))
            .and_then(|mut p| p.parse())
            .expect("program should parse");
        let last = program.items.len() - 1;
        Ok((TypeChecker::new().check(program)?, last))
    }

    fn last_initializer(checked: &CheckedProgram, index: usize) -> &Expr {
        match &checked.program.items[index] {
            Item::Declaration(VarDeclaration {
                initializer: Some(init),
                ..
            }) => &init.expr,
            other => panic!("unexpected {:?}", other),
        }
    }

    fn type_of(declarations: &str) -> Type {
        let (checked, last) = run(declarations).unwrap();
        checked
            .resolved_type(last_initializer(&checked, last))
            .unwrap()
    }

    fn message(declarations: &str) -> String {
        run(declarations).unwrap_err().message
    }

    fn operands(checked: &CheckedProgram, expr: &Expr) -> (Option<Type>, Option<Type>) {
        match &expr.kind {
            ExprKind::Binary { left, right, .. } => {
                (checked.coerce_to(left), checked.coerce_to(right))
            }
            other => panic!("not binary: {:?}", other),
        }
    }

    #[test]
    fn test_literals() {
        assert_eq!(type_of("boolean b = true;"), Type::Boolean);
        assert_eq!(type_of("string s = \"x\";"), Type::String);
        assert_eq!(type_of("color c = PINK;"), Type::Color);
        assert_eq!(type_of("float f = 1.0;"), Type::Float);
    }

    #[test]
    fn test_color_literals() {
        assert_eq!(type_of("color c = <<1, 2, 3>>;"), Type::Color);
        assert_eq!(
            message("color c = <<1, 2.0, 3>>;"),
            "color components must have the same type, found INT, FLOAT, INT"
        );
        assert_eq!(
            message("color c = <<true, true, true>>;"),
            "color components must be INT or FLOAT, found BOOLEAN"
        );
    }

    #[test]
    fn test_float_color_literal_is_colorfloat() {
        let (checked, last) = run("float f = 0.5; boolean b = <<f, f, f>> == <<f, f, f>>;").unwrap();
        match &last_initializer(&checked, last).kind {
            ExprKind::Binary { left, .. } => {
                assert_eq!(checked.resolved_type(left), Some(Type::ColorFloat));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_binary_coercions() {
        let (checked, last) = run("float f = 1 + 2.0;").unwrap();
        let expr = last_initializer(&checked, last);
        assert_eq!(checked.resolved_type(expr), Some(Type::Float));
        assert_eq!(operands(&checked, expr), (Some(Type::Float), None));

        let (checked, last) = run("image[2, 2] m = RED * 2.0;").unwrap();
        let expr = last_initializer(&checked, last);
        assert_eq!(
            operands(&checked, expr),
            (Some(Type::ColorFloat), Some(Type::ColorFloat))
        );
    }

    #[test]
    fn test_unary() {
        assert_eq!(type_of("int i = -3;"), Type::Int);
        assert_eq!(type_of("boolean b = !false;"), Type::Boolean);
        assert_eq!(type_of("int r = getRed RED;"), Type::Int);
        assert_eq!(
            message("int i = -true;"),
            "operator - can't be applied to BOOLEAN"
        );
    }

    #[test]
    fn test_image_operators() {
        let (checked, last) = run("image[2, 2] m; int w = getWidth m;").unwrap();
        let expr = last_initializer(&checked, last);
        assert_eq!(checked.resolved_type(expr), Some(Type::Int));

        assert_eq!(type_of("image[2, 2] m; image r = getRed m;"), Type::Image);
    }

    #[test]
    fn test_pixel_read() {
        let (checked, last) = run("image[2, 2] m; color c = m[0, 1];").unwrap();
        let expr = last_initializer(&checked, last);

        assert_eq!(checked.resolved_type(expr), Some(Type::Int));
        assert_eq!(checked.coerce_to(expr), Some(Type::Color));

        assert_eq!(
            message("int n = 1; color c = n[0, 1];"),
            "pixel selector can only be applied to an IMAGE, found INT"
        );
        assert_eq!(
            message("image[2, 2] m; color c = m[0.5, 1];"),
            "pixel selector coordinates must be INT, found FLOAT"
        );
    }

    #[test]
    fn test_pixel_read_into_int_drops_coercion() {
        let (checked, last) = run("image[2, 2] m; int c = m[0, 1];").unwrap();
        let expr = last_initializer(&checked, last);

        assert_eq!(checked.coerce_to(expr), None);
    }

    #[test]
    fn test_identifiers() {
        let (checked, last) = run("int a = 1; int b = a;").unwrap();
        let expr = last_initializer(&checked, last);
        assert_eq!(checked.binding(expr.id).map(|d| d.name.as_str()), Some("a"));

        assert_eq!(message("int b = a;"), "undefined identifier a");
    }

    #[test]
    fn test_conditional() {
        assert_eq!(type_of("int i = if (true) 1 else 2 fi;"), Type::Int);
        assert_eq!(
            message("int i = if (1) 1 else 2 fi;"),
            "condition must be BOOLEAN, found INT"
        );
        assert_eq!(
            message("int i = if (true) 1 else 2.0 fi;"),
            "branches of a conditional must have the same type, found INT and FLOAT"
        );
    }

    #[test]
    fn test_incompatible_operands() {
        assert_eq!(
            message("int i = 1 + \"a\";"),
            "incompatible operand types for +: INT and STRING"
        );
        assert_eq!(
            message("boolean b = RED < BLUE;"),
            "incompatible operand types for <: COLOR and COLOR"
        );
    }
}
