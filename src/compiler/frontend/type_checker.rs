//! Semantic analysis.
//!
//! A single left to right walk over the program that resolves every
//! identifier to its declaration, computes the type of every expression and
//! records the coercions the code generator has to insert. Results go into
//! an [`Annotations`] side table; the tree itself is not touched.
//!
//! Checking stops at the first violated rule.

pub mod annotations;
pub mod coercion;
pub mod error;
pub mod expression;
pub mod symbol_table;

pub use annotations::{
    Annotations, CheckedProgram, DeclId, Declaration, DeclarationKind, ExprType,
};
pub use error::Error;

use super::parser::ast::{
    AssignmentStatement, Dimension, Expr, InitializerOp, Item, NameDef, PixelSelector, Program,
    ReadStatement, ReturnStatement, Statement, VarDeclaration, WriteStatement,
};
use super::types::Type;
use crate::compiler::source_location::{HasSourceLocation, SourceLocation};
use symbol_table::SymbolTable;

pub type Result<T> = std::result::Result<T, Error>;

pub struct TypeChecker {
    symbols: SymbolTable,
    annotations: Annotations,
    return_type: Type,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            symbols: SymbolTable::new(),
            annotations: Annotations::new(),
            return_type: Type::Void,
        }
    }

    /// Check `program`. The checker is consumed, so every program gets a
    /// fresh symbol table.
    pub fn check(mut self, program: Program) -> Result<CheckedProgram> {
        self.check_program(&program)?;

        log::debug!(
            "type checked {} with {} declarations",
            program.name,
            self.annotations.declarations().len()
        );

        Ok(CheckedProgram {
            program,
            annotations: self.annotations,
        })
    }

    fn check_program(&mut self, program: &Program) -> Result<()> {
        self.return_type = program.return_type;

        for param in &program.params {
            let id = self.declare(param, DeclarationKind::Parameter)?;
            self.annotations.mark_initialized(id);
        }

        for item in &program.items {
            log::trace!("checking item at {}", item.source_location());

            match item {
                Item::Declaration(declaration) => self.check_declaration(declaration)?,
                Item::Statement(statement) => self.check_statement(statement)?,
            }
        }

        Ok(())
    }

    fn declare(&mut self, name_def: &NameDef, kind: DeclarationKind) -> Result<DeclId> {
        if let Some(dimension) = &name_def.dimension {
            if name_def.ty != Type::Image {
                return Error::type_error(
                    format!("{} {} can't have a dimension", name_def.ty, name_def.name),
                    dimension.location,
                );
            }
            self.check_dimension(dimension)?;
        }

        if self.symbols.lookup(&name_def.name).is_some() {
            return Error::type_error(
                format!("variable {} already declared", name_def.name),
                name_def.location,
            );
        }

        let id = self.annotations.add_declaration(Declaration {
            name: name_def.name.clone(),
            ty: name_def.ty,
            dimension: name_def.dimension.clone(),
            initialized: false,
            kind,
            location: name_def.location,
        });

        self.symbols.insert(&name_def.name, id);
        self.annotations.bind(name_def.id, id);
        Ok(id)
    }

    fn check_dimension(&mut self, dimension: &Dimension) -> Result<()> {
        let width = self.check_expr(&dimension.width)?;
        let height = self.check_expr(&dimension.height)?;

        if width != Type::Int || height != Type::Int {
            return Error::type_error(
                format!("dimension must be INT, INT but is {}, {}", width, height),
                dimension.location,
            );
        }

        Ok(())
    }

    fn check_declaration(&mut self, declaration: &VarDeclaration) -> Result<()> {
        let name_def = &declaration.name_def;
        let id = self.declare(name_def, DeclarationKind::Variable)?;
        let target = name_def.ty;

        let initializer = match &declaration.initializer {
            Some(initializer) => initializer,
            None if target == Type::Image && name_def.dimension.is_none() => {
                return Error::type_error(
                    format!("image {} needs an initializer or a dimension", name_def.name),
                    declaration.location,
                );
            }
            None => return Ok(()),
        };

        let source = self.check_expr(&initializer.expr)?;

        match initializer.op {
            InitializerOp::Read => {
                self.check_read_source(&initializer.expr, source, target, declaration.location)?
            }
            InitializerOp::Assign if target == Type::Image => {
                if source != Type::Image && name_def.dimension.is_none() {
                    return Error::type_error(
                        format!(
                            "image {} initialized from {} needs a dimension",
                            name_def.name, source
                        ),
                        declaration.location,
                    );
                }
                self.check_image_value(&initializer.expr, source, declaration.location)?
            }
            InitializerOp::Assign => {
                self.check_assignable(&initializer.expr, target, source, declaration.location)?
            }
        }

        self.annotations.mark_initialized(id);
        Ok(())
    }

    fn check_statement(&mut self, statement: &Statement) -> Result<()> {
        match statement {
            Statement::Assignment(assignment) => self.check_assignment(assignment),
            Statement::Read(read) => self.check_read(read),
            Statement::Write(write) => self.check_write(write),
            Statement::Return(ret) => self.check_return(ret),
        }
    }

    fn check_assignment(&mut self, assignment: &AssignmentStatement) -> Result<()> {
        let (id, target) = self.target(&assignment.name, assignment.location)?;
        self.annotations.bind(assignment.id, id);

        match &assignment.selector {
            Some(selector) => {
                if target != Type::Image {
                    return Error::type_error(
                        format!(
                            "pixel selector needs an IMAGE target but {} is {}",
                            assignment.name, target
                        ),
                        assignment.location,
                    );
                }
                self.check_pixel_assignment(assignment, selector)?;
            }
            None => {
                let source = self.check_expr(&assignment.expr)?;

                if target == Type::Image {
                    self.check_image_value(&assignment.expr, source, assignment.location)?;
                } else {
                    self.check_assignable(&assignment.expr, target, source, assignment.location)?;
                }
            }
        }

        self.annotations.mark_initialized(id);
        Ok(())
    }

    /// `m[x, y] = e` assigns `e` to every pixel; `x` and `y` are bound to
    /// the pixel coordinates while `e` is checked.
    fn check_pixel_assignment(
        &mut self,
        assignment: &AssignmentStatement,
        selector: &PixelSelector,
    ) -> Result<()> {
        let (x, y) = match (selector.x.as_ident(), selector.y.as_ident()) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                return Error::type_error(
                    "pixel selector on the left of an assignment must be two identifiers",
                    selector.location,
                )
            }
        };

        if x == y {
            return Error::type_error(
                format!("pixel selector uses {} for both coordinates", x),
                selector.location,
            );
        }

        for name in &[x, y] {
            if self.symbols.lookup(name).is_some() {
                return Error::type_error(
                    format!("pixel selector variable {} is already declared", name),
                    selector.location,
                );
            }
        }

        self.symbols.push_scope();
        let result = self.check_pixel_scope(assignment, selector, x, y);
        self.symbols.pop_scope();
        result
    }

    fn check_pixel_scope(
        &mut self,
        assignment: &AssignmentStatement,
        selector: &PixelSelector,
        x: &str,
        y: &str,
    ) -> Result<()> {
        for (name, expr) in &[(x, &selector.x), (y, &selector.y)] {
            let id = self.annotations.add_declaration(Declaration {
                name: name.to_string(),
                ty: Type::Int,
                dimension: None,
                initialized: true,
                kind: DeclarationKind::PixelIndex,
                location: expr.location,
            });
            self.symbols.insert(name, id);
        }

        self.check_pixel_selector(selector)?;

        let source = self.check_expr(&assignment.expr)?;
        if !coercion::is_pixel_value(source) {
            return Error::type_error(
                format!("can't store {} in a pixel", source),
                assignment.location,
            );
        }

        self.coerce(&assignment.expr, Type::Color);
        Ok(())
    }

    fn check_read(&mut self, read: &ReadStatement) -> Result<()> {
        let (id, target) = self.target(&read.name, read.location)?;
        self.annotations.bind(read.id, id);

        if let Some(selector) = &read.selector {
            return Error::type_error(
                "pixel selector is not allowed on the target of a read",
                selector.location,
            );
        }

        let source = self.check_expr(&read.source)?;
        self.check_read_source(&read.source, source, target, read.location)?;

        self.annotations.mark_initialized(id);
        Ok(())
    }

    fn check_write(&mut self, write: &WriteStatement) -> Result<()> {
        let source = self.check_expr(&write.source)?;
        let dest = self.check_expr(&write.dest)?;

        if dest != Type::String && dest != Type::Console {
            return Error::type_error(
                format!("can't write to {}", dest),
                write.dest.location,
            );
        }

        if source == Type::Console {
            return Error::type_error("can't write the console", write.source.location);
        }

        Ok(())
    }

    fn check_return(&mut self, ret: &ReturnStatement) -> Result<()> {
        let ty = self.check_expr(&ret.expr)?;

        if ty != self.return_type {
            return Error::type_error(
                format!(
                    "return type mismatch: expected {}, found {}",
                    self.return_type, ty
                ),
                ret.location,
            );
        }

        Ok(())
    }

    fn target(&self, name: &str, location: SourceLocation) -> Result<(DeclId, Type)> {
        let id = self
            .symbols
            .lookup(name)
            .ok_or_else(|| Error::undefined(name, location))?;
        let declaration = self
            .annotations
            .declaration(id)
            .ok_or_else(|| Error::undefined(name, location))?;

        Ok((id, declaration.ty))
    }

    // `<-` reads from a file name or the console
    fn check_read_source(
        &mut self,
        expr: &Expr,
        source: Type,
        target: Type,
        location: SourceLocation,
    ) -> Result<()> {
        if source != Type::String && source != Type::Console {
            return Error::type_error(
                format!("can't read from {}", source),
                location,
            );
        }

        if source != Type::String {
            self.coerce(expr, target);
        }

        Ok(())
    }

    fn check_image_value(&mut self, expr: &Expr, source: Type, location: SourceLocation) -> Result<()> {
        match coercion::image_value(source) {
            Some(Some(to)) => {
                self.coerce(expr, to);
                Ok(())
            }
            Some(None) => Ok(()),
            None => Error::type_error(format!("can't assign {} to an IMAGE", source), location),
        }
    }

    fn check_assignable(
        &mut self,
        expr: &Expr,
        target: Type,
        source: Type,
        location: SourceLocation,
    ) -> Result<()> {
        if !coercion::assignment_compatible(target, source) {
            return Error::type_error(
                format!("can't assign {} to {}", source, target),
                location,
            );
        }

        if target != source {
            self.coerce(expr, target);
        }

        Ok(())
    }

    fn coerce(&mut self, expr: &Expr, to: Type) {
        self.annotations.set_coercion(expr.id, to);
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}
