//! Results of type checking, kept next to the tree rather than inside it.

use crate::compiler::frontend::parser::ast::{Dimension, Expr, NodeId, Program};
use crate::compiler::frontend::types::Type;
use crate::compiler::source_location::{HasSourceLocation, SourceLocation};
use rustc_hash::FxHashMap;

/// Index into the declaration arena of one [`Annotations`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprType {
    pub resolved: Type,
    /// Present only if it differs from `resolved`.
    pub coerce_to: Option<Type>,
}

impl ExprType {
    /// The type of the value after coercion.
    pub fn effective(&self) -> Type {
        self.coerce_to.unwrap_or(self.resolved)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Parameter,
    Variable,
    /// `x` or `y` of a pixel selector on the left of an assignment; only in
    /// scope while that assignment is checked.
    PixelIndex,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub ty: Type,
    pub dimension: Option<Dimension>,
    pub initialized: bool,
    pub kind: DeclarationKind,
    pub location: SourceLocation,
}

impl HasSourceLocation for Declaration {
    fn source_location(&self) -> &SourceLocation {
        &self.location
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotations {
    types: FxHashMap<NodeId, ExprType>,
    bindings: FxHashMap<NodeId, DeclId>,
    declarations: Vec<Declaration>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expr_type(&self, expr: &Expr) -> Option<&ExprType> {
        self.types.get(&expr.id)
    }

    pub fn resolved_type(&self, expr: &Expr) -> Option<Type> {
        self.expr_type(expr).map(|t| t.resolved)
    }

    pub fn coerce_to(&self, expr: &Expr) -> Option<Type> {
        self.expr_type(expr).and_then(|t| t.coerce_to)
    }

    /// The declaration an identifier use, a name definition or an
    /// assignment or read target refers to.
    pub fn binding(&self, node: NodeId) -> Option<&Declaration> {
        self.bindings
            .get(&node)
            .and_then(|id| self.declaration(*id))
    }

    pub fn declaration(&self, id: DeclId) -> Option<&Declaration> {
        self.declarations.get(id.0)
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub(super) fn set_resolved(&mut self, node: NodeId, ty: Type) {
        self.types.insert(
            node,
            ExprType {
                resolved: ty,
                coerce_to: None,
            },
        );
    }

    // a later coercion replaces an earlier one
    pub(super) fn set_coercion(&mut self, node: NodeId, ty: Type) {
        if let Some(expr_type) = self.types.get_mut(&node) {
            expr_type.coerce_to = if expr_type.resolved == ty { None } else { Some(ty) };
        }
    }

    pub(super) fn bind(&mut self, node: NodeId, decl: DeclId) {
        self.bindings.insert(node, decl);
    }

    pub(super) fn add_declaration(&mut self, declaration: Declaration) -> DeclId {
        self.declarations.push(declaration);
        DeclId(self.declarations.len() - 1)
    }

    pub(super) fn mark_initialized(&mut self, id: DeclId) {
        if let Some(declaration) = self.declarations.get_mut(id.0) {
            declaration.initialized = true;
        }
    }
}

/// A program that passed type checking, together with its annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedProgram {
    pub program: Program,
    pub annotations: Annotations,
}

impl CheckedProgram {
    pub fn resolved_type(&self, expr: &Expr) -> Option<Type> {
        self.annotations.resolved_type(expr)
    }

    pub fn coerce_to(&self, expr: &Expr) -> Option<Type> {
        self.annotations.coerce_to(expr)
    }

    pub fn binding(&self, node: NodeId) -> Option<&Declaration> {
        self.annotations.binding(node)
    }
}
