//! The abstract syntax tree.
//!
//! The tree is immutable once built. Every node that later passes need to
//! say something about (expressions, name definitions, pixel selectors and
//! the targets of assignments and reads) carries a `NodeId` that is unique
//! within one program. Passes record their results in side tables keyed by
//! these ids instead of mutating the tree.

use crate::compiler::frontend::lexer::escape;
use crate::compiler::frontend::lexer::{NamedColor, Token, TokenKind};
use crate::compiler::frontend::types::Type;
use crate::compiler::source_location::{HasSourceLocation, SourceLocation};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub id: NodeId,
    pub kind: ExprKind,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    BooleanLit(bool),
    /// The decoded value, without quotes.
    StringLit(String),
    IntLit(i32),
    FloatLit(f32),
    ColorConst(NamedColor),
    Console,
    Color {
        red: Box<Expr>,
        green: Box<Expr>,
        blue: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Ident(String),
    Conditional {
        condition: Box<Expr>,
        true_case: Box<Expr>,
        false_case: Box<Expr>,
    },
    /// `image[x, y]`
    UnaryPostfix {
        image: Box<Expr>,
        selector: Box<PixelSelector>,
    },
}

impl Expr {
    pub fn new(id: NodeId, kind: ExprKind, location: SourceLocation) -> Self {
        Expr { id, kind, location }
    }

    /// The identifier, if this is an identifier expression.
    pub fn as_ident(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Ident(name) => Some(name),
            _ => None,
        }
    }
}

impl HasSourceLocation for Expr {
    fn source_location(&self) -> &SourceLocation {
        &self.location
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorComponent {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageProperty {
    Width,
    Height,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    Negate,
    Component(ColorComponent),
    Property(ImageProperty),
}

impl UnaryOp {
    pub fn from_token(token: &Token) -> Option<UnaryOp> {
        let op = match (token.kind, token.text.as_str()) {
            (TokenKind::Bang, _) => UnaryOp::Not,
            (TokenKind::Minus, _) => UnaryOp::Negate,
            (TokenKind::ColorOp, "getRed") => UnaryOp::Component(ColorComponent::Red),
            (TokenKind::ColorOp, "getGreen") => UnaryOp::Component(ColorComponent::Green),
            (TokenKind::ColorOp, "getBlue") => UnaryOp::Component(ColorComponent::Blue),
            (TokenKind::ImageOp, "getWidth") => UnaryOp::Property(ImageProperty::Width),
            (TokenKind::ImageOp, "getHeight") => UnaryOp::Property(ImageProperty::Height),
            _ => return None,
        };

        Some(op)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Negate => "-",
            UnaryOp::Component(ColorComponent::Red) => "getRed",
            UnaryOp::Component(ColorComponent::Green) => "getGreen",
            UnaryOp::Component(ColorComponent::Blue) => "getBlue",
            UnaryOp::Property(ImageProperty::Width) => "getWidth",
            UnaryOp::Property(ImageProperty::Height) => "getHeight",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    And,
    Lt,
    Gt,
    Equals,
    NotEquals,
    Le,
    Ge,
    Plus,
    Minus,
    Times,
    Div,
    Mod,
}

impl BinaryOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<BinaryOp> {
        let op = match kind {
            TokenKind::Or => BinaryOp::Or,
            TokenKind::And => BinaryOp::And,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::Equals => BinaryOp::Equals,
            TokenKind::NotEquals => BinaryOp::NotEquals,
            TokenKind::Le => BinaryOp::Le,
            TokenKind::Ge => BinaryOp::Ge,
            TokenKind::Plus => BinaryOp::Plus,
            TokenKind::Minus => BinaryOp::Minus,
            TokenKind::Times => BinaryOp::Times,
            TokenKind::Div => BinaryOp::Div,
            TokenKind::Mod => BinaryOp::Mod,
            _ => return None,
        };

        Some(op)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Or => "|",
            BinaryOp::And => "&",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Times => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        }
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOp::Or | BinaryOp::And)
    }

    pub fn is_equality(&self) -> bool {
        matches!(self, BinaryOp::Equals | BinaryOp::NotEquals)
    }

    pub fn is_relational(&self) -> bool {
        matches!(self, BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge)
    }

    pub fn is_additive(&self) -> bool {
        matches!(self, BinaryOp::Plus | BinaryOp::Minus)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `[x, y]`, either selecting a pixel of an image expression or, on the
/// left of an assignment, introducing the pixel index variables.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSelector {
    pub id: NodeId,
    pub x: Expr,
    pub y: Expr,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub id: NodeId,
    pub width: Expr,
    pub height: Expr,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NameDef {
    pub id: NodeId,
    pub ty: Type,
    pub name: String,
    pub dimension: Option<Dimension>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitializerOp {
    /// `=`
    Assign,
    /// `<-`
    Read,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Initializer {
    pub op: InitializerOp,
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclaration {
    pub name_def: NameDef,
    pub initializer: Option<Initializer>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStatement {
    pub id: NodeId,
    pub name: String,
    pub selector: Option<PixelSelector>,
    pub expr: Expr,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadStatement {
    pub id: NodeId,
    pub name: String,
    pub selector: Option<PixelSelector>,
    pub source: Expr,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteStatement {
    pub source: Expr,
    pub dest: Expr,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub expr: Expr,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(AssignmentStatement),
    Read(ReadStatement),
    Write(WriteStatement),
    Return(ReturnStatement),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Declaration(VarDeclaration),
    Statement(Statement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub return_type: Type,
    pub name: String,
    pub params: Vec<NameDef>,
    pub items: Vec<Item>,
    pub location: SourceLocation,
}

impl HasSourceLocation for Statement {
    fn source_location(&self) -> &SourceLocation {
        match self {
            Statement::Assignment(s) => &s.location,
            Statement::Read(s) => &s.location,
            Statement::Write(s) => &s.location,
            Statement::Return(s) => &s.location,
        }
    }
}

impl HasSourceLocation for Item {
    fn source_location(&self) -> &SourceLocation {
        match self {
            Item::Declaration(d) => &d.location,
            Item::Statement(s) => s.source_location(),
        }
    }
}

impl HasSourceLocation for NameDef {
    fn source_location(&self) -> &SourceLocation {
        &self.location
    }
}

impl HasSourceLocation for Program {
    fn source_location(&self) -> &SourceLocation {
        &self.location
    }
}

// The printer writes programs back in concrete syntax. Binary, unary and
// conditional expressions are fully parenthesized so the output shows how
// the parser grouped them.

fn keyword(ty: Type) -> &'static str {
    ty.keyword().unwrap_or("?")
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::BooleanLit(value) => write!(f, "{}", value),
            ExprKind::StringLit(value) => write!(f, "\"{}\"", escape::encode(value)),
            ExprKind::IntLit(value) => write!(f, "{}", value),
            ExprKind::FloatLit(value) => write!(f, "{:?}", value),
            ExprKind::ColorConst(color) => write!(f, "{}", color),
            ExprKind::Console => f.write_str("console"),
            ExprKind::Color { red, green, blue } => write!(f, "<<{}, {}, {}>>", red, green, blue),
            ExprKind::Unary { op, operand } => match op {
                UnaryOp::Not | UnaryOp::Negate => write!(f, "({}{})", op, operand),
                _ => write!(f, "({} {})", op, operand),
            },
            ExprKind::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
            ExprKind::Ident(name) => f.write_str(name),
            ExprKind::Conditional {
                condition,
                true_case,
                false_case,
            } => write!(
                f,
                "(if ({}) {} else {} fi)",
                condition, true_case, false_case
            ),
            ExprKind::UnaryPostfix { image, selector } => write!(f, "{}{}", image, selector),
        }
    }
}

impl fmt::Display for PixelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.width, self.height)
    }
}

impl fmt::Display for NameDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(keyword(self.ty))?;

        if let Some(dimension) = &self.dimension {
            write!(f, "{}", dimension)?;
        }

        write!(f, " {}", self.name)
    }
}

impl fmt::Display for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            InitializerOp::Assign => write!(f, " = {}", self.expr),
            InitializerOp::Read => write!(f, " <- {}", self.expr),
        }
    }
}

fn write_target(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    selector: &Option<PixelSelector>,
) -> fmt::Result {
    f.write_str(name)?;

    match selector {
        Some(selector) => write!(f, "{}", selector),
        None => Ok(()),
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assignment(s) => {
                write_target(f, &s.name, &s.selector)?;
                write!(f, " = {}", s.expr)
            }
            Statement::Read(s) => {
                write_target(f, &s.name, &s.selector)?;
                write!(f, " <- {}", s.source)
            }
            Statement::Write(s) => write!(f, "write {} -> {}", s.source, s.dest),
            Statement::Return(s) => write!(f, "^ {}", s.expr),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Declaration(d) => {
                write!(f, "{}", d.name_def)?;

                match &d.initializer {
                    Some(initializer) => write!(f, "{}", initializer),
                    None => Ok(()),
                }
            }
            Item::Statement(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", keyword(self.return_type), self.name)?;

        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }

        writeln!(f, ")")?;

        for item in &self.items {
            writeln!(f, "{};", item)?;
        }

        Ok(())
    }
}
