use super::escape;
use crate::compiler::source_location::{HasSourceLocation, SourceLocation};
use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// The closed set of token kinds.
///
/// The `Display` implementation yields the canonical upper case names
/// (`LPAREN`, `INT_LIT`, ...), which is also what syntax errors report.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // structural
    LParen,
    RParen,
    LSquare,
    RSquare,
    Comma,
    Semi,
    Eof,
    Error,
    // operators
    Plus,
    Minus,
    Times,
    Div,
    Mod,
    And,
    Or,
    Bang,
    Assign,
    Equals,
    NotEquals,
    Lt,
    Le,
    Gt,
    Ge,
    LAngle,
    RAngle,
    LArrow,
    RArrow,
    Return,
    // literals
    BooleanLit,
    StringLit,
    IntLit,
    FloatLit,
    Ident,
    // reserved
    Type,
    KwVoid,
    KwIf,
    KwElse,
    KwFi,
    KwWrite,
    KwConsole,
    ColorConst,
    ColorOp,
    ImageOp,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        use TokenKind::*;

        match self {
            LParen => "LPAREN",
            RParen => "RPAREN",
            LSquare => "LSQUARE",
            RSquare => "RSQUARE",
            Comma => "COMMA",
            Semi => "SEMI",
            Eof => "EOF",
            Error => "ERROR",
            Plus => "PLUS",
            Minus => "MINUS",
            Times => "TIMES",
            Div => "DIV",
            Mod => "MOD",
            And => "AND",
            Or => "OR",
            Bang => "BANG",
            Assign => "ASSIGN",
            Equals => "EQUALS",
            NotEquals => "NOT_EQUALS",
            Lt => "LT",
            Le => "LE",
            Gt => "GT",
            Ge => "GE",
            LAngle => "LANGLE",
            RAngle => "RANGLE",
            LArrow => "LARROW",
            RArrow => "RARROW",
            Return => "RETURN",
            BooleanLit => "BOOLEAN_LIT",
            StringLit => "STRING_LIT",
            IntLit => "INT_LIT",
            FloatLit => "FLOAT_LIT",
            Ident => "IDENT",
            Type => "TYPE",
            KwVoid => "KW_VOID",
            KwIf => "KW_IF",
            KwElse => "KW_ELSE",
            KwFi => "KW_FI",
            KwWrite => "KW_WRITE",
            KwConsole => "KW_CONSOLE",
            ColorConst => "COLOR_CONST",
            ColorOp => "COLOR_OP",
            ImageOp => "IMAGE_OP",
        }
    }

    /// Kind of a single character symbol that never starts a longer operator.
    pub fn single_char(c: char) -> Option<TokenKind> {
        use TokenKind::*;

        let kind = match c {
            '(' => LParen,
            ')' => RParen,
            '[' => LSquare,
            ']' => RSquare,
            ',' => Comma,
            ';' => Semi,
            '+' => Plus,
            '*' => Times,
            '/' => Div,
            '%' => Mod,
            '&' => And,
            '|' => Or,
            '^' => Return,
            _ => return None,
        };

        Some(kind)
    }

    /// Kind of an identifier-shaped lexeme: either a reserved word or `IDENT`.
    pub fn keyword_or_identifier(text: &str) -> TokenKind {
        RESERVED.get(text).copied().unwrap_or(TokenKind::Ident)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

lazy_static! {
    static ref RESERVED: FxHashMap<&'static str, TokenKind> = {
        use TokenKind::*;

        let mut words = FxHashMap::default();
        for ty in &["string", "int", "float", "boolean", "color", "image"] {
            words.insert(*ty, Type);
        }
        words.insert("void", KwVoid);
        words.insert("getWidth", ImageOp);
        words.insert("getHeight", ImageOp);
        words.insert("getRed", ColorOp);
        words.insert("getGreen", ColorOp);
        words.insert("getBlue", ColorOp);
        for color in NamedColor::ALL.iter() {
            words.insert(color.name(), ColorConst);
        }
        words.insert("true", BooleanLit);
        words.insert("false", BooleanLit);
        words.insert("if", KwIf);
        words.insert("else", KwElse);
        words.insert("fi", KwFi);
        words.insert("write", KwWrite);
        words.insert("console", KwConsole);
        words
    };
}

/// The predefined colors that can be written as `COLOR_CONST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Blue,
    Cyan,
    DarkGray,
    Gray,
    Green,
    LightGray,
    Magenta,
    Orange,
    Pink,
    Red,
    White,
    Yellow,
}

impl NamedColor {
    pub const ALL: [NamedColor; 13] = [
        NamedColor::Black,
        NamedColor::Blue,
        NamedColor::Cyan,
        NamedColor::DarkGray,
        NamedColor::Gray,
        NamedColor::Green,
        NamedColor::LightGray,
        NamedColor::Magenta,
        NamedColor::Orange,
        NamedColor::Pink,
        NamedColor::Red,
        NamedColor::White,
        NamedColor::Yellow,
    ];

    pub fn from_name(name: &str) -> Option<NamedColor> {
        NamedColor::ALL.iter().copied().find(|c| c.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            NamedColor::Black => "BLACK",
            NamedColor::Blue => "BLUE",
            NamedColor::Cyan => "CYAN",
            NamedColor::DarkGray => "DARK_GRAY",
            NamedColor::Gray => "GRAY",
            NamedColor::Green => "GREEN",
            NamedColor::LightGray => "LIGHT_GRAY",
            NamedColor::Magenta => "MAGENTA",
            NamedColor::Orange => "ORANGE",
            NamedColor::Pink => "PINK",
            NamedColor::Red => "RED",
            NamedColor::White => "WHITE",
            NamedColor::Yellow => "YELLOW",
        }
    }

    /// Red, green and blue components in the range `0..=255`.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0, 0, 0),
            NamedColor::Blue => (0, 0, 255),
            NamedColor::Cyan => (0, 255, 255),
            NamedColor::DarkGray => (64, 64, 64),
            NamedColor::Gray => (128, 128, 128),
            NamedColor::Green => (0, 255, 0),
            NamedColor::LightGray => (192, 192, 192),
            NamedColor::Magenta => (255, 0, 255),
            NamedColor::Orange => (255, 200, 0),
            NamedColor::Pink => (255, 175, 175),
            NamedColor::Red => (255, 0, 0),
            NamedColor::White => (255, 255, 255),
            NamedColor::Yellow => (255, 255, 0),
        }
    }
}

impl std::fmt::Display for NamedColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexeme.
///
/// `text` is the raw source text of the lexeme. For string literals this
/// includes the surrounding quotes and the escape sequences as written.
/// The typed accessors interpret the text lazily and return `None` for
/// tokens of another kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new<T: Into<String>>(kind: TokenKind, text: T, location: SourceLocation) -> Self {
        Token {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn int_value(&self) -> Option<i32> {
        match self.kind {
            TokenKind::IntLit => self.text.parse().ok(),
            _ => None,
        }
    }

    pub fn float_value(&self) -> Option<f32> {
        match self.kind {
            TokenKind::FloatLit => self.text.parse().ok(),
            _ => None,
        }
    }

    pub fn bool_value(&self) -> Option<bool> {
        match (self.kind, self.text.as_str()) {
            (TokenKind::BooleanLit, "true") => Some(true),
            (TokenKind::BooleanLit, "false") => Some(false),
            _ => None,
        }
    }

    /// The decoded value of a string literal: quotes stripped, escapes expanded.
    pub fn string_value(&self) -> Option<String> {
        match self.kind {
            TokenKind::StringLit => {
                let inner = self
                    .text
                    .strip_prefix('"')
                    .and_then(|t| t.strip_suffix('"'))?;
                Some(escape::decode(inner))
            }
            _ => None,
        }
    }

    pub fn color_value(&self) -> Option<NamedColor> {
        match self.kind {
            TokenKind::ColorConst => NamedColor::from_name(&self.text),
            _ => None,
        }
    }
}

impl HasSourceLocation for Token {
    fn source_location(&self) -> &SourceLocation {
        &self.location
    }
}
