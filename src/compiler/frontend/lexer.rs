pub mod error;
pub mod escape;
pub mod state;
pub mod token;

pub use error::{Error, ErrorKind};
pub use token::{NamedColor, Token, TokenKind};

use crate::compiler::source_location::SourceLocation;
use state::{Action, Lexeme, State};
use std::iter::Peekable;
use std::str::Chars;

pub type Result<T> = std::result::Result<T, Error>;

pub const TAB_WIDTH: usize = 3;

/// The token stream of one source text.
///
/// Scanning happens eagerly in `Lexer::new`. The stream always ends in
/// either an `EOF` token or, if scanning failed, an `ERROR` token carrying
/// the offending text. Reading the `ERROR` token through `next` or `peek`
/// raises the recorded error; tokens before it stay readable.
#[derive(Debug, Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    failure: Option<Error>,
    position: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        let mut scanner = Scanner::new(source);
        let failure = scanner.run().err();

        log::debug!(
            "lexer produced {} tokens{}",
            scanner.tokens.len(),
            if failure.is_some() { " (failed)" } else { "" }
        );

        Lexer {
            tokens: scanner.tokens,
            failure,
            position: 0,
        }
    }

    /// Scan `source` completely. The returned tokens end with exactly one `EOF`.
    pub fn tokenize(source: &str) -> Result<Vec<Token>> {
        let lexer = Lexer::new(source);

        match lexer.failure {
            Some(e) => Err(e),
            None => Ok(lexer.tokens),
        }
    }

    /// Consume and return the current token. Once the end is reached every
    /// call returns the `EOF` token again.
    pub fn next(&mut self) -> Result<Token> {
        let token = self.current()?.clone();

        if !token.is(TokenKind::Eof) {
            self.position += 1;
        }

        Ok(token)
    }

    /// The token `next` would return, without consuming it.
    pub fn peek(&self) -> Result<&Token> {
        self.current()
    }

    fn current(&self) -> Result<&Token> {
        let token = &self.tokens[self.position];

        match (&self.failure, token.kind) {
            (Some(e), TokenKind::Error) => Err(e.clone()),
            _ => Ok(token),
        }
    }
}

struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    state: State,
    pending: String,
    // start of the pending lexeme
    start: SourceLocation,
    // location of the next character
    location: SourceLocation,
    after_carriage_return: bool,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Scanner {
            chars: source.chars().peekable(),
            state: State::Start,
            pending: String::new(),
            start: SourceLocation::default(),
            location: SourceLocation::default(),
            after_carriage_return: false,
            tokens: vec![],
        }
    }

    fn run(&mut self) -> Result<()> {
        loop {
            let c = match self.chars.peek() {
                Some(&c) => c,
                None => break,
            };

            let (next, action) = state::step(self.state, c);
            self.state = next;

            match action {
                Action::Skip => self.advance(c),
                Action::Shift => self.shift(c),
                Action::Accept(lexeme) => {
                    self.shift(c);
                    self.emit(lexeme)?;
                }
                Action::Yield(lexeme) => self.emit(lexeme)?,
                Action::Reject(kind) => {
                    // a rejected lexeme is reported where it starts
                    let location = if self.pending.is_empty() {
                        self.location
                    } else {
                        self.start
                    };
                    let mut text = std::mem::take(&mut self.pending);
                    text.push(c);
                    return Err(self.fail(kind, location, text));
                }
            }
        }

        match state::end_of_input(self.state) {
            Ok(Some(lexeme)) => self.emit(lexeme)?,
            Ok(None) => (),
            Err(kind) => {
                let text = std::mem::take(&mut self.pending);
                return Err(self.fail(kind, self.start, text));
            }
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, "", self.location));
        Ok(())
    }

    fn shift(&mut self, c: char) {
        if self.pending.is_empty() {
            self.start = self.location;
        }
        self.pending.push(c);
        self.advance(c);
    }

    fn advance(&mut self, c: char) {
        self.chars.next();

        match c {
            '\n' if self.after_carriage_return => (),
            '\n' | '\r' => {
                self.location.row += 1;
                self.location.column = 0;
            }
            '\t' => self.location.column += TAB_WIDTH,
            _ => self.location.column += 1,
        }

        self.after_carriage_return = c == '\r';
    }

    fn emit(&mut self, lexeme: Lexeme) -> Result<()> {
        let text = std::mem::take(&mut self.pending);

        let kind = match lexeme {
            Lexeme::Word => TokenKind::keyword_or_identifier(&text),
            Lexeme::Int => {
                if text.parse::<i32>().is_err() {
                    let kind = ErrorKind::IntegerOverflow(text.clone());
                    return Err(self.fail(kind, self.start, text));
                }
                TokenKind::IntLit
            }
            Lexeme::Float => TokenKind::FloatLit,
            Lexeme::Fixed(kind) => kind,
        };

        log::trace!("token {} {:?} at {}", kind, text, self.start);
        self.tokens.push(Token::new(kind, text, self.start));
        Ok(())
    }

    fn fail(&mut self, kind: ErrorKind, location: SourceLocation, text: String) -> Error {
        log::trace!("lexical error {} at {}", kind, location);
        self.tokens.push(Token::new(TokenKind::Error, text, location));
        Error::new(kind, location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matches::assert_matches;
    use TokenKind::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn assert_token(token: &Token, kind: TokenKind, row: usize, column: usize) {
        assert_eq!(token.kind, kind, "unexpected kind for {:?}", token);
        assert_eq!(
            token.location,
            SourceLocation::new(row, column),
            "unexpected location for {:?}",
            token
        );
    }

    fn error_kind(source: &str) -> ErrorKind {
        Lexer::tokenize(source).unwrap_err().kind
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(kinds(""), vec![Eof]);
        assert_eq!(kinds("  \t\n\r\n"), vec![Eof]);
    }

    #[test]
    fn test_single_char_positions() {
        let tokens = Lexer::tokenize("+\n-\n*/\n[;]").unwrap();

        assert_token(&tokens[0], Plus, 0, 0);
        assert_token(&tokens[1], Minus, 1, 0);
        assert_token(&tokens[2], Times, 2, 0);
        assert_token(&tokens[3], Div, 2, 1);
        assert_token(&tokens[4], LSquare, 3, 0);
        assert_token(&tokens[5], Semi, 3, 1);
        assert_token(&tokens[6], RSquare, 3, 2);
        assert_eq!(tokens[7].kind, Eof);
    }

    #[test]
    fn test_identifier_positions() {
        let tokens = Lexer::tokenize("abc\n  def\n     ghi").unwrap();

        assert_token(&tokens[0], Ident, 0, 0);
        assert_token(&tokens[1], Ident, 1, 2);
        assert_token(&tokens[2], Ident, 2, 5);
        assert_eq!(tokens[2].text, "ghi");
    }

    #[test]
    fn test_tab_advances_three_columns() {
        let tokens = Lexer::tokenize("\ta\t\tb").unwrap();

        assert_token(&tokens[0], Ident, 0, 3);
        assert_token(&tokens[1], Ident, 0, 10);
    }

    #[test]
    fn test_line_terminators() {
        let tokens = Lexer::tokenize("a\r\nb\rc\nd").unwrap();

        assert_token(&tokens[0], Ident, 0, 0);
        assert_token(&tokens[1], Ident, 1, 0);
        assert_token(&tokens[2], Ident, 2, 0);
        assert_token(&tokens[3], Ident, 3, 0);
    }

    #[test]
    fn test_equals() {
        let tokens = Lexer::tokenize("= == ===").unwrap();

        assert_token(&tokens[0], Assign, 0, 0);
        assert_token(&tokens[1], Equals, 0, 2);
        assert_token(&tokens[2], Equals, 0, 5);
        assert_token(&tokens[3], Assign, 0, 7);
    }

    #[test]
    fn test_two_char_operators() {
        assert_eq!(
            kinds("<< <= <- < >> >= > -> - != !"),
            vec![LAngle, Le, LArrow, Lt, RAngle, Ge, Gt, RArrow, Minus, NotEquals, Bang, Eof]
        );
        assert_eq!(kinds("!!="), vec![Bang, NotEquals, Eof]);
        assert_eq!(kinds("-->"), vec![Minus, RArrow, Eof]);
        assert_eq!(kinds("<<<"), vec![LAngle, Lt, Eof]);
        assert_eq!(kinds("a<-b"), vec![Ident, LArrow, Ident, Eof]);
    }

    #[test]
    fn test_operator_at_end_of_input() {
        assert_eq!(kinds("="), vec![Assign, Eof]);
        assert_eq!(kinds("x -"), vec![Ident, Minus, Eof]);
    }

    #[test]
    fn test_reserved_words() {
        let tokens = Lexer::tokenize("if else\nstring water = i\ngetGreen()").unwrap();

        assert_token(&tokens[0], KwIf, 0, 0);
        assert_token(&tokens[1], KwElse, 0, 3);
        assert_token(&tokens[2], Type, 1, 0);
        assert_eq!(tokens[2].text, "string");
        assert_token(&tokens[3], Ident, 1, 7);
        assert_token(&tokens[4], Assign, 1, 13);
        assert_token(&tokens[5], Ident, 1, 15);
        assert_token(&tokens[6], ColorOp, 2, 0);
        assert_token(&tokens[7], LParen, 2, 8);
        assert_token(&tokens[8], RParen, 2, 9);
    }

    #[test]
    fn test_identifiers_and_numbers() {
        let tokens = Lexer::tokenize("a123 456b $x_1").unwrap();

        assert_token(&tokens[0], Ident, 0, 0);
        assert_token(&tokens[1], IntLit, 0, 5);
        assert_eq!(tokens[1].int_value(), Some(456));
        assert_token(&tokens[2], Ident, 0, 8);
        assert_eq!(tokens[3].text, "$x_1");
    }

    #[test]
    fn test_integer_boundaries() {
        let tokens = Lexer::tokenize("2147483647").unwrap();
        assert_eq!(tokens[0].int_value(), Some(i32::MAX));

        assert_eq!(
            error_kind("2147483648"),
            ErrorKind::IntegerOverflow("2147483648".to_string())
        );
    }

    #[test]
    fn test_leading_zero() {
        assert_eq!(kinds("0"), vec![IntLit, Eof]);

        let tokens = Lexer::tokenize("00").unwrap();
        assert_token(&tokens[0], IntLit, 0, 0);
        assert_token(&tokens[1], IntLit, 0, 1);
        assert_eq!(tokens[1].text, "0");

        assert_eq!(error_kind("01"), ErrorKind::LeadingZero);
    }

    #[test]
    fn test_floats() {
        let tokens = Lexer::tokenize("0.5 12.25\n0.0").unwrap();

        assert_token(&tokens[0], FloatLit, 0, 0);
        assert_eq!(tokens[0].float_value(), Some(0.5));
        assert_token(&tokens[1], FloatLit, 0, 4);
        assert_token(&tokens[2], FloatLit, 1, 0);

        assert_eq!(error_kind("0.5.5"), ErrorKind::IllegalCharacter('.'));
    }

    #[test]
    fn test_dot_without_digits() {
        assert_eq!(error_kind("1."), ErrorKind::MissingFractionDigits);
        assert_eq!(error_kind("0.x"), ErrorKind::MissingFractionDigits);
    }

    #[test]
    fn test_strings() {
        let tokens = Lexer::tokenize("\"This is a string\"\n#this is a comment\n*").unwrap();

        assert_token(&tokens[0], StringLit, 0, 0);
        assert_eq!(tokens[0].text, "\"This is a string\"");
        assert_eq!(tokens[0].string_value(), Some("This is a string".to_string()));
        assert_token(&tokens[1], Times, 2, 0);
        assert_eq!(tokens[2].kind, Eof);
    }

    #[test]
    fn test_string_escapes() {
        let tokens = Lexer::tokenize(r#""a\"b\\c\n""#).unwrap();

        assert_eq!(tokens[0].text, r#""a\"b\\c\n""#);
        assert_eq!(tokens[0].string_value(), Some("a\"b\\c\n".to_string()));
        assert_eq!(error_kind(r#""bad \q""#), ErrorKind::InvalidEscape('q'));
    }

    #[test]
    fn test_multiline_string_keeps_opening_location() {
        let tokens = Lexer::tokenize("x \"one\ntwo\" y").unwrap();

        assert_token(&tokens[1], StringLit, 0, 2);
        assert_token(&tokens[2], Ident, 1, 5);
    }

    #[test]
    fn test_unterminated_string() {
        let e = Lexer::tokenize("a \"never closed").unwrap_err();

        assert_eq!(e.kind, ErrorKind::UnterminatedString);
        assert_eq!(e.location, SourceLocation::new(0, 2));
    }

    #[test]
    fn test_comment_at_end_of_input() {
        assert_eq!(kinds("a # trailing"), vec![Ident, Eof]);
        assert_eq!(kinds("# only\r\nb"), vec![Ident, Eof]);
    }

    #[test]
    fn test_illegal_character_is_fail_fast() {
        let mut lexer = Lexer::new("abc\n@ def");

        let first = lexer.next().unwrap();
        assert_eq!(first.text, "abc");

        let e = lexer.next().unwrap_err();
        assert_eq!(e.kind, ErrorKind::IllegalCharacter('@'));
        assert_eq!(e.location, SourceLocation::new(1, 0));

        assert_matches!(lexer.peek(), Err(_));
        assert_matches!(lexer.next(), Err(_));
    }

    #[test]
    fn test_rejected_lexeme_is_located_at_its_start() {
        let lexer = Lexer::new("  01");
        let token = lexer.tokens.last().unwrap();
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.text, "01");
        assert_eq!(token.location, SourceLocation::new(0, 2));
        assert_eq!(Lexer::tokenize("  01").unwrap_err().location, SourceLocation::new(0, 2));

        let e = Lexer::tokenize("  1.x").unwrap_err();
        assert_eq!(e.kind, ErrorKind::MissingFractionDigits);
        assert_eq!(e.location, SourceLocation::new(0, 2));
    }

    #[test]
    fn test_error_token_carries_offending_text() {
        let lexer = Lexer::new("int 01");

        assert_eq!(lexer.tokens.last().map(|t| t.kind), Some(TokenKind::Error));
        assert_eq!(lexer.tokens.last().map(|t| t.text.as_str()), Some("01"));
    }

    #[test]
    fn test_next_is_idempotent_at_end() {
        let mut lexer = Lexer::new("x");

        assert_eq!(lexer.next().unwrap().kind, Ident);
        assert_eq!(lexer.next().unwrap().kind, Eof);
        assert_eq!(lexer.next().unwrap().kind, Eof);
        assert_eq!(lexer.peek().unwrap().kind, Eof);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut lexer = Lexer::new("a b");

        assert_eq!(lexer.peek().unwrap().text, "a");
        assert_eq!(lexer.peek().unwrap().text, "a");
        assert_eq!(lexer.next().unwrap().text, "a");
        assert_eq!(lexer.peek().unwrap().text, "b");
    }

    #[quickcheck]
    fn test_peek_is_idempotent(source: String, peeks: u8) -> bool {
        let mut lexer = Lexer::new(&source);
        let _ = lexer.next();
        let first = lexer.peek().map(|t| t.clone());

        (0..peeks % 8).all(|_| lexer.peek().map(|t| t.clone()) == first)
    }

    #[quickcheck]
    fn test_tokenize_ends_with_single_eof(source: String) -> bool {
        match Lexer::tokenize(&source) {
            Ok(tokens) => {
                tokens.last().map(|t| t.kind) == Some(Eof)
                    && tokens.iter().filter(|t| t.kind == Eof).count() == 1
            }
            Err(_) => true,
        }
    }
}
