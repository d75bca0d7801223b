//! The lexer's automaton.
//!
//! `step` is the transition function of the DFA. It looks at exactly one
//! character and tells the driver what to do with it; it never touches the
//! pending lexeme itself. `end_of_input` decides what happens to a pending
//! lexeme once the input is exhausted.

use super::error::ErrorKind;
use super::escape;
use super::token::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    InIdent,
    HaveZero,
    HaveDot,
    InFloat,
    InNum,
    InString,
    InStringEscape,
    InComment,
    HaveEq,
    HaveMinus,
    HaveLt,
    HaveGt,
    HaveBang,
}

/// How the pending text becomes a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    /// Reserved word or identifier, decided by table lookup.
    Word,
    /// Decimal integer, must fit into an `i32`.
    Int,
    Float,
    Fixed(TokenKind),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Consume the character without recording it.
    Skip,
    /// Consume the character and append it to the pending lexeme.
    Shift,
    /// Consume the character, append it and emit the pending lexeme.
    Accept(Lexeme),
    /// Emit the pending lexeme. The character is not consumed and will be
    /// examined again in `Start`.
    Yield(Lexeme),
    /// The character can neither continue nor start a lexeme.
    Reject(ErrorKind),
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

#[inline]
fn is_ident_part(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

#[inline]
fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

pub fn step(state: State, c: char) -> (State, Action) {
    use Action::*;
    use State::*;

    match state {
        Start => start(c),
        InIdent if is_ident_part(c) => (InIdent, Shift),
        InIdent => (Start, Yield(Lexeme::Word)),
        HaveZero => match c {
            '.' => (HaveDot, Shift),
            '1'..='9' => (Start, Reject(ErrorKind::LeadingZero)),
            _ => (Start, Yield(Lexeme::Int)),
        },
        HaveDot if c.is_ascii_digit() => (InFloat, Shift),
        HaveDot => (Start, Reject(ErrorKind::MissingFractionDigits)),
        InFloat if c.is_ascii_digit() => (InFloat, Shift),
        InFloat => (Start, Yield(Lexeme::Float)),
        InNum => match c {
            '0'..='9' => (InNum, Shift),
            '.' => (HaveDot, Shift),
            _ => (Start, Yield(Lexeme::Int)),
        },
        InString => match c {
            '"' => (Start, Accept(Lexeme::Fixed(TokenKind::StringLit))),
            '\\' => (InStringEscape, Shift),
            _ => (InString, Shift),
        },
        InStringEscape if escape::unescape(c).is_some() => (InString, Shift),
        InStringEscape => (Start, Reject(ErrorKind::InvalidEscape(c))),
        InComment if is_line_terminator(c) => (Start, Skip),
        InComment => (InComment, Skip),
        HaveEq => two_char(c, &[('=', TokenKind::Equals)], TokenKind::Assign),
        HaveMinus => two_char(c, &[('>', TokenKind::RArrow)], TokenKind::Minus),
        HaveLt => two_char(
            c,
            &[
                ('<', TokenKind::LAngle),
                ('=', TokenKind::Le),
                ('-', TokenKind::LArrow),
            ],
            TokenKind::Lt,
        ),
        HaveGt => two_char(
            c,
            &[('>', TokenKind::RAngle), ('=', TokenKind::Ge)],
            TokenKind::Gt,
        ),
        HaveBang => two_char(c, &[('=', TokenKind::NotEquals)], TokenKind::Bang),
    }
}

fn start(c: char) -> (State, Action) {
    use Action::*;
    use State::*;

    match c {
        ' ' | '\t' | '\n' | '\r' => (Start, Skip),
        '#' => (InComment, Skip),
        '"' => (InString, Shift),
        '0' => (HaveZero, Shift),
        '1'..='9' => (InNum, Shift),
        '=' => (HaveEq, Shift),
        '-' => (HaveMinus, Shift),
        '<' => (HaveLt, Shift),
        '>' => (HaveGt, Shift),
        '!' => (HaveBang, Shift),
        c if is_ident_start(c) => (InIdent, Shift),
        c => match TokenKind::single_char(c) {
            Some(kind) => (Start, Accept(Lexeme::Fixed(kind))),
            None => (Start, Reject(ErrorKind::IllegalCharacter(c))),
        },
    }
}

// maximal munch: take the second character if it completes an operator,
// otherwise emit the one character operator
fn two_char(c: char, completions: &[(char, TokenKind)], single: TokenKind) -> (State, Action) {
    match completions.iter().find(|(second, _)| *second == c) {
        Some((_, kind)) => (State::Start, Action::Accept(Lexeme::Fixed(*kind))),
        None => (State::Start, Action::Yield(Lexeme::Fixed(single))),
    }
}

/// What to do with the pending lexeme when the input ends in `state`.
pub fn end_of_input(state: State) -> Result<Option<Lexeme>, ErrorKind> {
    use State::*;

    match state {
        Start | InComment => Ok(None),
        InIdent => Ok(Some(Lexeme::Word)),
        HaveZero | InNum => Ok(Some(Lexeme::Int)),
        InFloat => Ok(Some(Lexeme::Float)),
        HaveDot => Err(ErrorKind::MissingFractionDigits),
        InString | InStringEscape => Err(ErrorKind::UnterminatedString),
        HaveEq => Ok(Some(Lexeme::Fixed(TokenKind::Assign))),
        HaveMinus => Ok(Some(Lexeme::Fixed(TokenKind::Minus))),
        HaveLt => Ok(Some(Lexeme::Fixed(TokenKind::Lt))),
        HaveGt => Ok(Some(Lexeme::Fixed(TokenKind::Gt))),
        HaveBang => Ok(Some(Lexeme::Fixed(TokenKind::Bang))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Action::*;
    use State::*;

    #[test]
    fn test_start_transitions() {
        assert_eq!(step(Start, '\t'), (Start, Skip));
        assert_eq!(step(Start, '#'), (InComment, Skip));
        assert_eq!(step(Start, '$'), (InIdent, Shift));
        assert_eq!(step(Start, '0'), (HaveZero, Shift));
        assert_eq!(step(Start, '7'), (InNum, Shift));
        assert_eq!(
            step(Start, '^'),
            (Start, Accept(Lexeme::Fixed(TokenKind::Return)))
        );
        assert_eq!(
            step(Start, '@'),
            (Start, Reject(ErrorKind::IllegalCharacter('@')))
        );
    }

    #[test]
    fn test_number_transitions() {
        assert_eq!(step(HaveZero, '.'), (HaveDot, Shift));
        assert_eq!(step(HaveZero, '0'), (Start, Yield(Lexeme::Int)));
        assert_eq!(step(HaveZero, '1'), (Start, Reject(ErrorKind::LeadingZero)));
        assert_eq!(step(InNum, '.'), (HaveDot, Shift));
        assert_eq!(step(InNum, 'x'), (Start, Yield(Lexeme::Int)));
        assert_eq!(
            step(HaveDot, ';'),
            (Start, Reject(ErrorKind::MissingFractionDigits))
        );
        assert_eq!(step(InFloat, '5'), (InFloat, Shift));
    }

    #[test]
    fn test_operator_transitions() {
        assert_eq!(
            step(HaveLt, '-'),
            (Start, Accept(Lexeme::Fixed(TokenKind::LArrow)))
        );
        assert_eq!(
            step(HaveLt, '<'),
            (Start, Accept(Lexeme::Fixed(TokenKind::LAngle)))
        );
        assert_eq!(step(HaveLt, ' '), (Start, Yield(Lexeme::Fixed(TokenKind::Lt))));
        assert_eq!(
            step(HaveMinus, '>'),
            (Start, Accept(Lexeme::Fixed(TokenKind::RArrow)))
        );
        assert_eq!(
            step(HaveBang, '!'),
            (Start, Yield(Lexeme::Fixed(TokenKind::Bang)))
        );
    }

    #[test]
    fn test_string_transitions() {
        assert_eq!(step(InString, '\n'), (InString, Shift));
        assert_eq!(step(InString, '\\'), (InStringEscape, Shift));
        assert_eq!(step(InStringEscape, 'f'), (InString, Shift));
        assert_eq!(
            step(InStringEscape, 'q'),
            (Start, Reject(ErrorKind::InvalidEscape('q')))
        );
    }

    #[test]
    fn test_end_of_input() {
        assert_eq!(end_of_input(Start), Ok(None));
        assert_eq!(end_of_input(InComment), Ok(None));
        assert_eq!(end_of_input(HaveZero), Ok(Some(Lexeme::Int)));
        assert_eq!(end_of_input(HaveDot), Err(ErrorKind::MissingFractionDigits));
        assert_eq!(end_of_input(InStringEscape), Err(ErrorKind::UnterminatedString));
        assert_eq!(
            end_of_input(HaveGt),
            Ok(Some(Lexeme::Fixed(TokenKind::Gt)))
        );
    }
}
