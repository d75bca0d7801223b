//! Escape sequences of string literals.
//!
//! ```grammar
//! <escape> -> \b | \t | \n | \f | \r | \" | \' | \\
//! ```

const TABLE: [(char, char); 8] = [
    ('b', '\u{8}'),
    ('t', '\t'),
    ('n', '\n'),
    ('f', '\u{c}'),
    ('r', '\r'),
    ('"', '"'),
    ('\'', '\''),
    ('\\', '\\'),
];

/// The character denoted by `\<c>`, if `c` is a valid escape.
pub fn unescape(c: char) -> Option<char> {
    TABLE
        .iter()
        .find(|(escaped, _)| *escaped == c)
        .map(|(_, value)| *value)
}

fn escape(c: char) -> Option<char> {
    TABLE
        .iter()
        .find(|(_, value)| *value == c)
        .map(|(escaped, _)| *escaped)
}

/// Expand the escape sequences of the literal's contents (without quotes).
///
/// A backslash followed by something that is not in the table is kept as is;
/// the lexer never produces such a literal.
pub fn decode(raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }

        match chars.next() {
            Some(next) => match unescape(next) {
                Some(value) => decoded.push(value),
                None => {
                    decoded.push('\\');
                    decoded.push(next);
                }
            },
            None => decoded.push('\\'),
        }
    }

    decoded
}

/// Inverse of [`decode`]: every character with an entry in the table is
/// written as its escape sequence.
pub fn encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());

    for c in value.chars() {
        match escape(c) {
            Some(escaped) => {
                encoded.push('\\');
                encoded.push(escaped);
            }
            None => encoded.push(c),
        }
    }

    encoded
}
