/// Position of a lexeme in the source text.
///
/// Both `row` and `column` are zero based. A tab advances the column by 3,
/// a line terminator (`\n`, `\r` or `\r\n`) starts the next row at column 0.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Default, PartialOrd, Ord)]
pub struct SourceLocation {
    pub row: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(row: usize, column: usize) -> Self {
        SourceLocation { row, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

pub trait HasSourceLocation {
    fn source_location(&self) -> &SourceLocation;
}
