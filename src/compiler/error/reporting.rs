use super::Error;
use crate::compiler::frontend::lexer::TAB_WIDTH;
use crate::compiler::frontend::{Error as FrontendError, ErrorKind};
use crate::compiler::source::{Registry, SourceId};
use crate::compiler::source_location::SourceLocation;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use std::ops::Range;

pub struct ErrorReporter<'a> {
    source_registry: &'a Registry,
}

impl<'a> ErrorReporter<'a> {
    pub fn new(source_registry: &'a Registry) -> Self {
        Self { source_registry }
    }
}

impl<'a> ErrorReporter<'a> {
    pub fn report_error(&self, e: &Error) {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = codespan_reporting::term::Config::default();

        let mut lock = writer.lock();

        if let Err(render_error) = term::emit(
            &mut lock,
            &config,
            self.source_registry,
            &self.diagnostic(e),
        ) {
            log::error!("failed to render diagnostic: {}", render_error);
            eprintln!("{}", e);
        }
    }

    pub fn diagnostic(&self, e: &Error) -> Diagnostic<SourceId> {
        match e {
            Error::IoError(e) => Diagnostic::error()
                .with_code("E000")
                .with_message(format!("{}", e)),
            Error::FrontendError(id, fe) => self.frontend_diagnostic(*id, fe),
        }
    }

    fn frontend_diagnostic(&self, id: SourceId, e: &FrontendError) -> Diagnostic<SourceId> {
        let (code, message) = match e.kind() {
            ErrorKind::Lexical => ("E001", "invalid token"),
            ErrorKind::Syntax => ("E002", "failed to parse input"),
            ErrorKind::Type => ("E003", "type check failed"),
        };

        let label = Label::primary(id, self.span(id, e.location())).with_message(e.message());

        Diagnostic::error()
            .with_code(code)
            .with_message(message)
            .with_labels(vec![label])
            .with_notes(vec![format!("at {}", e.location())])
    }

    fn span(&self, id: SourceId, location: SourceLocation) -> Range<usize> {
        let text = self.source_registry.text(id).unwrap_or("");
        let start = byte_offset(text, location);
        let end = text[start..]
            .chars()
            .next()
            .map_or(start, |c| start + c.len_utf8());

        start..end
    }
}

/// Byte offset of a row and column as the lexer counts them. A column past
/// the end of its row maps to the row's line terminator, a row past the end
/// of the text to the end of the text.
pub fn byte_offset(text: &str, location: SourceLocation) -> usize {
    let mut current = SourceLocation::default();
    let mut after_carriage_return = false;

    for (offset, c) in text.char_indices() {
        if current.row > location.row {
            return offset;
        }
        if current.row == location.row
            && (current.column >= location.column || c == '\n' || c == '\r')
        {
            if !(c == '\n' && after_carriage_return) {
                return offset;
            }
        }

        match c {
            '\n' if after_carriage_return => (),
            '\n' | '\r' => {
                current.row += 1;
                current.column = 0;
            }
            '\t' => current.column += TAB_WIDTH,
            _ => current.column += 1,
        }

        after_carriage_return = c == '\r';
    }

    text.len()
}
