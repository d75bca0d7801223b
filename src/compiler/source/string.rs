use super::{HasOrigin, Origin};
use std::io::{Cursor, Read};

/// Source text without a name, e.g. from tests or the command line.
#[derive(Debug, Clone)]
pub struct StringSource(Cursor<String>);

impl StringSource {
    pub fn new<C: Into<String>>(content: C) -> Self {
        Self(Cursor::new(content.into()))
    }
}

impl HasOrigin for StringSource {
    fn origin(&self) -> Origin {
        Origin::Synthetic
    }
}

impl Read for StringSource {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.0.read(buf)
    }
}
