use super::{HasOrigin, Origin, SourceId};
use codespan_reporting::files::{self, Files, SimpleFiles};
use std::io::Read;
use std::ops::Range;

pub struct Registry {
    sources: SimpleFiles<Origin, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            sources: SimpleFiles::new(),
        }
    }

    /// Read `source` completely and register its text.
    pub fn add<T: HasOrigin + Read>(&mut self, mut source: T) -> std::io::Result<SourceId> {
        let mut text = String::new();
        source.read_to_string(&mut text)?;

        let origin = source.origin();
        log::debug!("registered {} ({} bytes)", origin, text.len());

        Ok(SourceId(self.sources.add(origin, text)))
    }

    pub fn text(&self, id: SourceId) -> Option<&str> {
        self.sources.get(id.0).ok().map(|file| file.source().as_str())
    }

    pub fn origin(&self, id: SourceId) -> Option<&Origin> {
        self.sources.get(id.0).ok().map(|file| file.name())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Files<'a> for Registry {
    type FileId = SourceId;
    type Name = Origin;
    type Source = &'a str;

    fn name(&'a self, id: Self::FileId) -> Result<Self::Name, files::Error> {
        self.sources.name(id.0)
    }

    fn source(&'a self, id: Self::FileId) -> Result<Self::Source, files::Error> {
        self.sources.source(id.0)
    }

    fn line_index(&'a self, id: Self::FileId, byte_index: usize) -> Result<usize, files::Error> {
        self.sources.line_index(id.0, byte_index)
    }

    fn line_range(&'a self, id: Self::FileId, line_index: usize) -> Result<Range<usize>, files::Error> {
        self.sources.line_range(id.0, line_index)
    }
}
