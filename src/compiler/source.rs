//! Named source texts.
//!
//! Sources are read once into the [`Registry`], which hands out a
//! [`SourceId`] and later serves the text back to the front end and to the
//! diagnostic renderer.

pub mod buffer;
pub mod file;
pub mod origin;
pub mod registry;
pub mod string;

pub use buffer::BufferSource;
pub use file::FileSource;
pub use origin::{HasOrigin, Origin};
pub use registry::Registry;
pub use string::StringSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(usize);
