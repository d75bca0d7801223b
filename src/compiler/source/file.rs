use super::{HasOrigin, Origin};
use std::io::Read;
use std::path::PathBuf;

pub struct FileSource {
    pub path: PathBuf,
    file: std::fs::File,
}

impl FileSource {
    pub fn open<P: Into<PathBuf>>(path: P) -> std::io::Result<Self> {
        let path = path.into();
        let file = std::fs::File::open(&path)?;

        Ok(Self { path, file })
    }
}

impl HasOrigin for FileSource {
    fn origin(&self) -> Origin {
        Origin::File(self.path.clone())
    }
}

impl Read for FileSource {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.file.read(buf)
    }
}
