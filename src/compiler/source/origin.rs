/// Where the text of a source came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Synthetic,
    Buffer(String),
    File(std::path::PathBuf),
}

impl std::fmt::Display for Origin {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Synthetic => formatter.write_str("<synthetic>"),
            Origin::Buffer(name) => formatter.write_str(name),
            Origin::File(path) => write!(formatter, "{}", path.display()),
        }
    }
}

pub trait HasOrigin {
    fn origin(&self) -> Origin;
}
