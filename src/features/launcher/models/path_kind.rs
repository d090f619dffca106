#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

impl PathKind {
    /// Selecting is only possible for files.
    pub fn allows_selection(self) -> bool {
        matches!(self, PathKind::File)
    }
}
