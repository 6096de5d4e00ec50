/// Delimiter style accepted by index and guide files.
///
/// `Task` is the kanban-flavoured checkbox syntax (`- [ ] `), `Bullet` the
/// compact list syntax with a fixed leading glyph (`- 📚 `). The caller
/// picks one; nothing is auto-detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterMode {
    Task,
    Bullet,
}

impl DelimiterMode {
    /// Prefix that opens a double-bracketed fragment reference.
    pub(crate) fn file_reference_prefix(self) -> &'static str {
        match self {
            DelimiterMode::Task => "- [ ] [[",
            DelimiterMode::Bullet => "- 📚 [[",
        }
    }

    /// Prefix that opens a document-wide `key: value` config line.
    pub(crate) fn config_prefix(self) -> &'static str {
        match self {
            DelimiterMode::Task => "- [ ] -- ",
            DelimiterMode::Bullet => "- 📚 -- ",
        }
    }
}

/// Closes a fragment reference opened by `file_reference_prefix`.
pub(crate) const FILE_REFERENCE_SUFFIX: &str = "]]";
