/// Display settings for a part or chapter separator.
///
/// `numbered` decides whether the target format is allowed to auto-number
/// the division. Two configs with the same fields are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorConfig {
    pub title: String,
    pub numbered: bool,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            numbered: true,
        }
    }
}

/// One element of a manuscript's content sequence.
///
/// Markers never carry prose and a `Text` item is never empty: blank lines
/// are discarded during import, not preserved as empty items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    /// A line of prose, passed through verbatim by every exporter.
    Text(String),
    /// Begins a new top-level division.
    StartPart(SeparatorConfig),
    /// Begins a chapter.
    StartChapter(SeparatorConfig),
    /// Begins a prologue. Only the guide-subheading importer produces these.
    StartPrologue,
    /// A break between scenes within a chapter.
    BreakScene,
}

impl ContentItem {
    /// True exactly for the structural markers, never for prose.
    pub fn is_structural(&self) -> bool {
        match self {
            ContentItem::Text(_) => false,
            ContentItem::StartPart(_)
            | ContentItem::StartChapter(_)
            | ContentItem::StartPrologue
            | ContentItem::BreakScene => true,
        }
    }
}
