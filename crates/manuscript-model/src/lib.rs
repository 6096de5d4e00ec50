//! In-memory document model for manuscripts.
//!
//! A manuscript can be a novel, a short story, a novella, or anything else
//! that can be described in terms of parts, which contain chapters, which
//! contain scenes. The model is deliberately flat: the content is one
//! ordered sequence of prose lines and structural markers, something to the
//! tune of
//!
//! ```text
//! [
//!     StartChapter,
//!     "Everyone knows _any_ good novel starts with a prologue.",
//!     StartPart,
//!     StartChapter,
//!     "This is the first block of text which is also the first chapter.",
//!     StartChapter,
//!     "This is the second chapter.",
//!     BreakScene,
//!     "Plot twist, this chapter has two scenes!"
//! ]
//! ```
//!
//! Nesting is expressed purely by marker ordering, never by a tree. There is
//! no requirement for a manuscript to contain all three levels; a short
//! story would usually have scenes only.
//!
//! Prose lines may contain inline markdown emphasis (**bold**, _italics_);
//! exporters pass them through verbatim.

mod config;
mod content;

pub use config::ManuscriptConfig;
pub use content::{ContentItem, SeparatorConfig};

/// A complete manuscript: ordered content plus document-wide configuration.
///
/// Built once by an importer; exporters only ever borrow it.
#[derive(Debug, Clone)]
pub struct Manuscript {
    pub content: Vec<ContentItem>,
    pub config: ManuscriptConfig,
}

impl Manuscript {
    pub fn new(content: Vec<ContentItem>, config: ManuscriptConfig) -> Self {
        Self { content, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_without_complaint() {
        let manuscript = Manuscript::new(Vec::new(), ManuscriptConfig::default());
        assert!(manuscript.content.is_empty());
    }

    #[test]
    fn content_order_is_preserved() {
        let content = vec![
            ContentItem::StartChapter(SeparatorConfig::default()),
            ContentItem::Text("first".to_string()),
            ContentItem::BreakScene,
            ContentItem::Text("second".to_string()),
        ];
        let manuscript = Manuscript::new(content.clone(), ManuscriptConfig::default());
        assert_eq!(manuscript.content, content);
    }
}
