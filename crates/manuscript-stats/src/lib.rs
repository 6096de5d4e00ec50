//! Word-count reporting over a manuscript.

use manuscript_model::{ContentItem, Manuscript};
use tracing::info;

/// Count the words in a string by splitting on whitespace.
///
/// Somewhat janky, since it will happily count things that are not words,
/// but when manuscripts run to many thousands of words, does it matter?
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sum the word counts of every prose item, skipping structural markers.
pub fn count_words_in_manuscript(manuscript: &Manuscript) -> usize {
    manuscript
        .content
        .iter()
        .filter_map(|item| match item {
            ContentItem::Text(line) => Some(count_words(line)),
            _ => None,
        })
        .sum()
}

/// Write the manuscript's word count to the logs.
pub fn log_word_count(manuscript: &Manuscript) {
    info!(words = count_words_in_manuscript(manuscript), "word count");
}

#[cfg(test)]
mod tests {
    use super::*;
    use manuscript_model::{ManuscriptConfig, SeparatorConfig};

    #[test]
    fn counts_words() {
        assert_eq!(count_words("This is a string with seven words."), 7);
    }

    #[test]
    fn sums_across_the_manuscript() {
        let content = vec![
            ContentItem::Text("This is a string with seven words.".to_string()),
            ContentItem::Text("This is a string with seven words.".to_string()),
        ];
        let manuscript = Manuscript::new(content, ManuscriptConfig::default());

        assert_eq!(count_words_in_manuscript(&manuscript), 14);
    }

    #[test]
    fn markers_contribute_nothing() {
        let content = vec![
            ContentItem::StartPart(SeparatorConfig {
                title: "A very long part title with many words".to_string(),
                numbered: true,
            }),
            ContentItem::Text("two words".to_string()),
            ContentItem::BreakScene,
        ];
        let manuscript = Manuscript::new(content, ManuscriptConfig::default());

        assert_eq!(count_words_in_manuscript(&manuscript), 2);
    }
}
