//! The shared flattening pass: content sequence in, markdown lines out.

use manuscript_model::{ContentItem, SeparatorConfig};

const PART_HEADING: &str = "#";
const CHAPTER_HEADING: &str = "##";
const SCENE_SEPARATOR: &str = "---";
const UNNUMBERED_INDICATOR: &str = "{.unnumbered}";
const PROLOGUE_TITLE: &str = "Prologue";

/// How part markers are rendered when flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartHandling {
    #[default]
    Keep,
    /// Drop part markers entirely, for targets that have no part/chapter
    /// distinction.
    Ignore,
}

/// Flatten the content sequence into markdown lines.
///
/// Prose passes through verbatim; each marker becomes its target-syntax
/// token. The output has one entry per emitted line, ready for
/// [`join_lines`].
pub fn content_to_lines(content: &[ContentItem], parts: PartHandling) -> Vec<String> {
    let mut output = Vec::with_capacity(content.len());

    for item in content {
        match item {
            ContentItem::Text(line) => output.push(line.clone()),
            ContentItem::StartPart(config) => {
                if parts == PartHandling::Keep {
                    output.push(separator_heading(PART_HEADING, config));
                }
            }
            ContentItem::StartChapter(config) => {
                output.push(separator_heading(CHAPTER_HEADING, config));
            }
            ContentItem::StartPrologue => {
                // Prologues render as an unnumbered chapter, which is what
                // they are as far as any target format cares.
                output.push(separator_heading(
                    CHAPTER_HEADING,
                    &SeparatorConfig {
                        title: PROLOGUE_TITLE.to_string(),
                        numbered: false,
                    },
                ));
            }
            ContentItem::BreakScene => output.push(SCENE_SEPARATOR.to_string()),
        }
    }

    output
}

/// Join flattened lines into a single markdown string, blank-line
/// separated.
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n\n")
}

fn separator_heading(level: &str, config: &SeparatorConfig) -> String {
    let mut output = format!("{level} {}", config.title);

    // Optionally signal that this division is not numbered.
    if !config.numbered {
        output.push(' ');
        output.push_str(UNNUMBERED_INDICATOR);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(line: &str) -> ContentItem {
        ContentItem::Text(line.to_string())
    }

    #[test]
    fn unnumbered_chapter_gets_the_annotation() {
        let content = vec![
            text("text"),
            ContentItem::StartChapter(SeparatorConfig {
                title: "Test Title".to_string(),
                numbered: false,
            }),
            text("more text"),
        ];

        let output = content_to_lines(&content, PartHandling::Keep);

        assert_eq!(output.len(), 3);
        assert_eq!(output[1], "## Test Title {.unnumbered}");
    }

    #[test]
    fn numbered_chapter_is_a_bare_heading() {
        let content = vec![
            text("a"),
            ContentItem::StartChapter(SeparatorConfig {
                title: "Ch 1".to_string(),
                numbered: true,
            }),
            text("b"),
        ];

        let output = content_to_lines(&content, PartHandling::Keep);
        assert_eq!(output, vec!["a", "## Ch 1", "b"]);
    }

    #[test]
    fn parts_use_a_top_level_heading() {
        let content = vec![ContentItem::StartPart(SeparatorConfig {
            title: "Part One".to_string(),
            numbered: true,
        })];

        let output = content_to_lines(&content, PartHandling::Keep);
        assert_eq!(output, vec!["# Part One"]);
    }

    #[test]
    fn ignoring_parts_drops_them_without_a_trace() {
        let content = vec![
            ContentItem::StartPart(SeparatorConfig::default()),
            text("prose"),
        ];

        let output = content_to_lines(&content, PartHandling::Ignore);
        assert_eq!(output, vec!["prose"]);
    }

    #[test]
    fn scene_breaks_become_horizontal_rules() {
        let content = vec![text("a"), ContentItem::BreakScene, text("b")];
        let output = content_to_lines(&content, PartHandling::Keep);
        assert_eq!(output, vec!["a", "---", "b"]);
    }

    #[test]
    fn prologue_renders_as_an_unnumbered_chapter() {
        let output = content_to_lines(&[ContentItem::StartPrologue], PartHandling::Keep);
        assert_eq!(output, vec!["## Prologue {.unnumbered}"]);
    }

    #[test]
    fn text_only_content_round_trips_through_flattening() {
        let content = vec![text("first line"), text("second line"), text("third line")];

        let output = join_lines(&content_to_lines(&content, PartHandling::Keep));
        assert_eq!(output, "first line\n\nsecond line\n\nthird line");
    }
}
