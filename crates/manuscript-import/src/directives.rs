//! Directive lines: part/chapter/scene indicators and their inline config.

use std::collections::HashMap;

use manuscript_model::{ContentItem, SeparatorConfig};
use tracing::warn;

const PART_INDICATOR: &str = "-- Part";
const CHAPTER_INDICATOR: &str = "-- Chapter";
const PROLOGUE_INDICATOR: &str = "-- Prologue";
const SCENE_INDICATORS: [&str; 2] = ["---", "- - -"];

const INLINE_CONFIG_START: &str = " -- ";
const INLINE_CONFIG_SEPARATOR: &str = ": ";

const TITLE_KEY: &str = "Title";
const NUMBERED_KEY: &str = "Numbered";
const NUMBERED_TRUE: &str = "True";
const NUMBERED_FALSE: &str = "False";

/// Which indicators `replace_indicators` recognizes beyond the common set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectiveOptions {
    /// Guide files may open with a dedicated `-- Prologue` marker; index
    /// files never carry one.
    pub recognize_prologue: bool,
}

/// Replace directive lines with typed markers, leaving prose untouched.
///
/// Must run before document-wide config extraction: an indicator line with
/// trailing inline config also looks like a config line to that pass.
pub fn replace_indicators(lines: Vec<String>, options: DirectiveOptions) -> Vec<ContentItem> {
    let mut output = Vec::with_capacity(lines.len());

    for line in lines {
        if options.recognize_prologue && line.contains(PROLOGUE_INDICATOR) {
            output.push(ContentItem::StartPrologue);
        } else if line.contains(PART_INDICATOR) {
            output.push(ContentItem::StartPart(separator_config_from_line(&line)));
        } else if line.contains(CHAPTER_INDICATOR) {
            output.push(ContentItem::StartChapter(separator_config_from_line(&line)));
        } else if SCENE_INDICATORS
            .iter()
            .any(|indicator| line.contains(indicator))
        {
            output.push(ContentItem::BreakScene);
        } else {
            output.push(ContentItem::Text(line));
        }
    }

    output
}

/// Parse the ` -- Key: Value` segments an indicator line may carry.
///
/// The indicator text itself is stripped first; whatever remains is split
/// on the inline separator, and only segments holding a `key: value` pair
/// survive. Segments with an empty key or value are skipped with a
/// warning, never a failure.
pub fn extract_inline_config(line: &str) -> HashMap<String, String> {
    let mut output = HashMap::new();

    if !line.contains(INLINE_CONFIG_START) {
        return output;
    }

    let trimmed_line = line.replace(PART_INDICATOR, "").replace(CHAPTER_INDICATOR, "");

    for segment in trimmed_line.split(INLINE_CONFIG_START) {
        let Some((key, value)) = segment.split_once(INLINE_CONFIG_SEPARATOR) else {
            continue;
        };

        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            warn!(segment, line, "skipping inline config with an empty key or value");
            continue;
        }

        output.insert(key.to_string(), value.to_string());
    }

    output
}

/// Fold an inline config map into a [`SeparatorConfig`], starting from the
/// defaults. Unrecognized keys are ignored; an unrecognized `Numbered`
/// value warns and leaves the default in place.
pub fn inline_config_to_separator(config: &HashMap<String, String>) -> SeparatorConfig {
    let mut output = SeparatorConfig::default();

    if let Some(title) = config.get(TITLE_KEY) {
        output.title = title.clone();
    }

    if let Some(value) = config.get(NUMBERED_KEY) {
        match value.as_str() {
            NUMBERED_TRUE => output.numbered = true,
            NUMBERED_FALSE => output.numbered = false,
            other => warn!(value = other, "unrecognized value for the Numbered property"),
        }
    }

    output
}

fn separator_config_from_line(line: &str) -> SeparatorConfig {
    inline_config_to_separator(&extract_inline_config(line))
}
