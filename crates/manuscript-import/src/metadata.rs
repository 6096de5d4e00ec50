//! Document-wide configuration: directive-style config lines, front-matter
//! properties blocks, and conversion into the typed config record.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::Local;
use manuscript_model::{ContentItem, ManuscriptConfig};
use tracing::{debug, info};

use crate::dialect::DelimiterMode;
use crate::error::{ImportError, ImportResult};

const CONFIG_SEPARATOR: &str = ": ";
const PROPERTIES_DELIMITER: &str = "---";
const PROPERTIES_SEPARATOR: char = ':';

const AUTHOR_KEY: &str = "Author";
const TITLE_KEY: &str = "Title";
const COVER_KEY: &str = "Cover";

/// Pull document-wide `key: value` lines out of the content sequence,
/// returning the sequence without them plus the collected map.
///
/// Runs after indicator replacement, so markers pass straight through and
/// only not-yet-converted text lines are inspected.
pub fn extract_global_config(
    items: Vec<ContentItem>,
    mode: DelimiterMode,
) -> (Vec<ContentItem>, HashMap<String, String>) {
    let mut output = Vec::with_capacity(items.len());
    let mut config = HashMap::new();

    for item in items {
        match item {
            ContentItem::Text(line) if line.contains(mode.config_prefix()) => {
                let tail = after_last(&line, mode.config_prefix());
                if let Some((key, value)) = tail.split_once(CONFIG_SEPARATOR) {
                    config.insert(key.trim().to_string(), value.trim().to_string());
                } else {
                    debug!(%line, "dropping config line without a key/value pair");
                }
            }
            other => output.push(other),
        }
    }

    (output, config)
}

fn after_last<'a>(line: &'a str, pattern: &str) -> &'a str {
    line.rfind(pattern)
        .map(|index| &line[index + pattern.len()..])
        .unwrap_or(line)
}

/// Strip a leading `---`-delimited properties block and parse its
/// `key: value` lines into a map.
///
/// Must run before indicator replacement: the block delimiter is lexically
/// identical to a scene break. A property line without a separator is a
/// fatal parse error; the input owes us that much.
pub fn extract_properties(
    lines: Vec<String>,
) -> ImportResult<(Vec<String>, HashMap<String, String>)> {
    let mut in_properties = false;
    let mut properties_read = false;
    let mut config = HashMap::new();
    let mut output = Vec::new();

    for line in lines {
        if line.trim() == PROPERTIES_DELIMITER && !in_properties && !properties_read {
            in_properties = true;
            continue;
        }

        // There can only be one properties block, so the next delimiter
        // closes it for good.
        if line.trim() == PROPERTIES_DELIMITER && in_properties {
            in_properties = false;
            properties_read = true;
            continue;
        }

        if in_properties {
            let (key, value) = line
                .split_once(PROPERTIES_SEPARATOR)
                .ok_or_else(|| ImportError::MalformedProperty(line.clone()))?;
            config.insert(key.trim().to_string(), value.trim().to_string());
            continue;
        }

        output.push(line);
    }

    info!(?config, "read properties from file");
    Ok((output, config))
}

/// Build the typed config record from a raw key/value map.
///
/// Missing keys fall back to placeholder defaults instead of failing, and
/// the generation timestamp is stamped here, never read from input.
pub fn config_from_map(config: &HashMap<String, String>) -> ManuscriptConfig {
    let mut output = ManuscriptConfig::default();

    if let Some(author) = config.get(AUTHOR_KEY) {
        info!(%author, "adding author to config");
        output.author = author.clone();
    }

    if let Some(title) = config.get(TITLE_KEY) {
        info!(%title, "adding title to config");
        output.title = title.clone();
    }

    if let Some(cover) = config.get(COVER_KEY).filter(|value| !value.is_empty()) {
        info!(%cover, "adding cover to config");
        output.cover = Some(PathBuf::from(cover));
    }

    output.time = Local::now();
    output
}
