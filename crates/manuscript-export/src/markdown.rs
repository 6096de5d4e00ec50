//! The markdown exporter: the whole manuscript as one flat file.
//!
//! Deterministic and dependency-free; also useful as an intermediate
//! format to feed into other converters, or just to read the manuscript in
//! one piece.

use std::fs;
use std::path::Path;

use manuscript_model::{Manuscript, ManuscriptConfig};
use tracing::info;

use crate::error::ExportResult;
use crate::flatten::{content_to_lines, join_lines, PartHandling};
use crate::TIME_FORMAT;

const PROPERTIES_DELIMITER: &str = "---";

/// Render the document-wide config as an Obsidian-style properties block.
pub fn config_to_properties(config: &ManuscriptConfig) -> Vec<String> {
    let cover = config
        .cover
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_default();

    vec![
        PROPERTIES_DELIMITER.to_string(),
        format!("title: {}", config.title),
        format!("author: {}", config.author),
        format!("cover: {cover}"),
        format!("time: {}", config.time.format(TIME_FORMAT)),
        PROPERTIES_DELIMITER.to_string(),
    ]
}

/// Export the manuscript into `out_file`: properties block, blank line,
/// then the flattened content.
pub fn export(manuscript: &Manuscript, out_file: &Path) -> ExportResult<()> {
    let properties = config_to_properties(&manuscript.config);
    let content = content_to_lines(&manuscript.content, PartHandling::Keep);

    let mut output = properties.join("\n");
    output.push_str("\n\n");
    output.push_str(&join_lines(&content));
    output.push('\n');

    fs::write(out_file, output)?;
    info!(out_file = %out_file.display(), "wrote markdown export");
    Ok(())
}
