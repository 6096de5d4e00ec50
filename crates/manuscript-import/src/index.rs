use std::path::Path;

use manuscript_model::Manuscript;
use tracing::info;

use crate::dialect::DelimiterMode;
use crate::directives::{replace_indicators, DirectiveOptions};
use crate::error::ImportResult;
use crate::metadata::{config_from_map, extract_global_config};
use crate::source::{relevant_lines_from_index, splice_fragments};

/// Load a manuscript from an index file.
///
/// An index file is a flat list of directive lines describing a single
/// manuscript: fragment references are resolved against `root` and spliced
/// in place, indicator lines become structural markers, and config lines
/// become the document-wide configuration.
///
/// Indicator replacement deliberately happens before config extraction; an
/// indicator line with inline config would otherwise be mistaken for a
/// config line and swallowed.
pub fn load_from_index(
    index_file: &Path,
    root: &Path,
    mode: DelimiterMode,
) -> ImportResult<Manuscript> {
    info!(
        index_file = %index_file.display(),
        root = %root.display(),
        ?mode,
        "loading manuscript from index file"
    );

    let raw_lines = relevant_lines_from_index(index_file, mode)?;
    info!(lines = raw_lines.len(), "extracted index");

    let lines_with_text = splice_fragments(raw_lines, root, mode)?;

    let items = replace_indicators(lines_with_text, DirectiveOptions::default());
    let (items, config) = extract_global_config(items, mode);

    Ok(Manuscript::new(items, config_from_map(&config)))
}
