use std::path::Path;

use manuscript_model::Manuscript;
use tracing::info;

use crate::dialect::DelimiterMode;
use crate::directives::{replace_indicators, DirectiveOptions};
use crate::error::ImportResult;
use crate::metadata::{config_from_map, extract_global_config};
use crate::source::{relevant_lines_from_guide, splice_fragments};

/// Load a manuscript from one sub-heading of a guide file.
///
/// A guide file is a larger planning document (a kanban board exports as
/// one, with one fragment link per card); the manuscript is the span of
/// directive lines under the `## ` heading whose text contains `heading`.
/// Beyond the shared directive set, guide spans may open with a dedicated
/// `-- Prologue` marker.
pub fn load_from_guide(
    guide_file: &Path,
    heading: &str,
    root: &Path,
    mode: DelimiterMode,
) -> ImportResult<Manuscript> {
    info!(
        guide_file = %guide_file.display(),
        heading,
        root = %root.display(),
        ?mode,
        "loading manuscript from guide sub-heading"
    );

    let raw_lines = relevant_lines_from_guide(guide_file, heading, mode)?;
    info!(lines = raw_lines.len(), "extracted relevant section");

    let lines_with_text = splice_fragments(raw_lines, root, mode)?;

    let items = replace_indicators(
        lines_with_text,
        DirectiveOptions {
            recognize_prologue: true,
        },
    );
    let (items, config) = extract_global_config(items, mode);

    Ok(Manuscript::new(items, config_from_map(&config)))
}
