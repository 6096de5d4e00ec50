use std::path::Path;

use manuscript_model::Manuscript;
use tracing::info;

use crate::directives::{replace_indicators, DirectiveOptions};
use crate::error::ImportResult;
use crate::metadata::{config_from_map, extract_properties};
use crate::source::read_fragment;

/// Load a manuscript from a single pre-assembled file.
///
/// The file is resolved against `root` like any fragment and may open with
/// an Obsidian-style properties block carrying the document-wide config.
///
/// The order here is the reverse of the index/guide pipeline: properties
/// come off before indicator replacement, because the block delimiter uses
/// the same character sequence as a scene break.
pub fn load_from_file(name: &str, root: &Path) -> ImportResult<Manuscript> {
    info!(name, root = %root.display(), "loading manuscript from single file");

    let lines = read_fragment(name, root)?;
    let (lines, config) = extract_properties(lines)?;
    let items = replace_indicators(lines, DirectiveOptions::default());

    Ok(Manuscript::new(items, config_from_map(&config)))
}
