//! The EPUB exporter, a thin wrapper around pandoc.

use std::path::PathBuf;

use manuscript_model::Manuscript;
use tracing::info;

use crate::error::ExportResult;
use crate::flatten::{content_to_lines, join_lines, PartHandling};
use crate::process::{SystemTools, ToolInvocation, ToolRunner, PANDOC};
use crate::TIME_FORMAT;

#[derive(Debug, Clone)]
pub struct EpubOptions {
    /// Folder holding the cover image named in the manuscript config.
    pub illustration_dir: PathBuf,
    /// Path of the packaged epub to produce.
    pub out_file: PathBuf,
}

/// Export the manuscript as an EPUB using the pandoc on the PATH.
pub fn export(manuscript: &Manuscript, options: &EpubOptions) -> ExportResult<()> {
    export_with(manuscript, options, &SystemTools)
}

/// Export the manuscript as an EPUB through the given tool runner.
///
/// Parts are not supported on the epub side, so part markers are dropped
/// and chapters become the top-level division.
pub fn export_with(
    manuscript: &Manuscript,
    options: &EpubOptions,
    runner: &dyn ToolRunner,
) -> ExportResult<()> {
    let lines = content_to_lines(&manuscript.content, PartHandling::Ignore);
    let input = join_lines(&lines).into_bytes();

    let config = &manuscript.config;
    let mut args = vec![
        "-f".to_string(),
        "markdown".to_string(),
        "-t".to_string(),
        "epub".to_string(),
        "--number-sections".to_string(),
        format!("--metadata=title:{}", config.title),
        format!("--metadata=author:{}", config.author),
        format!("--metadata=date:{}", config.time.format(TIME_FORMAT)),
        "-o".to_string(),
        options.out_file.to_string_lossy().into_owned(),
    ];

    if let Some(cover) = &config.cover {
        args.push("--epub-cover-image".to_string());
        args.push(
            options
                .illustration_dir
                .join(cover)
                .to_string_lossy()
                .into_owned(),
        );
    }

    info!(out_file = %options.out_file.display(), "handing manuscript to pandoc");
    runner.run(&ToolInvocation {
        program: PANDOC.to_string(),
        args,
        stdin: Some(input),
        current_dir: None,
    })?;

    Ok(())
}
