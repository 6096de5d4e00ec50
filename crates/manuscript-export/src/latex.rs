//! The PDF exporter: markdown through pandoc into a LaTeX template, then
//! two pdflatex passes.

use std::fs;
use std::path::{Path, PathBuf};

use manuscript_model::{Manuscript, ManuscriptConfig};
use tracing::{debug, info};

use crate::error::{ExportError, ExportResult};
use crate::flatten::{content_to_lines, join_lines, PartHandling};
use crate::process::{SystemTools, ToolInvocation, ToolRunner, PANDOC, PDFLATEX};
use crate::TIME_FORMAT;

// Placeholder tokens the template is expected to carry, one per line.
const COVER_FILE_LOCATION: &str = "COVER_FILE_HERE";
const TITLE_LOCATION: &str = "TITLE_HERE";
const LATEX_FILE_LOCATION: &str = "LATEX_FILE_HERE";
const ILLUSTRATIONS_FOLDER_LOCATION: &str = "ILLUSTRATIONS_FOLDER_HERE";
const DATE_LOCATION: &str = "DATE_HERE";
const AUTHOR_LOCATION: &str = "AUTHOR_HERE";
const BABEL_LANGUAGE_LOCATION: &str = "BABEL_LANGUAGE_HERE";

// The title page either shows the cover or leaves room for one.
const COVER_FILE_COMMAND: &str = r"\includegraphics[width=\textwidth]{COVER_FILE_HERE}\\";
const NO_COVER_COMMAND: &str = r"~\\\vspace{5cm}";

const ARTIFACT_EXTENSIONS: [&str; 4] = ["aux", "log", "toc", "out"];

/// Everything the PDF pipeline needs besides the manuscript itself.
#[derive(Debug, Clone)]
pub struct LatexOptions {
    /// Template file; `None` uses the bundled one.
    pub template: Option<PathBuf>,
    /// Folder holding the cover and any other pictures the text includes.
    pub illustration_dir: PathBuf,
    pub out_directory: PathBuf,
    /// Name of the `.tex` file written into `out_directory`; its stem
    /// becomes the pdflatex job name.
    pub out_name: String,
    /// Babel language for hyphenation and localized division names.
    pub babel_language: String,
    /// Delete `.aux`/`.log`/`.toc`/`.out` files after a successful build.
    pub remove_artifacts: bool,
}

/// Export the manuscript to a PDF using the tools on the PATH.
pub fn export(manuscript: &Manuscript, options: &LatexOptions) -> ExportResult<()> {
    export_with(manuscript, options, &SystemTools)
}

/// Export the manuscript to a PDF through the given tool runner.
pub fn export_with(
    manuscript: &Manuscript,
    options: &LatexOptions,
    runner: &dyn ToolRunner,
) -> ExportResult<()> {
    ensure_output_dir(&options.out_directory)?;

    let latex_body = convert_to_latex(manuscript, runner)?;
    let template = load_template(options)?;
    let full_latex = fill_template(&template, &latex_body, &manuscript.config, options);

    let tex_file = options.out_directory.join(&options.out_name);
    fs::write(&tex_file, full_latex)?;
    info!(tex_file = %tex_file.display(), "wrote filled template");

    build_latex(&tex_file, &options.out_directory, runner)?;

    if options.remove_artifacts {
        remove_artifacts(&tex_file)?;
    }

    Ok(())
}

/// The LaTeX template packaged with this crate.
pub fn default_template() -> &'static str {
    include_str!("../templates/manuscript.tex")
}

fn load_template(options: &LatexOptions) -> ExportResult<String> {
    match &options.template {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Ok(default_template().to_string()),
    }
}

fn ensure_output_dir(out_directory: &Path) -> ExportResult<()> {
    if !out_directory.exists() {
        info!(out_directory = %out_directory.display(), "creating output directory");
        fs::create_dir_all(out_directory)?;
    }
    Ok(())
}

/// Convert the flattened content into LaTeX via pandoc.
///
/// Writing a markdown-to-latex converter is a rabbit hole; pandoc already
/// is one, and the whole exchange goes over stdin/stdout so nothing extra
/// touches the disk.
fn convert_to_latex(manuscript: &Manuscript, runner: &dyn ToolRunner) -> ExportResult<String> {
    let lines = content_to_lines(&manuscript.content, PartHandling::Keep);
    let input = join_lines(&lines).into_bytes();

    let invocation = ToolInvocation {
        program: PANDOC.to_string(),
        args: [
            "-r",
            "markdown-auto_identifiers",
            "-f",
            "markdown",
            "-t",
            "latex",
            "--top-level-division=part",
            "--wrap=preserve",
        ]
        .map(String::from)
        .to_vec(),
        stdin: Some(input),
        current_dir: None,
    };

    let stdout = runner.run(&invocation)?;
    String::from_utf8(stdout).map_err(|_| ExportError::NonUtf8Output {
        tool: PANDOC.to_string(),
    })
}

/// Write the converted body and the config fields into the template,
/// line by line.
fn fill_template(
    template: &str,
    latex_body: &str,
    config: &ManuscriptConfig,
    options: &LatexOptions,
) -> String {
    let mut output = Vec::new();

    for line in template.lines() {
        if line.contains(COVER_FILE_LOCATION) {
            match &config.cover {
                Some(cover) => {
                    let command =
                        COVER_FILE_COMMAND.replace(COVER_FILE_LOCATION, &cover.display().to_string());
                    output.push(line.replace(COVER_FILE_LOCATION, &command));
                }
                None => output.push(line.replace(COVER_FILE_LOCATION, NO_COVER_COMMAND)),
            }
        } else if line.contains(TITLE_LOCATION) {
            output.push(line.replace(TITLE_LOCATION, &config.title));
        } else if line.contains(ILLUSTRATIONS_FOLDER_LOCATION) {
            let folder = options.illustration_dir.to_string_lossy().replace('\\', "/");
            output.push(line.replace(ILLUSTRATIONS_FOLDER_LOCATION, &folder));
        } else if line.contains(LATEX_FILE_LOCATION) {
            output.push(latex_body.to_string());
        } else if line.contains(DATE_LOCATION) {
            output.push(line.replace(DATE_LOCATION, &config.time.format(TIME_FORMAT).to_string()));
        } else if line.contains(AUTHOR_LOCATION) {
            output.push(line.replace(AUTHOR_LOCATION, &config.author));
        } else if line.contains(BABEL_LANGUAGE_LOCATION) {
            output.push(line.replace(BABEL_LANGUAGE_LOCATION, &options.babel_language));
        } else {
            output.push(line.to_string());
        }
    }

    let mut filled = output.join("\n");
    filled.push('\n');
    filled
}

/// Run pdflatex on the filled template, twice, so the table of contents
/// picks up the page numbers of the first pass.
fn build_latex(tex_file: &Path, out_directory: &Path, runner: &dyn ToolRunner) -> ExportResult<()> {
    let jobname = tex_file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "manuscript".to_string());

    let invocation = ToolInvocation {
        program: PDFLATEX.to_string(),
        args: vec![
            format!("-jobname={jobname}"),
            "-interaction=batchmode".to_string(),
            "-halt-on-error".to_string(),
            "-file-line-error".to_string(),
            tex_file.to_string_lossy().into_owned(),
        ],
        stdin: None,
        current_dir: Some(out_directory.to_path_buf()),
    };

    info!(jobname, "calling pdflatex, twice");
    runner.run(&invocation)?;
    runner.run(&invocation)?;

    Ok(())
}

fn remove_artifacts(tex_file: &Path) -> ExportResult<()> {
    for extension in ARTIFACT_EXTENSIONS {
        let artifact = tex_file.with_extension(extension);
        if artifact.exists() {
            debug!(artifact = %artifact.display(), "removing build artifact");
            fs::remove_file(&artifact)?;
        }
    }
    Ok(())
}
