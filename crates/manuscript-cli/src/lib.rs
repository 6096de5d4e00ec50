//! Command-line front end: import a manuscript from linked notes, then
//! count words or export it.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use manuscript_export::epub::{self, EpubOptions};
use manuscript_export::latex::{self, LatexOptions};
use manuscript_export::markdown;
use manuscript_import::{load_from_file, load_from_guide, load_from_index, DelimiterMode};
use manuscript_model::Manuscript;
use manuscript_stats::count_words_in_manuscript;
use tracing_subscriber::EnvFilter;

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing();

    let manuscript = load_manuscript(&cli.source)?;

    match cli.command {
        Command::Count => {
            println!("{} words", count_words_in_manuscript(&manuscript));
        }
        Command::Markdown(args) => handle_markdown(&manuscript, args)?,
        Command::Pdf(args) => handle_pdf(&manuscript, &cli.source, args)?,
        Command::Epub(args) => handle_epub(&manuscript, &cli.source, args)?,
    }

    Ok(0)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Compile linked manuscript notes into markdown, PDF or EPUB",
    long_about = None
)]
#[command(group(
    ArgGroup::new("manuscript_source")
        .required(true)
        .args(["index", "guide", "file"]),
))]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Index file listing the manuscript fragments
    #[arg(long, value_name = "FILE")]
    index: Option<PathBuf>,

    /// Guide file holding the manuscript under a sub-heading
    #[arg(long, value_name = "FILE", requires = "heading")]
    guide: Option<PathBuf>,

    /// Sub-heading inside the guide file
    #[arg(long, value_name = "NAME")]
    heading: Option<String>,

    /// Name of a single pre-assembled manuscript file under the root folder
    #[arg(long, value_name = "NAME")]
    file: Option<String>,

    /// Folder to resolve fragment references against
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Delimiter style used by index and guide files
    #[arg(long, value_enum, default_value_t = ModeArg::Bullet)]
    mode: ModeArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Checkbox syntax: `- [ ] `
    Task,
    /// Compact list syntax: `- 📚 `
    Bullet,
}

impl From<ModeArg> for DelimiterMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Task => DelimiterMode::Task,
            ModeArg::Bullet => DelimiterMode::Bullet,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the manuscript word count
    Count,
    /// Export a single flattened markdown file
    Markdown(MarkdownArgs),
    /// Export a PDF via pandoc and pdflatex
    Pdf(PdfArgs),
    /// Export an EPUB via pandoc
    Epub(EpubArgs),
}

#[derive(Args, Debug)]
struct MarkdownArgs {
    /// Output markdown file
    #[arg(long, value_name = "FILE")]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct PdfArgs {
    /// Output directory for the .tex file and the compiled PDF
    #[arg(long = "out-dir", value_name = "DIR")]
    out_dir: PathBuf,

    /// LaTeX template; the bundled one is used when omitted
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Name of the intermediate .tex file
    #[arg(long = "tex-name", value_name = "NAME", default_value = "output.tex")]
    tex_name: String,

    /// Folder containing the cover and any other illustrations
    /// (defaults to the root folder)
    #[arg(long, value_name = "DIR")]
    illustrations: Option<PathBuf>,

    /// Babel language for hyphenation
    #[arg(long, value_name = "LANG", default_value = "english")]
    language: String,

    /// Keep .aux/.log/.toc files after the build
    #[arg(long = "keep-artifacts")]
    keep_artifacts: bool,
}

#[derive(Args, Debug)]
struct EpubArgs {
    /// Output epub file
    #[arg(long, value_name = "FILE")]
    out: PathBuf,

    /// Folder containing the cover image (defaults to the root folder)
    #[arg(long, value_name = "DIR")]
    illustrations: Option<PathBuf>,
}

fn load_manuscript(source: &SourceArgs) -> Result<Manuscript> {
    let mode = source.mode.into();

    let manuscript = if let Some(index) = &source.index {
        load_from_index(index, &source.root, mode)
            .with_context(|| format!("failed to import index file {}", index.display()))?
    } else if let (Some(guide), Some(heading)) = (&source.guide, &source.heading) {
        load_from_guide(guide, heading, &source.root, mode)
            .with_context(|| format!("failed to import guide file {}", guide.display()))?
    } else if let Some(name) = &source.file {
        load_from_file(name, &source.root)
            .with_context(|| format!("failed to import manuscript file \"{name}\""))?
    } else {
        // clap's arg group guarantees one source was given.
        bail!("no manuscript source given");
    };

    manuscript_stats::log_word_count(&manuscript);
    Ok(manuscript)
}

fn handle_markdown(manuscript: &Manuscript, args: MarkdownArgs) -> Result<()> {
    markdown::export(manuscript, &args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    println!("wrote {}", args.out.display());
    Ok(())
}

fn handle_pdf(manuscript: &Manuscript, source: &SourceArgs, args: PdfArgs) -> Result<()> {
    let options = LatexOptions {
        template: args.template,
        illustration_dir: args.illustrations.unwrap_or_else(|| source.root.clone()),
        out_directory: args.out_dir.clone(),
        out_name: args.tex_name,
        babel_language: args.language,
        remove_artifacts: !args.keep_artifacts,
    };

    latex::export(manuscript, &options).context("PDF export failed")?;
    println!("built PDF in {}", args.out_dir.display());
    Ok(())
}

fn handle_epub(manuscript: &Manuscript, source: &SourceArgs, args: EpubArgs) -> Result<()> {
    let options = EpubOptions {
        illustration_dir: args.illustrations.unwrap_or_else(|| source.root.clone()),
        out_file: args.out.clone(),
    };

    epub::export(manuscript, &options).context("EPUB export failed")?;
    println!("wrote {}", args.out.display());
    Ok(())
}
