//! The seam between exporters and the external tools they delegate to.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use tracing::debug;

use crate::error::{ExportError, ExportResult};

pub(crate) const PANDOC: &str = "pandoc";
pub(crate) const PDFLATEX: &str = "pdflatex";

/// One external tool call: program, arguments, bytes to feed on stdin, and
/// an optional working directory.
#[derive(Debug, Clone, Default)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub stdin: Option<Vec<u8>>,
    pub current_dir: Option<PathBuf>,
}

/// Runs external converters and compilers.
///
/// Exporters only ever go through this trait, so their command assembly and
/// template handling can be exercised without pandoc or pdflatex installed.
pub trait ToolRunner {
    /// Run the tool to completion and return its captured stdout. A missing
    /// binary or a non-zero exit is an error carrying the captured stderr.
    fn run(&self, invocation: &ToolInvocation) -> ExportResult<Vec<u8>>;
}

/// The real thing: blocking `std::process` invocations.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTools;

impl ToolRunner for SystemTools {
    fn run(&self, invocation: &ToolInvocation) -> ExportResult<Vec<u8>> {
        debug!(
            program = invocation.program,
            args = ?invocation.args,
            "running external tool"
        );

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(if invocation.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &invocation.current_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|source| ExportError::Launch {
            tool: invocation.program.clone(),
            source,
        })?;

        // Feed stdin from a separate thread; the child may start writing
        // output before it has consumed all of its input.
        let feeder = match (child.stdin.take(), invocation.stdin.clone()) {
            (Some(mut pipe), Some(bytes)) => {
                Some(thread::spawn(move || pipe.write_all(&bytes)))
            }
            _ => None,
        };

        let output = child.wait_with_output()?;

        if let Some(feeder) = feeder {
            if let Ok(written) = feeder.join() {
                // A broken pipe with a clean exit status would be odd, but
                // if the tool failed we prefer its stderr below.
                if output.status.success() {
                    written?;
                }
            }
        }

        if !output.status.success() {
            return Err(ExportError::Tool {
                tool: invocation.program.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output.stdout)
    }
}
