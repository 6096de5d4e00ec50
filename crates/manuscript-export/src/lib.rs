//! Exporters that render a [`Manuscript`](manuscript_model::Manuscript)
//! into target formats.
//!
//! All three exporters share one flattening pass that turns the content
//! sequence into markdown lines. The markdown exporter writes those lines
//! straight to a file; the PDF and EPUB exporters hand them to external
//! converters through the narrow [`ToolRunner`] seam, so everything up to
//! the actual process launch stays testable without pandoc or pdflatex on
//! the PATH.

mod error;
mod flatten;
mod process;
#[cfg(test)]
mod test_support;

pub mod epub;
pub mod latex;
pub mod markdown;

pub use error::{ExportError, ExportResult};
pub use flatten::{content_to_lines, join_lines, PartHandling};
pub use process::{SystemTools, ToolInvocation, ToolRunner};

/// Timestamp format used in exported metadata; second precision is plenty.
pub(crate) const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
