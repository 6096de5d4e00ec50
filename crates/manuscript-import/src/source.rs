//! Reading source lines: index filtering, guide sub-heading extraction and
//! fragment resolution.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::dialect::{DelimiterMode, FILE_REFERENCE_SUFFIX};
use crate::error::{ImportError, ImportResult};

const GUIDE_HEADING_PREFIX: &str = "## ";

/// True for lines an index or guide file considers directive lines: those
/// carrying either a config prefix or a fragment reference.
fn is_relevant(line: &str, mode: DelimiterMode) -> bool {
    line.contains(mode.config_prefix()) || line.contains(mode.file_reference_prefix())
}

/// Pull the directive lines out of an index file.
///
/// An index file represents a single manuscript, so the whole file is
/// relevant; blank lines and anything that is neither config nor a fragment
/// reference are discarded here.
pub fn relevant_lines_from_index(
    index_file: &Path,
    mode: DelimiterMode,
) -> ImportResult<Vec<String>> {
    if !index_file.exists() {
        return Err(ImportError::SourceNotFound(index_file.to_path_buf()));
    }

    let raw = fs::read_to_string(index_file)?;
    Ok(raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| is_relevant(line, mode))
        .map(|line| line.trim().to_string())
        .collect())
}

/// Pull the directive lines out of one sub-heading of a guide file.
///
/// Collection starts after a `## ` heading whose text contains `heading`
/// and stops at the next `## ` heading; everything outside that span is
/// ignored.
pub fn relevant_lines_from_guide(
    guide_file: &Path,
    heading: &str,
    mode: DelimiterMode,
) -> ImportResult<Vec<String>> {
    if !guide_file.exists() {
        return Err(ImportError::SourceNotFound(guide_file.to_path_buf()));
    }

    let raw = fs::read_to_string(guide_file)?;
    let mut lines = Vec::new();
    let mut in_region_of_interest = false;

    for line in raw.lines() {
        if line.starts_with(GUIDE_HEADING_PREFIX) && line.contains(heading) {
            info!(heading, line = line.trim(), "found the relevant sub-heading");
            in_region_of_interest = true;
        } else if line.trim().is_empty() {
            continue;
        } else if line.starts_with(GUIDE_HEADING_PREFIX) && in_region_of_interest {
            break;
        } else if in_region_of_interest && is_relevant(line, mode) {
            lines.push(line.trim().to_string());
        }
    }

    Ok(lines)
}

fn markdown_files_under(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().contains(".md"))
        .map(|entry| entry.into_path())
        .collect()
}

/// Locate the fragment called `name` under `root` and return its non-blank
/// lines, trimmed.
///
/// Exactly one file may match; zero or several candidates are a fatal
/// resolution error, never silently disambiguated. The tree is re-scanned
/// on every call, which is wasteful but harmless at manuscript scale.
pub fn read_fragment(name: &str, root: &Path) -> ImportResult<Vec<String>> {
    let candidates: Vec<PathBuf> = markdown_files_under(root)
        .into_iter()
        .filter(|path| path.to_string_lossy().contains(name))
        .collect();

    if candidates.len() != 1 {
        return Err(ImportError::FragmentResolution {
            name: name.to_string(),
            candidates,
        });
    }

    let raw = fs::read_to_string(&candidates[0])?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}

/// Splice fragment text in place of every fragment-reference line.
///
/// Returns a new sequence in which each reference line has been replaced by
/// the referenced file's lines; all other lines pass through untouched.
pub fn splice_fragments(
    lines: Vec<String>,
    root: &Path,
    mode: DelimiterMode,
) -> ImportResult<Vec<String>> {
    let mut output = Vec::with_capacity(lines.len());

    for line in lines {
        if line.contains(mode.file_reference_prefix()) && line.contains(FILE_REFERENCE_SUFFIX) {
            let name = fragment_name(&line, mode);
            debug!(fragment = name, "loading fragment");

            let text = read_fragment(name, root)?;
            debug!(lines = text.len(), "fragment loaded");

            output.extend(text);
        } else {
            output.push(line);
        }
    }

    Ok(output)
}

/// The double-bracketed name carried by a fragment-reference line.
fn fragment_name(line: &str, mode: DelimiterMode) -> &str {
    let prefix = mode.file_reference_prefix();
    let start = line
        .rfind(prefix)
        .map(|index| index + prefix.len())
        .unwrap_or(0);
    let tail = &line[start..];
    tail.find(FILE_REFERENCE_SUFFIX)
        .map(|index| &tail[..index])
        .unwrap_or(tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn fragment_name_takes_text_between_brackets() {
        let line = "- [ ] [[Chapter One]]";
        assert_eq!(fragment_name(line, DelimiterMode::Task), "Chapter One");
    }

    #[test]
    fn fragment_name_ignores_trailing_decoration() {
        let line = "- 📚 [[Chapter One]] ^card-id";
        assert_eq!(fragment_name(line, DelimiterMode::Bullet), "Chapter One");
    }

    #[test]
    fn read_fragment_strips_blank_lines_and_whitespace() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("Scene.md"),
            "  first line  \n\n\nsecond line\n",
        )
        .unwrap();

        let lines = read_fragment("Scene", dir.path()).unwrap();
        assert_eq!(lines, vec!["first line", "second line"]);
    }

    #[test]
    fn read_fragment_searches_subfolders() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("part-one/chapters")).unwrap();
        std::fs::write(
            dir.path().join("part-one/chapters/Arrival.md"),
            "found me\n",
        )
        .unwrap();

        let lines = read_fragment("Arrival", dir.path()).unwrap();
        assert_eq!(lines, vec!["found me"]);
    }

    #[test]
    fn read_fragment_fails_on_zero_matches() {
        let dir = tempdir().unwrap();

        let err = read_fragment("Missing", dir.path()).unwrap_err();
        match err {
            ImportError::FragmentResolution { name, candidates } => {
                assert_eq!(name, "Missing");
                assert!(candidates.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn read_fragment_fails_on_two_matches_instead_of_picking_one() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("Scene 1.md"), "a\n").unwrap();
        std::fs::write(dir.path().join("Scene 12.md"), "b\n").unwrap();

        let err = read_fragment("Scene 1", dir.path()).unwrap_err();
        match err {
            ImportError::FragmentResolution { candidates, .. } => {
                assert_eq!(candidates.len(), 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn relevant_lines_keeps_only_config_and_references() {
        let dir = tempdir().unwrap();
        let index = dir.path().join("index.md");
        std::fs::write(
            &index,
            "# My Novel\n\n- [ ] [[Chapter One]]\n- [ ] -- Title: My Novel\nrandom prose\n- [x] done item\n",
        )
        .unwrap();

        let lines = relevant_lines_from_index(&index, DelimiterMode::Task).unwrap();
        assert_eq!(lines, vec!["- [ ] [[Chapter One]]", "- [ ] -- Title: My Novel"]);
    }

    #[test]
    fn relevant_lines_reports_a_missing_index() {
        let err = relevant_lines_from_index(Path::new("/no/such/index.md"), DelimiterMode::Task)
            .unwrap_err();
        assert!(matches!(err, ImportError::SourceNotFound(_)));
    }

    #[test]
    fn guide_extraction_is_bounded_by_subheadings() {
        let dir = tempdir().unwrap();
        let guide = dir.path().join("guide.md");
        std::fs::write(
            &guide,
            concat!(
                "## Ideas\n",
                "- [ ] [[Not This One]]\n",
                "## Manuscript\n",
                "- [ ] [[Chapter One]]\n",
                "- [ ] -- Author: A. Writer\n",
                "\n",
                "## Worldbuilding\n",
                "- [ ] [[Also Not This]]\n",
            ),
        )
        .unwrap();

        let lines = relevant_lines_from_guide(&guide, "Manuscript", DelimiterMode::Task).unwrap();
        assert_eq!(
            lines,
            vec!["- [ ] [[Chapter One]]", "- [ ] -- Author: A. Writer"]
        );
    }

    #[test]
    fn splice_replaces_references_in_place() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("One.md"), "line a\nline b\n").unwrap();

        let lines = vec![
            "-- Chapter".to_string(),
            "- 📚 [[One]]".to_string(),
            "trailing".to_string(),
        ];
        let spliced = splice_fragments(lines, dir.path(), DelimiterMode::Bullet).unwrap();
        assert_eq!(spliced, vec!["-- Chapter", "line a", "line b", "trailing"]);
    }
}
