use crate::config::ExtractConfig;
use crate::error::ChangelogError;
use crate::parser::parse_release_sections;
use crate::types::{ExtractOutcome, ReleaseSection, Result};
use crate::utils::normalize_line_endings;
use std::fs;
use std::path::Path;

/// Picks the section with the highest version.
///
/// Sections with identical versions resolve to the one that appears last
/// in the document.
#[must_use]
pub fn latest_release(sections: &[ReleaseSection]) -> Option<&ReleaseSection> {
    sections.iter().max_by(|a, b| a.version.cmp(&b.version))
}

/// Returns the body of the latest release in `content`, or an empty string
/// when the changelog has no `### v<version>` headings.
pub fn latest_release_notes(content: &str) -> Result<String> {
    let sections = parse_release_sections(content)?;
    Ok(latest_release(&sections)
        .map(|section| section.body.clone())
        .unwrap_or_default())
}

/// Reads the changelog text, rewriting CRLF and CR line endings as LF
pub fn read_changelog(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|source| ChangelogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_line_endings(&raw))
}

/// Replaces whatever is at `path` with `notes`
pub fn write_release_notes(path: &Path, notes: &str) -> Result<()> {
    fs::write(path, notes).map_err(|source| ChangelogError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads `config.input`, selects the latest release and writes its body to
/// `config.output`.
///
/// The output is always rewritten, and left empty when no release heading
/// was found. A changelog that cannot be read leaves the output untouched.
///
/// # Errors
///
/// Returns an error if the changelog cannot be read as UTF-8 text or the
/// output cannot be written.
pub fn extract_latest_release(config: &ExtractConfig) -> Result<ExtractOutcome> {
    let content = read_changelog(&config.input)?;
    let sections = parse_release_sections(&content)?;
    let latest = latest_release(&sections);

    let notes = latest.map_or("", |section| section.body.as_str());
    write_release_notes(&config.output, notes)?;

    Ok(ExtractOutcome {
        sections_found: sections.len(),
        latest: latest.map(|section| section.version.clone()),
        bytes_written: notes.len(),
    })
}
