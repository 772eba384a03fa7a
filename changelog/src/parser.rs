use crate::types::{ReleaseSection, Result};
use crate::utils::{RELEASE_HEADING_PATTERN, SECTION_TERMINATOR};

/// Scans `content` once, left to right, and returns every `### v<version>`
/// section in document order.
///
/// A body starts right after the heading's line break and stops before the
/// next `\n### ` (any level-3 heading) or at the end of the text. Scanning
/// resumes where the body stopped, so sections never overlap.
pub fn parse_release_sections(content: &str) -> Result<Vec<ReleaseSection>> {
    let mut sections = Vec::new();
    let mut pos = 0;

    while let Some(captures) = RELEASE_HEADING_PATTERN.captures_at(content, pos) {
        let (Some(heading), Some(version)) = (captures.get(0), captures.get(1)) else {
            break;
        };

        let body_start = heading.end();
        let body_end = content[body_start..]
            .find(SECTION_TERMINATOR)
            .map_or(content.len(), |idx| body_start + idx);

        sections.push(ReleaseSection {
            version: version.as_str().parse()?,
            offset: heading.start(),
            body: content[body_start..body_end].to_string(),
        });

        pos = body_end;
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions(sections: &[ReleaseSection]) -> Vec<String> {
        sections.iter().map(|s| s.version.to_string()).collect()
    }

    #[test]
    fn test_no_headings() {
        let sections = parse_release_sections("# Changelog\n\n## [1.0.0]\n- item\n").unwrap();
        assert!(sections.is_empty());
    }

    #[test]
    fn test_bodies_stop_at_next_heading() {
        let content = "### v1.0.0\nfirst\n### v2.0.0\nsecond\n\n### v3.0.0\nthird\n";
        let sections = parse_release_sections(content).unwrap();

        assert_eq!(versions(&sections), vec!["1.0.0", "2.0.0", "3.0.0"]);
        assert_eq!(sections[0].body, "first");
        assert_eq!(sections[1].body, "second\n");
        assert_eq!(sections[2].body, "third\n");
    }

    #[test]
    fn test_any_level_three_heading_ends_a_body() {
        let content = "### v1.2.0\nintro\n### Added\n- thing\n";
        let sections = parse_release_sections(content).unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body, "intro");
    }

    #[test]
    fn test_heading_needs_two_components_and_line_break() {
        let content = "### v1\nnope\n### v1.0.0 (2024-01-01)\nnope\n### v1.a\nnope\n### v2.5\nyes";
        let sections = parse_release_sections(content).unwrap();

        assert_eq!(versions(&sections), vec!["2.5"]);
        assert_eq!(sections[0].body, "yes");
    }

    #[test]
    fn test_heading_not_at_line_start() {
        let content = "#### v0.1.0\nnested\n";
        let sections = parse_release_sections(content).unwrap();

        assert_eq!(versions(&sections), vec!["0.1.0"]);
        assert_eq!(sections[0].offset, 1);
        assert_eq!(sections[0].body, "nested\n");
    }

    #[test]
    fn test_inline_heading_is_swallowed_by_body() {
        let content = "### v1.0.0\nsee ### v9.0.0\nfor details\n";
        let sections = parse_release_sections(content).unwrap();

        assert_eq!(versions(&sections), vec!["1.0.0"]);
        assert_eq!(sections[0].body, "see ### v9.0.0\nfor details\n");
    }

    #[test]
    fn test_empty_body() {
        let content = "### v1.0.0\n\n### v1.1.0\n";
        let sections = parse_release_sections(content).unwrap();

        assert_eq!(sections[0].body, "");
        assert_eq!(sections[1].body, "");
    }
}
