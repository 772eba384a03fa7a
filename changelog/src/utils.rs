use once_cell::sync::Lazy;
use regex::Regex;

/// Marks the end of a release body: a line break followed by any level-3 heading
pub const SECTION_TERMINATOR: &str = "\n### ";

pub static RELEASE_HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"### v([0-9]+(?:\.[0-9]+)+)\n").expect("Failed to compile release heading regex")
});

/// Rewrites `\r\n` and lone `\r` line endings as `\n`
pub fn normalize_line_endings(content: &str) -> String {
    if !content.contains('\r') {
        return content.to_string();
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}
