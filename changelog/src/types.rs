use crate::error::ChangelogError;
use crate::version::ReleaseVersion;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// One `### v<version>` section of a changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSection {
    pub version: ReleaseVersion,
    /// Byte offset of the heading in the scanned text
    pub offset: usize,
    /// Everything after the heading line, up to the next level-3 heading
    pub body: String,
}

/// Summary of a completed extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOutcome {
    pub sections_found: usize,
    pub latest: Option<ReleaseVersion>,
    pub bytes_written: usize,
}
