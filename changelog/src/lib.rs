//! Extracts the release notes of the newest version from a changelog.
//!
//! A changelog is a Markdown document whose releases are introduced by
//! `### v<major>.<minor>[.<more>...]` headings. The newest release is the
//! one with the numerically greatest version, wherever it appears.

pub mod config;
pub mod extract;
pub mod error;
pub mod parser;
pub mod types;
pub mod utils;
pub mod version;

pub use crate::config::ExtractConfig;
pub use crate::extract::{
    extract_latest_release, latest_release, latest_release_notes, read_changelog,
    write_release_notes,
};
pub use crate::error::ChangelogError;
pub use crate::parser::parse_release_sections;
pub use crate::types::{ExtractOutcome, ReleaseSection, Result};
pub use crate::version::ReleaseVersion;
