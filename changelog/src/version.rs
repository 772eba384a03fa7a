use crate::error::ChangelogError;
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A dot-separated numeric version such as `1.10.0` or `2.0`.
///
/// Components compare as unbounded non-negative integers, so `1.10.0`
/// sorts after `1.9.9`, `1.01` equals `1.1` and a version that is a strict
/// prefix of another (`2.0` vs `2.0.1`) sorts first. The text as written
/// is kept for display.
#[derive(Debug, Clone)]
pub struct ReleaseVersion {
    raw: String,
    components: Vec<String>,
}

impl ReleaseVersion {
    /// Normalized components, without leading zeros
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(String::as_str)
    }
}

fn normalize_component(component: &str) -> String {
    let trimmed = component.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn compare_components(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl FromStr for ReleaseVersion {
    type Err = ChangelogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    Err(ChangelogError::InvalidVersion(s.to_string()))
                } else {
                    Ok(normalize_component(part))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: s.to_string(),
            components,
        })
    }
}

impl Ord for ReleaseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.components.iter().zip(&other.components) {
            match compare_components(a, b) {
                Ordering::Equal => {}
                non_eq => return non_eq,
            }
        }
        self.components.len().cmp(&other.components.len())
    }
}

impl PartialOrd for ReleaseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ReleaseVersion {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for ReleaseVersion {}

impl Display for ReleaseVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
