use changelog::config::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use changelog::ExtractConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "release-notes")]
#[command(
    author,
    version,
    about = "Write the release notes of the newest changelog version to a file"
)]
pub struct Cli {
    /// Changelog to read release sections from
    #[clap(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// File that receives the newest release notes (overwritten)
    #[clap(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print every release section found instead of writing the output file
    #[clap(short, long, default_value_t = false)]
    pub list: bool,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn extract_config(&self) -> ExtractConfig {
        ExtractConfig::default()
            .with_input(&self.input)
            .with_output(&self.output)
            .with_verbose(self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_file_names() {
        let cli = Cli::try_parse_from(["release-notes"]).unwrap();
        let config = cli.extract_config();

        assert_eq!(config.input, PathBuf::from("CHANGELOG.md"));
        assert_eq!(config.output, PathBuf::from("result.txt"));
        assert!(!config.verbose);
        assert!(!cli.list);
    }

    #[test]
    fn test_custom_paths() {
        let cli = Cli::try_parse_from([
            "release-notes",
            "-i",
            "docs/CHANGES.md",
            "--output",
            "notes.md",
            "-v",
        ])
        .unwrap();
        let config = cli.extract_config();

        assert_eq!(config.input, PathBuf::from("docs/CHANGES.md"));
        assert_eq!(config.output, PathBuf::from("notes.md"));
        assert!(config.verbose);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["release-notes", "CHANGELOG.md"]).is_err());
    }
}
