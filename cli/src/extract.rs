use crate::error::{CliError, Result};
use crate::ui;
use changelog::{ExtractConfig, ExtractOutcome};

pub fn execute(config: &ExtractConfig) -> Result<ExtractOutcome> {
    if config.verbose {
        ui::info_message(&format!("Reading {}", config.input.display()));
    }

    let outcome = changelog::extract_latest_release(config).map_err(|e| {
        CliError::Changelog(e).with_context("Failed to extract the latest release notes")
    })?;

    if config.verbose {
        ui::info_message(&format!(
            "Found {} release section(s)",
            outcome.sections_found
        ));
    }

    match &outcome.latest {
        Some(version) => {
            if config.verbose {
                ui::info_message(&format!(
                    "Wrote {} bytes to {}",
                    outcome.bytes_written,
                    config.output.display()
                ));
            }
            ui::success_message(&format!(
                "Release notes for v{version} written to {}",
                config.output.display()
            ));
        }
        None => {
            ui::warning_message(&format!(
                "No '### v<version>' headings found in {}; wrote an empty {}",
                config.input.display(),
                config.output.display()
            ));
        }
    }

    Ok(outcome)
}

/// Prints every release section in document order, marking the one that
/// would be extracted. Nothing is written.
pub fn list(config: &ExtractConfig) -> Result<()> {
    let content = changelog::read_changelog(&config.input)
        .map_err(|e| CliError::Changelog(e).with_context("Failed to list release sections"))?;
    let sections = changelog::parse_release_sections(&content)?;

    ui::section_header(&format!("Releases in {}", config.input.display()));

    let Some(latest) = changelog::latest_release(&sections) else {
        ui::warning_message("No '### v<version>' headings found");
        return Ok(());
    };

    for (idx, section) in sections.iter().enumerate() {
        let marker = if std::ptr::eq(section, latest) {
            " (latest)"
        } else {
            ""
        };
        let lines = section.body.lines().count();
        ui::step_message(
            idx + 1,
            &format!("v{}{marker}: {lines} line(s)", section.version),
        );
    }

    Ok(())
}
