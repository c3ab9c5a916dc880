//! Check command - validate configuration and content

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, bail};
use folio_core::{Collection, Config, frontmatter, validate_entry};
use folio_generator::find_content_files;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration and every content entry, listing each field
/// violation individually.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    let mut result = ValidationResult::default();

    // Validate configuration
    println!("Checking configuration...");
    let config = match Config::load(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    // Validate content files
    let content_dir = config
        .as_ref()
        .map(|c| PathBuf::from(&c.content.dir))
        .unwrap_or_else(|| PathBuf::from("content"));

    if content_dir.exists() {
        println!("\nChecking content files...");
        validate_content_files(&content_dir, &mut result)?;
    } else {
        result.add_warning(format!(
            "Content directory does not exist: {}",
            content_dir.display()
        ));
    }

    // Check for common issues
    if let Some(ref cfg) = config {
        println!("\nChecking configuration values...");
        check_config_values(cfg, &mut result);
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Validate every content entry under the collection directories.
///
/// Each field violation becomes its own error line, so one broken entry
/// lists everything wrong with it at once.
fn validate_content_files(content_dir: &Path, result: &mut ValidationResult) -> Result<()> {
    let mut checked = 0;
    let mut failed = 0;

    for collection in Collection::all() {
        let collection_dir = content_dir.join(collection.name());
        if !collection_dir.exists() {
            result.add_warning(format!(
                "Collection directory missing: {}",
                collection_dir.display()
            ));
            continue;
        }

        for path in find_content_files(&collection_dir)? {
            checked += 1;

            let raw = match std::fs::read_to_string(&path) {
                Ok(c) => c,
                Err(e) => {
                    result.add_error(format!("{}: Failed to read file: {e}", path.display()));
                    failed += 1;
                    continue;
                }
            };

            let (record, _body) = match frontmatter::parse_raw(&raw, &path) {
                Ok(parsed) => parsed,
                Err(e) => {
                    result.add_error(format!("{}: {e}", path.display()));
                    failed += 1;
                    continue;
                }
            };

            if let Err(e) = validate_entry(collection, &record) {
                failed += 1;
                for issue in &e.issues {
                    result.add_error(format!("{}: {issue}", path.display()));
                }
            }
        }
    }

    if failed == 0 {
        println!("  ✓ All {checked} content files valid");
    } else {
        println!("  ✗ {failed}/{checked} content files have errors");
    }

    Ok(())
}

/// Check configuration values for common issues.
fn check_config_values(config: &Config, result: &mut ValidationResult) {
    if !config.site.host.starts_with("http") {
        result.add_warning("site.host should start with http:// or https://");
    }

    if config.site.description.is_none() {
        result.add_warning("site.description is empty");
    }

    // Check output directory
    let output = Path::new(&config.build.output_dir);
    if output.exists() && !output.is_dir() {
        result.add_error(format!(
            "Output path exists but is not a directory: {}",
            config.build.output_dir
        ));
    }

    println!("  ✓ Configuration values checked");
}
