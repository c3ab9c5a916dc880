//! Build command - validates content and writes build artifacts

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use folio_core::Config;
use folio_generator::Builder;

/// Run the build command.
///
/// Validates all content entries and writes `manifest.json` and `theme.css`
/// to the output directory.
pub fn run(
    config_path: &Path,
    output: &Path,
    strict: bool,
    host: Option<&str>,
    base_path: Option<&str>,
) -> Result<()> {
    let start = Instant::now();
    tracing::info!(
        ?config_path,
        ?output,
        strict,
        ?host,
        ?base_path,
        "Starting build"
    );

    // Load configuration, with FOLIO__* env overrides layered on top
    let mut config =
        Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;

    // Override output directory if specified
    config.build.output_dir = output.to_string_lossy().to_string();

    // The CLI flag only ever tightens the failure policy
    config.build.strict = config.build.strict || strict;

    // Override host if specified via CLI
    if let Some(h) = host {
        tracing::info!(host = h, "Overriding site host from CLI");
        config.site.host = h.to_string();
    }

    // Override base_path if specified via CLI
    if let Some(bp) = base_path {
        tracing::info!(base_path = bp, "Overriding site base_path from CLI");
        config.site.base_path = bp.to_string();
    }

    tracing::debug!(?config, "Loaded configuration");

    let content_dir = config.content.dir.clone();
    let builder = Builder::new(config, &content_dir, output);

    let stats = builder.build().wrap_err("Build failed")?;

    let duration = start.elapsed();

    // Print build statistics
    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Projects:  {}", stats.projects);
    println!("  Posts:     {}", stats.posts);
    if stats.skipped > 0 {
        println!("  Skipped:   {} (invalid entries)", stats.skipped);
    }
    println!();
    println!("  Duration:  {:.2}s", duration.as_secs_f64());
    println!("  Output:    {}", output.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}
