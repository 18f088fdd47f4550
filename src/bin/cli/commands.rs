//! Command execution for the bandplan CLI.

use std::path::Path;

use owo_colors::OwoColorize;
use tracing::info;

use bandplan_rs::io::reports::render;
use bandplan_rs::{BandplanConfig, BandplanEngine};

use crate::cli::args::{ConvertArgs, InitConfigArgs, ValidateConfigArgs};
use crate::cli::config_layer::{build_layered_config, load_configuration};

/// Convert a band plan and write the table
pub async fn convert_command(args: ConvertArgs) -> anyhow::Result<()> {
    let config = build_layered_config(&args, Path::new("."))?;
    let input = config.input.clone();

    let engine = BandplanEngine::new(config)?;
    let report = engine.convert_file(&input).await?;

    for (reason, count) in &report.summary.skipped {
        info!("Skipped {} entries: {}", count, reason);
    }
    if report.summary.long_names > 0 {
        info!(
            "{} band names exceed {} characters",
            report.summary.long_names,
            engine.config().table.max_name_len
        );
    }

    let text = render(&report.summary.records, args.format.into())?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, text).await.map_err(|e| {
                anyhow::anyhow!("Failed to write output to {}: {}", path.display(), e)
            })?;
            info!(
                "Wrote {} rows to {}",
                report.summary.records.len(),
                path.display()
            );
        }
        None => print!("{text}"),
    }

    Ok(())
}

/// Print default configuration in YAML format
pub async fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default bandplan configuration".dimmed());
    println!(
        "{}",
        "# Save this to .bandplan.yml and customize as needed".dimmed()
    );
    println!();

    let yaml_output = serde_yaml::to_string(&BandplanConfig::default())?;
    println!("{}", yaml_output);

    Ok(())
}

/// Initialize a configuration file with defaults
pub async fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Configuration file already exists: {}. Use --force to overwrite or choose a different name with --output",
            args.output.display()
        ));
    }

    let yaml_content = serde_yaml::to_string(&BandplanConfig::default())?;
    tokio::fs::write(&args.output, yaml_content).await?;

    println!(
        "{} {}",
        "Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!(
        "   Run with: {}",
        format!("bandplan convert --config {}", args.output.display()).cyan()
    );

    Ok(())
}

/// Validate a bandplan configuration file
pub async fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "Validating configuration:".bright_blue().bold(),
        args.config.display().to_string().cyan()
    );

    match load_configuration(Some(&args.config)) {
        Ok(config) => {
            println!("{}", "Configuration file is valid".bright_green().bold());
            println!("   input:          {}", config.input.display());
            println!(
                "   frequency span: {} - {} Hz",
                config.bounds.min_frequency_hz, config.bounds.max_frequency_hz
            );
            println!("   mode labels:    {}", config.mode_labels.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "Configuration validation failed:".red(), e);
            eprintln!(
                "{}",
                "Tip: use 'bandplan print-default-config' to see the expected format".dimmed()
            );
            Err(e)
        }
    }
}
