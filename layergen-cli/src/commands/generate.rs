//! Archive generation command
//!
//! Generates the repository, service and service implementation files for
//! every entity and saves them as `generated-code.zip`.
//!
//! # Example
//!
//! ```bash
//! layergen generate --package com.acme.shop --entities "User, Role_Admin"
//! ```

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tracing::debug;

use super::InputArgs;
use crate::config::CliConfig;

/// Generate boilerplate and save it as a zip archive
#[derive(Debug, Clone, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory (default: configured `output_dir`, usually the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing archive
    #[arg(short, long)]
    pub force: bool,
}

impl GenerateCommand {
    /// Execute the command, returning the path of the written archive
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Input validation fails
    /// - The entity list contains no entity name
    /// - The archive already exists and `--force` was not given
    /// - The output directory or archive cannot be written
    pub fn execute(&self, config: &CliConfig) -> Result<PathBuf> {
        let request = self.input.to_request(config)?;

        println!(
            "\n{} {} {}",
            style("Generating layers for").cyan().bold(),
            style(&request.entity_names).green().bold(),
            style("...").cyan().bold()
        );

        let archive = layergen::generate(&request).context("Failed to generate code")?;

        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| config.output_dir.clone());
        let archive_path = output_dir.join(archive.file_name());

        fs::create_dir_all(&output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        let mut options = OpenOptions::new();
        options.write(true);
        if self.force {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let mut file = match options.open(&archive_path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => bail!(
                "{} already exists. Use --force to overwrite it.",
                archive_path.display()
            ),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to create file: {}", archive_path.display()))
            }
        };
        file.write_all(archive.bytes())
            .with_context(|| format!("Failed to write file: {}", archive_path.display()))?;
        debug!(path = %archive_path.display(), bytes = archive.bytes().len(), "Archive saved");

        println!(
            "\n{} {} files in package {}:",
            style("Generated").green().bold(),
            archive.file_count(),
            style(request.resolved_package_path()).yellow()
        );

        for entry in archive.entries() {
            println!(
                "  {} {} ({})",
                style("✓").green(),
                style(&entry.path).dim(),
                style(&entry.description).dim()
            );
        }

        println!(
            "\n{} Saved {}",
            style("✨").green().bold(),
            style(archive_path.display()).green().bold()
        );

        println!("\n{}", style("Next steps:").cyan().bold());
        println!(
            "  1. Unzip into your source tree: {}",
            style(format!(
                "unzip {} -d src/main/java/{}",
                archive_path.display(),
                request.resolved_package_path().replace('.', "/")
            ))
            .yellow()
        );
        println!("  2. Add query methods to the repositories and services");

        Ok(archive_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn command(entities: &str, output: PathBuf) -> GenerateCommand {
        GenerateCommand {
            input: InputArgs {
                entities: entities.to_string(),
                package: Some("com.acme".to_string()),
                no_validate: false,
            },
            output: Some(output),
            force: false,
        }
    }

    #[test]
    fn test_writes_archive() {
        let dir = tempdir().unwrap();
        let path = command("User", dir.path().to_path_buf())
            .execute(&CliConfig::default())
            .unwrap();

        assert_eq!(path, dir.path().join("generated-code.zip"));
        assert!(path.exists());
    }

    #[test]
    fn test_refuses_overwrite_without_force() {
        let dir = tempdir().unwrap();
        let cmd = command("User", dir.path().to_path_buf());
        cmd.execute(&CliConfig::default()).unwrap();

        assert!(cmd.execute(&CliConfig::default()).is_err());
    }

    #[test]
    fn test_existing_file_left_untouched_without_force() {
        let dir = tempdir().unwrap();
        let existing = dir.path().join("generated-code.zip");
        fs::write(&existing, b"keep me").unwrap();

        let err = command("User", dir.path().to_path_buf())
            .execute(&CliConfig::default())
            .unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read(&existing).unwrap(), b"keep me");
    }

    #[test]
    fn test_force_overwrites() {
        let dir = tempdir().unwrap();
        let mut cmd = command("User", dir.path().to_path_buf());
        cmd.execute(&CliConfig::default()).unwrap();

        fs::write(dir.path().join("generated-code.zip"), b"stale").unwrap();

        cmd.force = true;
        let path = cmd.execute(&CliConfig::default()).unwrap();
        let expected = layergen::generate(&layergen::GenerationRequest::new("com.acme", "User")).unwrap();
        assert_eq!(fs::read(path).unwrap(), expected.bytes());
    }

    #[test]
    fn test_creates_missing_output_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("out").join("zips");

        let path = command("User", nested.clone())
            .execute(&CliConfig::default())
            .unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[test]
    fn test_invalid_input_writes_nothing() {
        let dir = tempdir().unwrap();
        let result = command("User,", dir.path().to_path_buf()).execute(&CliConfig::default());

        assert!(result.is_err());
        assert!(!dir.path().join("generated-code.zip").exists());
    }
}
