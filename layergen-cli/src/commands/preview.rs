//! Preview command: show what would be generated without writing anything

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use layergen::{GeneratedFile, Generator};

use super::InputArgs;
use crate::config::CliConfig;

/// Print the files that `generate` would produce
#[derive(Debug, Clone, Args)]
pub struct PreviewCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print file contents as well as paths
    #[arg(short, long)]
    pub show_content: bool,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

impl PreviewCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if input validation or generation fails
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let output = self.render(config)?;
        println!("{output}");
        Ok(())
    }

    /// Render the preview text
    ///
    /// # Errors
    ///
    /// Returns an error if input validation or generation fails
    pub fn render(&self, config: &CliConfig) -> Result<String> {
        let request = self.input.to_request(config)?;
        let files = Generator::new()
            .context("Failed to load templates")?
            .render_files(&request)
            .context("Failed to generate code")?;

        if self.json {
            return self.render_json(&files);
        }

        let mut out = format!(
            "{} {} files in package {}\n",
            style("Would generate").cyan().bold(),
            files.len(),
            style(request.resolved_package_path()).yellow()
        );

        for file in &files {
            out.push_str(&format!(
                "  {} ({})\n",
                style(&file.path).green(),
                style(&file.description).dim()
            ));

            if self.show_content {
                out.push('\n');
                out.push_str(&file.content);
                out.push_str("\n\n");
            }
        }

        Ok(out.trim_end().to_string())
    }

    fn render_json(&self, files: &[GeneratedFile]) -> Result<String> {
        let listing: Vec<serde_json::Value> = files
            .iter()
            .map(|file| {
                let mut value = serde_json::json!({
                    "path": file.path,
                    "description": file.description,
                });
                if self.show_content {
                    value["content"] = serde_json::Value::String(file.content.clone());
                }
                value
            })
            .collect();

        serde_json::to_string_pretty(&listing).context("Failed to serialize preview")
    }
}
