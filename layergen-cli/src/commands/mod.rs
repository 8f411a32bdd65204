//! CLI command implementations

pub mod generate;
pub mod preview;

pub use generate::GenerateCommand;
pub use preview::PreviewCommand;

use anyhow::Result;
use clap::Args;
use layergen::GenerationRequest;

use crate::config::CliConfig;
use crate::validation::{validate_entities, validate_package};

/// Input shared by every command
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Comma-separated entity names (e.g. "User, Role_Admin")
    #[arg(short, long)]
    pub entities: String,

    /// Package path (default: com.example.project)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Skip input syntax checks
    #[arg(long)]
    pub no_validate: bool,
}

impl InputArgs {
    /// Build a generation request, applying configured defaults and checks
    ///
    /// # Errors
    ///
    /// Returns an error if validation is enabled and the package path or the
    /// entity list is malformed
    pub fn to_request(&self, config: &CliConfig) -> Result<GenerationRequest> {
        let package = self
            .package
            .as_deref()
            .or(config.package.as_deref())
            .unwrap_or_default();

        if config.validate && !self.no_validate {
            validate_package(package)?;
            validate_entities(&self.entities)?;
        }

        Ok(GenerationRequest::new(package, self.entities.as_str()))
    }
}
