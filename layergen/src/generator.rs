//! Generation orchestrator
//!
//! This module coordinates one generation request:
//! 1. Resolve the package path (blank means [`DEFAULT_PACKAGE_PATH`])
//! 2. Split the entity list
//! 3. Render the three files of every entity
//! 4. Package everything into a zip archive
//!
//! Nothing is written to disk; the caller decides what to do with the bytes.

use std::collections::HashSet;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::archive::ArchiveBuilder;
use crate::error::Result;
use crate::naming::split_entities;
use crate::renderer::{GeneratedFile, TemplateRenderer};

/// Package path used when the request leaves it blank
pub const DEFAULT_PACKAGE_PATH: &str = "com.example.project";

/// Suggested file name for the generated archive
pub const ARCHIVE_FILE_NAME: &str = "generated-code.zip";

/// Raw user input for one generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Dotted package prefix; blank means [`DEFAULT_PACKAGE_PATH`]
    #[serde(default)]
    pub package_path: String,
    /// Comma-separated entity names
    pub entity_names: String,
}

impl GenerationRequest {
    /// Create a new request
    #[must_use]
    pub fn new(package_path: impl Into<String>, entity_names: impl Into<String>) -> Self {
        Self {
            package_path: package_path.into(),
            entity_names: entity_names.into(),
        }
    }

    /// Package path that generation will use
    ///
    /// # Examples
    ///
    /// ```
    /// # use layergen::GenerationRequest;
    /// assert_eq!(GenerationRequest::new("  ", "User").resolved_package_path(), "com.example.project");
    /// assert_eq!(GenerationRequest::new(" com.acme ", "User").resolved_package_path(), "com.acme");
    /// ```
    #[must_use]
    pub fn resolved_package_path(&self) -> &str {
        let trimmed = self.package_path.trim();
        if trimmed.is_empty() {
            DEFAULT_PACKAGE_PATH
        } else {
            trimmed
        }
    }
}

/// A file listed in a [`GeneratedArchive`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Relative path inside the archive
    pub path: String,
    /// File description for user feedback
    pub description: String,
}

/// A finished archive, ready to hand to whatever saves it
#[derive(Debug, Clone)]
pub struct GeneratedArchive {
    bytes: Vec<u8>,
    entries: Vec<ArchiveEntry>,
}

impl GeneratedArchive {
    /// Suggested file name
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        ARCHIVE_FILE_NAME
    }

    /// Archive bytes
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the archive, returning its bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Files in archive order (directory entries excluded)
    #[must_use]
    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    /// File paths in archive order (directory entries excluded)
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.path.as_str())
    }

    /// Number of files in the archive (directory entries excluded)
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.entries.len()
    }
}

/// Layered boilerplate generator
#[derive(Debug)]
pub struct Generator {
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a generator with the built-in templates
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile
    pub fn new() -> Result<Self> {
        Ok(Self {
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate the archive for `request`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The entity list contains no entity name
    /// - Template rendering fails
    /// - Zip serialization fails
    #[instrument(skip_all, fields(entities = %request.entity_names))]
    pub fn generate(&self, request: &GenerationRequest) -> Result<GeneratedArchive> {
        let builder = self.build(request)?;
        let bytes = builder.finish()?;
        let entries: Vec<ArchiveEntry> = builder
            .into_files()
            .into_iter()
            .map(|file| ArchiveEntry {
                path: file.path,
                description: file.description,
            })
            .collect();

        info!(
            files = entries.len(),
            bytes = bytes.len(),
            "Generated {ARCHIVE_FILE_NAME}"
        );

        Ok(GeneratedArchive { bytes, entries })
    }

    /// Render every file for `request` without packaging
    ///
    /// Files come back in archive order, with duplicate paths already
    /// collapsed the same way the archive collapses them.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity list contains no entity name or
    /// template rendering fails
    pub fn render_files(&self, request: &GenerationRequest) -> Result<Vec<GeneratedFile>> {
        Ok(self.build(request)?.into_files())
    }

    fn build(&self, request: &GenerationRequest) -> Result<ArchiveBuilder> {
        let package_path = request.resolved_package_path();
        let entities = split_entities(&request.entity_names)?;

        let mut builder = ArchiveBuilder::new();
        let mut seen = HashSet::new();

        for entity in &entities {
            if !seen.insert(entity.as_str()) {
                warn!(
                    entity = %entity,
                    "Duplicate entity name, earlier files will be overwritten"
                );
            }

            debug!(entity = %entity, package = package_path, "Rendering entity");
            for file in self.renderer.render(package_path, entity)? {
                builder.add_generated(file);
            }
        }

        Ok(builder)
    }
}

static SHARED: OnceCell<Generator> = OnceCell::new();

/// Generate the archive for `request` using a process-wide generator
///
/// # Errors
///
/// See [`Generator::generate`]
pub fn generate(request: &GenerationRequest) -> Result<GeneratedArchive> {
    SHARED.get_or_try_init(Generator::new)?.generate(request)
}
