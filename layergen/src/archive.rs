//! In-memory zip packaging
//!
//! Entries keep the position of their first insertion. Adding a file at an
//! existing path replaces its content (last write wins).
//!
//! Every entry is written with the zip epoch as its timestamp and fixed
//! permissions, so the same entries in the same order always produce the
//! same bytes.

use std::collections::{HashMap, HashSet};
use std::io::{Cursor, Write};

use tracing::debug;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::{LayergenError, Result};
use crate::renderer::GeneratedFile;

const FILE_PERMISSIONS: u32 = 0o644;
const DIRECTORY_PERMISSIONS: u32 = 0o755;

/// Collects generated files and serializes them into a zip archive
#[derive(Debug, Default)]
pub struct ArchiveBuilder {
    entries: Vec<GeneratedFile>,
    index: HashMap<String, usize>,
}

impl ArchiveBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry at `path`
    ///
    /// Returns the content previously stored at `path`, if any.
    pub fn add_file(&mut self, path: impl Into<String>, content: impl Into<String>) -> Option<String> {
        self.add_generated(GeneratedFile {
            path: path.into(),
            content: content.into(),
            description: String::new(),
        })
        .map(|previous| previous.content)
    }

    /// Insert or overwrite a generated file, keeping its description
    ///
    /// Returns the file previously stored at the same path, if any.
    pub fn add_generated(&mut self, file: GeneratedFile) -> Option<GeneratedFile> {
        if let Some(&position) = self.index.get(&file.path) {
            debug!(path = %file.path, "Replacing archive entry");
            return Some(std::mem::replace(&mut self.entries[position], file));
        }

        self.index.insert(file.path.clone(), self.entries.len());
        self.entries.push(file);
        None
    }

    /// Number of file entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no file has been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File paths in archive order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.path.as_str())
    }

    /// Files in archive order
    #[must_use]
    pub fn files(&self) -> &[GeneratedFile] {
        &self.entries
    }

    /// Consume the builder, returning its files in archive order
    #[must_use]
    pub fn into_files(self) -> Vec<GeneratedFile> {
        self.entries
    }

    /// Serialize all entries into a zip archive
    ///
    /// Parent directories are written as directory entries right before the
    /// first file that lives in them.
    ///
    /// # Errors
    ///
    /// Returns [`LayergenError::EmptyArchive`] if no file was added, or an
    /// archive error if zip serialization fails.
    pub fn finish(&self) -> Result<Vec<u8>> {
        if self.entries.is_empty() {
            return Err(LayergenError::EmptyArchive);
        }

        let file_options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
            .unix_permissions(FILE_PERMISSIONS);
        let directory_options = FileOptions::default()
            .compression_method(CompressionMethod::Stored)
            .last_modified_time(DateTime::default())
            .unix_permissions(DIRECTORY_PERMISSIONS);

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let mut directories: HashSet<&str> = HashSet::new();

        for entry in &self.entries {
            for directory in parent_directories(&entry.path) {
                if directories.insert(directory) {
                    writer.add_directory(directory, directory_options)?;
                }
            }

            writer.start_file(entry.path.as_str(), file_options)?;
            writer.write_all(entry.content.as_bytes())?;
        }

        let bytes = writer.finish()?.into_inner();
        debug!(
            files = self.entries.len(),
            directories = directories.len(),
            bytes = bytes.len(),
            "Archive serialized"
        );

        Ok(bytes)
    }
}

/// Every ancestor directory of `path`, outermost first, each with a trailing slash
fn parent_directories(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices('/').map(move |(idx, _)| &path[..=idx])
}
