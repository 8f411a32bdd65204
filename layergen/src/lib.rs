//! layergen: layered boilerplate generation for Spring Boot projects
//!
//! Turns a package path and a comma-separated list of entity names into a
//! zip archive holding, for every entity:
//! - `repository/I{Entity}Repository.java` (Spring Data JPA repository)
//! - `service/I{Entity}Service.java` (service interface)
//! - `service/impl/{Entity}Service.java` (constructor-injected implementation)
//!
//! Generation is pure and deterministic: the same request always yields the
//! same archive bytes, and nothing touches the filesystem.
//!
//! # Example
//!
//! ```rust
//! use layergen::GenerationRequest;
//!
//! # fn main() -> layergen::Result<()> {
//! let request = GenerationRequest::new("com.acme.shop", "User, Role");
//! let archive = layergen::generate(&request)?;
//!
//! assert_eq!(archive.file_name(), "generated-code.zip");
//! assert_eq!(archive.file_count(), 6);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod archive;
pub mod error;
pub mod generator;
pub mod naming;
pub mod renderer;
pub mod templates;

pub use archive::ArchiveBuilder;
pub use error::{LayergenError, Result};
pub use generator::{
    generate, ArchiveEntry, GeneratedArchive, GenerationRequest, Generator, ARCHIVE_FILE_NAME,
    DEFAULT_PACKAGE_PATH,
};
pub use naming::{lower_first, split_entities, EntityName};
pub use renderer::{GeneratedFile, TemplateRenderer};
pub use templates::FileKind;
