//! layergen CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod observability;
pub mod validation;

pub use commands::{GenerateCommand, InputArgs, PreviewCommand};
pub use config::CliConfig;
