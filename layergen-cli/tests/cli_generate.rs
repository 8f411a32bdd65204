//! Integration tests for the generate and preview commands

use std::fs;
use std::io::Read;

use layergen_cli_lib::{CliConfig, GenerateCommand, InputArgs, PreviewCommand};
use tempfile::TempDir;
use zip::ZipArchive;

fn input(entities: &str, package: Option<&str>) -> InputArgs {
    InputArgs {
        entities: entities.to_string(),
        package: package.map(str::to_string),
        no_validate: false,
    }
}

/// Test that the saved archive holds every generated file
#[test]
fn test_generated_archive_contents() {
    let temp_dir = TempDir::new().unwrap();
    let cmd = GenerateCommand {
        input: input("User, Role_Admin", Some("com.acme.shop")),
        output: Some(temp_dir.path().to_path_buf()),
        force: false,
    };

    let path = cmd.execute(&CliConfig::default()).unwrap();
    let mut archive = ZipArchive::new(fs::File::open(&path).unwrap()).unwrap();

    let expected = [
        "repository/IUserRepository.java",
        "service/IUserService.java",
        "service/impl/UserService.java",
        "repository/IRole_AdminRepository.java",
        "service/IRole_AdminService.java",
        "service/impl/Role_AdminService.java",
    ];
    for name in expected {
        assert!(archive.by_name(name).is_ok(), "missing {name}");
    }

    let mut content = String::new();
    archive
        .by_name("service/impl/Role_AdminService.java")
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert!(content.starts_with("package com.acme.shop.service.impl;"));
    assert!(content.contains("private IRole_AdminRepository role_AdminRepository;"));
}

/// Test that the configured output directory is used when no flag is given
#[test]
fn test_configured_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let config = CliConfig {
        output_dir: temp_dir.path().join("build"),
        ..CliConfig::default()
    };
    let cmd = GenerateCommand {
        input: input("Product", None),
        output: None,
        force: false,
    };

    let path = cmd.execute(&config).unwrap();
    assert_eq!(path, temp_dir.path().join("build").join("generated-code.zip"));
}

/// Test that an archive written by the CLI matches the library output byte for byte
#[test]
fn test_saved_bytes_match_library() {
    let temp_dir = TempDir::new().unwrap();
    let cmd = GenerateCommand {
        input: input("User", Some("com.acme")),
        output: Some(temp_dir.path().to_path_buf()),
        force: false,
    };

    let path = cmd.execute(&CliConfig::default()).unwrap();
    let saved = fs::read(path).unwrap();
    let expected = layergen::generate(&layergen::GenerationRequest::new("com.acme", "User")).unwrap();

    assert_eq!(saved, expected.bytes());
}

/// Test that an entity list with only separators never reaches the disk
#[test]
fn test_blank_entities_rejected_without_validation() {
    let temp_dir = TempDir::new().unwrap();
    let mut args = input(" , ,", None);
    args.no_validate = true;
    let cmd = GenerateCommand {
        input: args,
        output: Some(temp_dir.path().to_path_buf()),
        force: false,
    };

    let err = cmd.execute(&CliConfig::default()).unwrap_err();
    let core = err.downcast_ref::<layergen::LayergenError>().unwrap();
    assert!(core.is_invalid_input());
    assert!(!temp_dir.path().join("generated-code.zip").exists());
}

/// Test that preview lists files without writing anything
#[test]
fn test_preview_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let config = CliConfig {
        output_dir: temp_dir.path().to_path_buf(),
        ..CliConfig::default()
    };
    let cmd = PreviewCommand {
        input: input("User", None),
        show_content: false,
        json: true,
    };

    let out = cmd.render(&config).unwrap();
    assert!(out.contains("service/impl/UserService.java"));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
