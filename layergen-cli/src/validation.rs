//! Input syntax checks applied before handing user input to the generator
//!
//! The generator itself trusts its input; these rules keep obviously broken
//! package paths and entity lists from reaching it.

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Letters, digits, dots and underscores, not starting with a digit or dot
static PACKAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_.]*$").expect("package pattern is valid")
});

/// Comma-separated names made of letters, `_` and `-`, no trailing comma
static ENTITY_LIST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z_-]*(\s*,\s*[A-Za-z][A-Za-z_-]*)*$")
        .expect("entity list pattern is valid")
});

/// Validate a package path
///
/// An empty package path is accepted; the generator substitutes its default.
///
/// # Errors
///
/// Returns an error if the package path contains anything other than letters,
/// digits, dots and underscores, or starts with a digit or dot.
pub fn validate_package(package: &str) -> Result<()> {
    if package.is_empty() || PACKAGE_PATTERN.is_match(package) {
        return Ok(());
    }

    bail!(
        "Invalid package path: '{package}'. Use only letters, digits, dots and underscores (e.g. com.example.project)"
    );
}

/// Validate a comma-separated entity list
///
/// # Errors
///
/// Returns an error if the list is blank, contains a name that does not start
/// with a letter, contains characters other than letters, `_` and `-`, or
/// ends with a comma.
pub fn validate_entities(entities: &str) -> Result<()> {
    if entities.trim().is_empty() {
        bail!("At least one entity must be specified (e.g. User, Role_Admin)");
    }

    if !ENTITY_LIST_PATTERN.is_match(entities) {
        bail!(
            "Invalid entity list: '{entities}'. Use letters, '-' or '_', separated by commas, without a trailing comma"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_packages() {
        let valid = ["", "com", "com.example.project", "_internal.pkg", "org.acme2.shop_v1"];

        for package in valid {
            assert!(validate_package(package).is_ok(), "should be valid: {package}");
        }
    }

    #[test]
    fn test_invalid_packages() {
        let invalid = ["1com", ".com", "com-example", "com example", "com/example", " com"];

        for package in invalid {
            assert!(validate_package(package).is_err(), "should be invalid: {package}");
        }
    }

    #[test]
    fn test_valid_entity_lists() {
        let valid = ["User", "User, Role", "User,Role_Admin", "Line-Item ,  Order", "a"];

        for entities in valid {
            assert!(validate_entities(entities).is_ok(), "should be valid: {entities}");
        }
    }

    #[test]
    fn test_invalid_entity_lists() {
        let invalid = [
            "",
            "   ",
            "User,",
            ",User",
            "User,,Role",
            "1User",
            "_User",
            "User2",
            "User Role",
            " User",
        ];

        for entities in invalid {
            assert!(validate_entities(entities).is_err(), "should be invalid: {entities}");
        }
    }

    #[test]
    fn test_blank_entities_message() {
        let err = validate_entities("  ").unwrap_err();
        assert!(err.to_string().contains("At least one entity"));
    }
}
