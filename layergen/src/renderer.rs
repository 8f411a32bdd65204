//! Template rendering for a single entity
//!
//! Uses a handlebars registry with escaping disabled, since the output is
//! Java source rather than HTML. Strict mode turns a missing variable into an
//! error instead of an empty string.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;
use crate::naming::{lower_first, EntityName};
use crate::templates::FileKind;

/// Renders the built-in templates
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

/// Variables available to every template
#[derive(Debug, Serialize)]
struct TemplateContext<'a> {
    package_path: &'a str,
    entity: &'a str,
    variable: &'a str,
}

impl TemplateRenderer {
    /// Create a renderer with all built-in templates registered
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);

        for kind in FileKind::ALL {
            registry.register_template_string(kind.template_name(), kind.template())?;
        }

        Ok(Self { registry })
    }

    /// Render the repository interface, service interface and service
    /// implementation for `entity`, in that order
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails
    pub fn render(&self, package_path: &str, entity: &EntityName) -> Result<[GeneratedFile; 3]> {
        let variable = lower_first(entity);
        let context = TemplateContext {
            package_path,
            entity: entity.as_str(),
            variable: &variable,
        };

        let [repository, service, service_impl] = FileKind::ALL;
        Ok([
            self.render_kind(repository, &context)?,
            self.render_kind(service, &context)?,
            self.render_kind(service_impl, &context)?,
        ])
    }

    fn render_kind(&self, kind: FileKind, context: &TemplateContext<'_>) -> Result<GeneratedFile> {
        let content = self.registry.render(kind.template_name(), context)?;

        Ok(GeneratedFile {
            path: kind.path_for(context.entity),
            content,
            description: kind.describe(context.entity),
        })
    }
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("templates", &FileKind::ALL.map(FileKind::template_name))
            .finish()
    }
}

/// Represents a generated file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Relative path inside the archive
    pub path: String,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}
