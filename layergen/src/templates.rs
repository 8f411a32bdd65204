//! Built-in templates for the generated Java sources
//!
//! Each template receives `package_path`, `entity` and `variable`. Values are
//! inserted verbatim; the renderer disables escaping.

/// Spring Data JPA repository interface
pub const REPOSITORY_TEMPLATE: &str = concat!(
    "package {{package_path}}.repository;\n",
    "\n",
    "import org.springframework.data.jpa.repository.JpaRepository;\n",
    "\n",
    "public interface I{{entity}}Repository extends JpaRepository<{{entity}}, Long> { \n",
    "    // methods here\n",
    "}",
);

/// Service interface
pub const SERVICE_INTERFACE_TEMPLATE: &str = concat!(
    "package {{package_path}}.service;\n",
    "\n",
    "public interface I{{entity}}Service { \n",
    "    // methods here\n",
    "}",
);

/// Service implementation with constructor injection of the repository
pub const SERVICE_IMPL_TEMPLATE: &str = concat!(
    "package {{package_path}}.service.impl;\n",
    "\n",
    "import {{package_path}}.service.I{{entity}}Service;\n",
    "import {{package_path}}.repository.I{{entity}}Repository;\n",
    "import org.springframework.stereotype.Service;\n",
    "\n",
    "@Service\n",
    "public class {{entity}}Service implements I{{entity}}Service {\n",
    "      private I{{entity}}Repository {{variable}}Repository;\n",
    "      public {{entity}}Service (I{{entity}}Repository {{variable}}Repository){\n",
    "        this.{{variable}}Repository = {{variable}}Repository;\n",
    "      }\n",
    "    // implementation here\n",
    "}",
);

/// The three files generated for every entity, in archive order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// `repository/I{Entity}Repository.java`
    Repository,
    /// `service/I{Entity}Service.java`
    ServiceInterface,
    /// `service/impl/{Entity}Service.java`
    ServiceImpl,
}

impl FileKind {
    /// All kinds in the order they are added to the archive
    pub const ALL: [Self; 3] = [Self::Repository, Self::ServiceInterface, Self::ServiceImpl];

    /// Name the template is registered under
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Repository => "repository",
            Self::ServiceInterface => "service",
            Self::ServiceImpl => "service_impl",
        }
    }

    /// Template source
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Repository => REPOSITORY_TEMPLATE,
            Self::ServiceInterface => SERVICE_INTERFACE_TEMPLATE,
            Self::ServiceImpl => SERVICE_IMPL_TEMPLATE,
        }
    }

    /// Directory inside the archive, with trailing slash
    #[must_use]
    pub const fn directory(self) -> &'static str {
        match self {
            Self::Repository => "repository/",
            Self::ServiceInterface => "service/",
            Self::ServiceImpl => "service/impl/",
        }
    }

    /// Relative archive path of this kind's file for `entity`
    #[must_use]
    pub fn path_for(self, entity: &str) -> String {
        let dir = self.directory();
        match self {
            Self::Repository => format!("{dir}I{entity}Repository.java"),
            Self::ServiceInterface => format!("{dir}I{entity}Service.java"),
            Self::ServiceImpl => format!("{dir}{entity}Service.java"),
        }
    }

    /// Short description for user feedback
    #[must_use]
    pub fn describe(self, entity: &str) -> String {
        match self {
            Self::Repository => format!("Repository interface for {entity}"),
            Self::ServiceInterface => format!("Service interface for {entity}"),
            Self::ServiceImpl => format!("Service implementation for {entity}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(
            FileKind::Repository.path_for("Product"),
            "repository/IProductRepository.java"
        );
        assert_eq!(
            FileKind::ServiceInterface.path_for("Product"),
            "service/IProductService.java"
        );
        assert_eq!(
            FileKind::ServiceImpl.path_for("Product"),
            "service/impl/ProductService.java"
        );
    }

    #[test]
    fn test_paths_live_in_their_directory() {
        for kind in FileKind::ALL {
            assert!(kind.path_for("User").starts_with(kind.directory()));
        }
    }

    #[test]
    fn test_template_names_are_unique() {
        let names: std::collections::HashSet<_> =
            FileKind::ALL.iter().map(|k| k.template_name()).collect();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_templates_keep_trailing_space_after_brace() {
        assert!(REPOSITORY_TEMPLATE.contains("Long> { \n"));
        assert!(SERVICE_INTERFACE_TEMPLATE.contains("Service { \n"));
    }

    #[test]
    fn test_templates_have_no_trailing_newline() {
        for kind in FileKind::ALL {
            assert!(kind.template().ends_with('}'), "{:?}", kind);
        }
    }
}
