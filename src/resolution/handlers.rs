//! Controller reference → source file and method name.
//!
//! `App\Controller\BlogController::show` with controllers path `src/`
//! resolves to `src/Controller/BlogController.php`, method `show`. The
//! mapping is pure string manipulation; no file is touched here.

use std::path::PathBuf;

use super::filter::METHOD_SEPARATOR;
use crate::config::AuditConfig;
use crate::types::ResolvedHandler;

const NAMESPACE_SEPARATOR: char = '\\';

/// A controller reference that does not have the `Class::method` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedReference {
    pub reference: String,
}

impl std::fmt::Display for MalformedReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' is not a valid route with function format",
            self.reference
        )
    }
}

/// Maps controller references onto handler files.
#[derive(Debug, Clone)]
pub struct HandlerResolver {
    root_namespace: String,
    controllers_path: String,
    file_extension: String,
}

impl HandlerResolver {
    pub fn new(
        root_namespace: impl Into<String>,
        controllers_path: impl Into<String>,
        file_extension: impl Into<String>,
    ) -> Self {
        Self {
            root_namespace: root_namespace.into(),
            controllers_path: controllers_path.into(),
            file_extension: file_extension.into(),
        }
    }

    pub fn from_config(config: &AuditConfig) -> Self {
        Self::new(
            config.root_namespace.clone(),
            config.controllers_path.clone(),
            config.file_extension.clone(),
        )
    }

    /// Resolve `reference` to a file path (relative to the project root)
    /// and a method name.
    pub fn resolve(&self, reference: &str) -> Result<ResolvedHandler, MalformedReference> {
        let parts: Vec<&str> = reference.split(METHOD_SEPARATOR).collect();
        let [class_path, function_name] = parts.as_slice() else {
            return Err(MalformedReference {
                reference: reference.to_string(),
            });
        };

        let relative = match class_path.strip_prefix(self.root_namespace.as_str()) {
            Some(rest) if !self.root_namespace.is_empty() => {
                join_controllers_path(&self.controllers_path, rest)
            }
            _ => (*class_path).to_string(),
        };

        let file_path = format!(
            "{}{}",
            relative.replace(NAMESPACE_SEPARATOR, "/"),
            self.file_extension
        );

        Ok(ResolvedHandler {
            file_path: PathBuf::from(file_path),
            function_name: (*function_name).to_string(),
        })
    }
}

fn join_controllers_path(controllers_path: &str, rest: &str) -> String {
    if controllers_path.is_empty() || controllers_path.ends_with('/') {
        format!("{controllers_path}{rest}")
    } else {
        format!("{controllers_path}/{rest}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn resolver() -> HandlerResolver {
        HandlerResolver::from_config(&AuditConfig::default())
    }

    #[test]
    fn resolves_root_namespace_to_controllers_path() {
        let handler = resolver().resolve("App\\Controller\\Foo::bar").unwrap();
        assert_eq!(
            handler,
            ResolvedHandler {
                file_path: PathBuf::from("src/Controller/Foo.php"),
                function_name: "bar".to_string(),
            }
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let r = resolver();
        let a = r.resolve("App\\Controller\\Admin\\UserController::edit").unwrap();
        let b = r.resolve("App\\Controller\\Admin\\UserController::edit").unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.file_path,
            PathBuf::from("src/Controller/Admin/UserController.php")
        );
    }

    #[test]
    fn foreign_namespace_falls_back_to_separator_substitution() {
        let handler = resolver()
            .resolve("Acme\\Bundle\\Controller\\Foo::bar")
            .unwrap();
        assert_eq!(
            handler.file_path,
            PathBuf::from("Acme/Bundle/Controller/Foo.php")
        );
    }

    #[test]
    fn root_namespace_only_replaced_at_start() {
        let handler = resolver()
            .resolve("App\\Controller\\App\\Foo::bar")
            .unwrap();
        assert_eq!(handler.file_path, PathBuf::from("src/Controller/App/Foo.php"));
    }

    #[test]
    fn controllers_path_without_trailing_slash() {
        let r = HandlerResolver::new("App\\", "app/src", ".php");
        let handler = r.resolve("App\\Controller\\Foo::bar").unwrap();
        assert_eq!(handler.file_path, PathBuf::from("app/src/Controller/Foo.php"));
    }

    #[test]
    fn custom_extension_and_namespace() {
        let r = HandlerResolver::new("Acme\\", "lib/", ".inc");
        let handler = r.resolve("Acme\\Http\\Home::index").unwrap();
        assert_eq!(handler.file_path, PathBuf::from("lib/Http/Home.inc"));
        assert_eq!(handler.function_name, "index");
    }

    #[test_case("App\\Controller\\Foo" ; "no separator")]
    #[test_case("App\\Controller\\Foo::bar::baz" ; "two separators")]
    fn malformed_references(reference: &str) {
        let err = resolver().resolve(reference).unwrap_err();
        assert_eq!(err.reference, reference);
        assert!(err.to_string().contains("not a valid route"));
    }
}
