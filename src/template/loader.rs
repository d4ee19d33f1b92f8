//! Template discovery and loading from a collection directory.
//!
//! A collection is a directory with one subdirectory per template. The
//! subdirectory name is the template ID and holds the template document
//! (`template.yml` by default). Discovery is not recursive.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TplspecError};
use crate::template::schema::Template;

/// Something that can enumerate and load templates.
pub trait TemplateSource {
    /// Template IDs in processing order.
    fn template_ids(&self) -> Result<Vec<String>>;

    /// Load one template. An empty document is `Ok(None)`.
    fn load(&self, template_id: &str) -> Result<Option<Template>>;
}

/// Loader for a template collection directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    file_name: String,
}

impl DirectorySource {
    /// Create a loader for `root`, reading `file_name` in each template directory.
    pub fn new(root: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            file_name: file_name.into(),
        }
    }

    /// The collection directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a template's document.
    pub fn template_path(&self, template_id: &str) -> PathBuf {
        self.root.join(template_id).join(&self.file_name)
    }
}

impl TemplateSource for DirectorySource {
    fn template_ids(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root).map_err(|e| TplspecError::TemplateLoad {
            template: self.root.display().to_string(),
            message: format!("cannot read collection directory: {}", e),
        })?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            if !path.is_dir() {
                tracing::debug!("Skipping non-directory {}", path.display());
                continue;
            }

            ids.push(entry.file_name().to_string_lossy().into_owned());
        }

        ids.sort();
        Ok(ids)
    }

    fn load(&self, template_id: &str) -> Result<Option<Template>> {
        let path = self.template_path(template_id);
        tracing::debug!("Loading template {} from {}", template_id, path.display());

        let content = fs::read_to_string(&path).map_err(|e| TplspecError::TemplateLoad {
            template: template_id.to_string(),
            message: format!("{}: {}", path.display(), e),
        })?;

        Template::from_yaml(&content).map_err(|e| TplspecError::TemplateLoad {
            template: template_id.to_string(),
            message: format!("{}: {}", path.display(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_template(root: &Path, id: &str, content: &str) {
        let dir = root.join(id);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("template.yml"), content).unwrap();
    }

    #[test]
    fn lists_subdirectories_sorted() {
        let temp = TempDir::new().unwrap();
        write_template(temp.path(), "ios", "title: iOS");
        write_template(temp.path(), "android", "title: Android");
        fs::write(temp.path().join("README.md"), "# templates").unwrap();

        let source = DirectorySource::new(temp.path(), "template.yml");
        assert_eq!(source.template_ids().unwrap(), vec!["android", "ios"]);
    }

    #[test]
    fn does_not_recurse() {
        let temp = TempDir::new().unwrap();
        write_template(&temp.path().join("group"), "nested", "title: Nested");

        let source = DirectorySource::new(temp.path(), "template.yml");
        assert_eq!(source.template_ids().unwrap(), vec!["group"]);
    }

    #[test]
    fn missing_collection_is_load_error() {
        let temp = TempDir::new().unwrap();
        let source = DirectorySource::new(temp.path().join("nope"), "template.yml");
        assert!(matches!(
            source.template_ids(),
            Err(TplspecError::TemplateLoad { .. })
        ));
    }

    #[test]
    fn loads_template() {
        let temp = TempDir::new().unwrap();
        write_template(temp.path(), "android", "title: Android\nconfig: x\n");

        let source = DirectorySource::new(temp.path(), "template.yml");
        let tpl = source.load("android").unwrap().unwrap();
        assert_eq!(tpl.title, "Android");
    }

    #[test]
    fn missing_file_is_load_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("empty")).unwrap();

        let source = DirectorySource::new(temp.path(), "template.yml");
        let err = source.load("empty").unwrap_err();
        assert!(matches!(
            err,
            TplspecError::TemplateLoad { ref template, .. } if template == "empty"
        ));
    }

    #[test]
    fn malformed_yaml_is_load_error() {
        let temp = TempDir::new().unwrap();
        write_template(temp.path(), "bad", "title: [unclosed\n");

        let source = DirectorySource::new(temp.path(), "template.yml");
        assert!(matches!(
            source.load("bad"),
            Err(TplspecError::TemplateLoad { .. })
        ));
    }

    #[test]
    fn empty_file_loads_as_none() {
        let temp = TempDir::new().unwrap();
        write_template(temp.path(), "blank", "");

        let source = DirectorySource::new(temp.path(), "template.yml");
        assert_eq!(source.load("blank").unwrap(), None);
    }

    #[test]
    fn custom_file_name() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("web");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("catalog.yaml"), "title: Web").unwrap();

        let source = DirectorySource::new(temp.path(), "catalog.yaml");
        assert_eq!(source.load("web").unwrap().unwrap().title, "Web");
    }
}
