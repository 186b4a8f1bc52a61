//! Catalog Loader
//!
//! Builds the catalog from a directory of template files at bootstrap.
//! Files are read in file-name order and templates are inserted in document
//! order, which fixes the catalog iteration order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info, warn};

use template_types::Template;

use super::store::{Catalog, CatalogBuilder};

/// Loads templates from YAML or JSON files
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load every template file in `dir` into a new catalog
    ///
    /// A missing directory yields an empty catalog.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Catalog> {
        let dir = dir.as_ref();
        let mut builder = Catalog::builder();

        if !dir.exists() {
            warn!("Template directory does not exist: {:?}", dir);
            return Ok(builder.build());
        }

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read template directory: {:?}", dir))?
        {
            let path = entry?.path();
            if path.is_file() && is_template_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            debug!("Loading templates from {:?}", path);
            Self::load_file(&mut builder, path)?;
        }

        info!(
            "Loaded {} file based templates from {} files in {:?}",
            builder.len(),
            paths.len(),
            dir
        );

        Ok(builder.build())
    }

    /// Load one template file into `builder`, returning the number of templates read
    pub fn load_file(builder: &mut CatalogBuilder, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template file: {:?}", path))?;

        if content.trim().is_empty() {
            warn!("Template file {:?} is empty, skipping", path);
            return Ok(0);
        }

        let value: Value = if has_extension(path, &["json"]) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse template file: {:?}", path))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse template file: {:?}", path))?
        };

        if value.is_null() {
            warn!("Template file {:?} holds no document, skipping", path);
            return Ok(0);
        }

        let parsed = TemplateFile::from_value(value)
            .with_context(|| format!("Invalid template in file: {:?}", path))?;

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let templates = match parsed {
            TemplateFile::Many(templates) => templates
                .into_iter()
                .enumerate()
                .map(|(i, t)| (format!("{}[{}]", stem, i), t))
                .collect(),
            TemplateFile::One(template) => vec![(stem, template)],
        };

        let count = templates.len();
        for (fallback_key, template) in templates {
            let key = match template.template_id.clone() {
                Some(id) => id,
                None => {
                    warn!(
                        "Template '{}' in {:?} has no templateId, keyed as '{}'",
                        template.template_name, path, fallback_key
                    );
                    fallback_key
                }
            };

            if builder.insert(key.clone(), template).is_some() {
                warn!("Duplicate template id '{}' in {:?}, replacing", key, path);
            }
        }

        Ok(count)
    }
}

/// On-disk shape: a single template, or a `templates:` list
#[derive(Debug)]
enum TemplateFile {
    Many(Vec<Template>),
    One(Template),
}

impl TemplateFile {
    /// Pick the shape from the top-level keys, then deserialize only that shape
    fn from_value(value: Value) -> serde_json::Result<Self> {
        match value {
            Value::Object(mut map) => match map.remove("templates") {
                Some(list) => Ok(Self::Many(serde_json::from_value(list)?)),
                None => Ok(Self::One(serde_json::from_value(Value::Object(map))?)),
            },
            other => Ok(Self::One(serde_json::from_value(other)?)),
        }
    }
}

fn is_template_file(path: &Path) -> bool {
    has_extension(path, &["yaml", "yml", "json"])
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}
