//! Catalog storage
//!
//! The catalog is an insertion-ordered, immutable map of template identifier
//! to template. Iteration order is the order in which the bootstrap loader
//! inserted entries; pagination relies on it being reproducible.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use template_types::Template;
use tracing::warn;

use crate::error::{ErrorMessage, Result, TemplateMgtError};

/// Immutable, insertion-ordered template catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Entries in iteration order
    entries: Vec<(String, Arc<Template>)>,
    /// Identifier -> position in `entries`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Look up a template by identifier
    pub fn get(&self, template_id: &str) -> Option<&Arc<Template>> {
        self.index
            .get(template_id)
            .map(|&position| &self.entries[position].1)
    }

    pub fn contains(&self, template_id: &str) -> bool {
        self.index.contains_key(template_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Templates in iteration order
    pub fn templates(&self) -> impl Iterator<Item = &Arc<Template>> + '_ {
        self.entries.iter().map(|(_, template)| template)
    }

    /// Identifiers in iteration order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

/// Accumulates catalog entries during bootstrap
///
/// The only mutating surface of a catalog. Consumed by [`CatalogBuilder::build`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    /// Insert a template under `key`
    ///
    /// Re-inserting an existing key replaces the template but keeps its
    /// original position. Returns the replaced template, if any.
    pub fn insert(&mut self, key: impl Into<String>, template: Template) -> Option<Arc<Template>> {
        let key = key.into();
        let template = Arc::new(template);

        match self.catalog.index.get(&key) {
            Some(&position) => Some(std::mem::replace(
                &mut self.catalog.entries[position].1,
                template,
            )),
            None => {
                self.catalog
                    .index
                    .insert(key.clone(), self.catalog.entries.len());
                self.catalog.entries.push((key, template));
                None
            }
        }
    }

    /// Insert a template keyed by its own identifier
    ///
    /// Returns the template back if it has no identifier.
    pub fn insert_template(&mut self, template: Template) -> std::result::Result<(), Template> {
        match template.template_id.clone() {
            Some(id) => {
                self.insert(id, template);
                Ok(())
            }
            None => Err(template),
        }
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn build(self) -> Catalog {
        self.catalog
    }
}

impl FromIterator<Template> for Catalog {
    /// Build a catalog keyed by each template's identifier
    ///
    /// Templates without an identifier are skipped with a warning.
    fn from_iter<I: IntoIterator<Item = Template>>(iter: I) -> Self {
        let mut builder = Catalog::builder();
        for template in iter {
            if let Err(skipped) = builder.insert_template(template) {
                warn!(
                    "Template '{}' has no templateId, not added to catalog",
                    skipped.template_name
                );
            }
        }
        builder.build()
    }
}

// ============================================================================
// STORE PORT
// ============================================================================

/// Read-only access to the current catalog
///
/// Implementations must return the same catalog on every call once bootstrap
/// has completed. No mutating accessor is exposed at this layer.
pub trait CatalogStore: Send + Sync {
    fn current_catalog(&self) -> Result<&Catalog>;
}

/// Catalog store owning an injected catalog
#[derive(Debug, Clone)]
pub struct InMemoryCatalogStore {
    catalog: Arc<Catalog>,
}

impl InMemoryCatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn current_catalog(&self) -> Result<&Catalog> {
        Ok(&self.catalog)
    }
}

// ============================================================================
// PROCESS-WIDE CATALOG
// ============================================================================

static GLOBAL_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Install the process-wide catalog. Can succeed only once per process.
pub fn install_global_catalog(catalog: Catalog) -> Result<()> {
    GLOBAL_CATALOG.set(catalog).map_err(|_| {
        TemplateMgtError::server(ErrorMessage::CatalogAlreadyInstalled, None)
    })?;
    Ok(())
}

/// Catalog store backed by the process-wide catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalCatalogStore;

impl CatalogStore for GlobalCatalogStore {
    fn current_catalog(&self) -> Result<&Catalog> {
        GLOBAL_CATALOG
            .get()
            .ok_or_else(|| TemplateMgtError::server(ErrorMessage::CatalogNotInitialized, None))
    }
}
