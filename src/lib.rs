//! Read-only catalog of file based templates
//!
//! Identity-management templates (application and identity-provider
//! templates) are loaded from disk once at process start. This crate serves
//! them to the template-management API:
//!
//! - lookup by identifier
//! - paginated listing projected to [`TemplateInfo`], stamped with the
//!   current tenant
//! - paginated listing filtered by template type
//!
//! # Architecture
//!
//! ```text
//! caller ──► ReadOnlyTemplateHandler ──► CatalogStore ──► Catalog (ordered, immutable)
//!                     │
//!                     └──► TenantContext (current tenant id)
//! ```
//!
//! The catalog iterates in loader insertion order: template files sorted by
//! file name, templates within a file in document order.
//!
//! # Usage
//!
//! ```ignore
//! use template_mgt::{bootstrap, ReadOnlyTemplateHandler, TemplateMgtConfig};
//!
//! let config = TemplateMgtConfig::from_env()?;
//! let handler = bootstrap(&config)?;
//!
//! let page = handler.list_templates(0, 0)?; // default page size
//! let saml = handler.list_templates_by_type("APPLICATION_TEMPLATE", 10, 0)?;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod handler;
pub mod tenant;

use anyhow::Context;
use tracing::info;

// Re-export main types
pub use catalog::{
    install_global_catalog, Catalog, CatalogBuilder, CatalogLoader, CatalogStore,
    GlobalCatalogStore, InMemoryCatalogStore,
};
pub use config::TemplateMgtConfig;
pub use error::{ErrorMessage, Result, TemplateMgtError};
pub use handler::{
    FileBasedTemplateHandler, PageRequest, Pagination, ReadOnlyTemplateHandler,
    DEFAULT_SEARCH_LIMIT,
};
pub use template_types::{Template, TemplateInfo, TemplateType};
pub use tenant::{FixedTenant, ScopedTenant, TenantContext, SUPER_TENANT_ID};

/// Load the configured template directory, install it as the process-wide
/// catalog and return a handler over it
pub fn bootstrap(config: &TemplateMgtConfig) -> anyhow::Result<FileBasedTemplateHandler> {
    let catalog = CatalogLoader::load_from_dir(&config.templates_dir)?;
    let count = catalog.len();

    install_global_catalog(catalog).context("Failed to install file based templates")?;
    info!(templates = count, "File based template catalog installed");

    Ok(FileBasedTemplateHandler::global(config))
}
