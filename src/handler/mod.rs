//! Template handlers
//!
//! A handler answers identifier lookups and paginated listings on behalf of
//! the template-management API. The file based handler serves the read-only
//! catalog loaded at bootstrap.

mod file_based;
mod pagination;

use std::sync::Arc;

use template_types::{Template, TemplateInfo};

use crate::error::Result;

pub use file_based::FileBasedTemplateHandler;
pub use pagination::{
    validate_pagination_parameters, PageRequest, Pagination, DEFAULT_SEARCH_LIMIT,
};

/// Read-only query surface over a template source
///
/// `limit` and `offset` are zero-based and must be non-negative; a zero
/// `limit` selects the handler's default page size.
pub trait ReadOnlyTemplateHandler: Send + Sync {
    /// Template with the given identifier, or `None` if absent
    fn get_template_by_id(&self, template_id: &str) -> Result<Option<Arc<Template>>>;

    /// Page of [`TemplateInfo`] projections stamped with the current tenant
    fn list_templates(&self, limit: i32, offset: i32) -> Result<Vec<TemplateInfo>>;

    /// Page of full templates whose type text equals `template_type`
    ///
    /// `limit` and `offset` apply to the filtered sequence.
    fn list_templates_by_type(
        &self,
        template_type: &str,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<Arc<Template>>>;
}
