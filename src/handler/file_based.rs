//! File based template handler
//!
//! Serves the catalog populated from template files at bootstrap. Holds no
//! data of its own: every call reads the store, and listing projections read
//! the tenant context once per projected entry.

use std::sync::Arc;

use template_types::{Template, TemplateInfo};
use tracing::warn;

use super::pagination::{PageRequest, Pagination, DEFAULT_SEARCH_LIMIT};
use super::ReadOnlyTemplateHandler;
use crate::catalog::{CatalogStore, GlobalCatalogStore};
use crate::config::TemplateMgtConfig;
use crate::error::{ErrorMessage, Result, TemplateMgtError};
use crate::tenant::{ScopedTenant, TenantContext};

pub struct FileBasedTemplateHandler {
    store: Arc<dyn CatalogStore>,
    tenant: Arc<dyn TenantContext>,
    default_limit: u32,
}

impl FileBasedTemplateHandler {
    pub fn new(store: Arc<dyn CatalogStore>, tenant: Arc<dyn TenantContext>) -> Self {
        Self {
            store,
            tenant,
            default_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Handler over `store` configured from `config`, with a scoped tenant context
    pub fn from_config(config: &TemplateMgtConfig, store: Arc<dyn CatalogStore>) -> Self {
        Self::new(store, Arc::new(ScopedTenant::new(config.default_tenant_id)))
            .with_default_limit(config.default_search_limit)
    }

    /// Handler over the process-wide catalog
    pub fn global(config: &TemplateMgtConfig) -> Self {
        Self::from_config(config, Arc::new(GlobalCatalogStore))
    }

    /// Set the page size used for an unspecified limit. Zero is raised to one.
    pub fn with_default_limit(mut self, default_limit: u32) -> Self {
        if default_limit == 0 {
            warn!("Default search limit must be positive, using 1");
        }
        self.default_limit = default_limit.max(1);
        self
    }

    pub fn default_limit(&self) -> u32 {
        self.default_limit
    }

    /// Projected listing with an explicit "unspecified" limit
    pub fn list_page(&self, request: PageRequest) -> Result<Vec<TemplateInfo>> {
        self.project_page(Pagination::from_request(request, self.default_limit))
    }

    /// Type-filtered listing with an explicit "unspecified" limit
    pub fn list_page_by_type(
        &self,
        template_type: &str,
        request: PageRequest,
    ) -> Result<Vec<Arc<Template>>> {
        self.filter_page(
            template_type,
            Pagination::from_request(request, self.default_limit),
        )
    }

    fn project_page(&self, page: Pagination) -> Result<Vec<TemplateInfo>> {
        let catalog = self.store.current_catalog()?;
        page.apply(catalog.templates())
            .map(|template| self.project(template))
            .collect()
    }

    fn filter_page(&self, template_type: &str, page: Pagination) -> Result<Vec<Arc<Template>>> {
        let catalog = self.store.current_catalog()?;
        let matching = catalog
            .templates()
            .filter(|template| template.type_name() == Some(template_type));
        Ok(page.apply(matching).cloned().collect())
    }

    fn project(&self, template: &Template) -> Result<TemplateInfo> {
        let id = template
            .id()
            .ok_or_else(|| TemplateMgtError::server(ErrorMessage::TemplateIdMissing, None))?;
        let template_id = id.parse::<i32>().map_err(|e| {
            TemplateMgtError::server(ErrorMessage::InvalidTemplateId, Some(Box::new(e)))
        })?;

        Ok(TemplateInfo::new(
            template_id,
            self.tenant.current_tenant_id(),
            template.template_name.clone(),
        ))
    }
}

impl ReadOnlyTemplateHandler for FileBasedTemplateHandler {
    fn get_template_by_id(&self, template_id: &str) -> Result<Option<Arc<Template>>> {
        Ok(self.store.current_catalog()?.get(template_id).cloned())
    }

    fn list_templates(&self, limit: i32, offset: i32) -> Result<Vec<TemplateInfo>> {
        let page = Pagination::from_args(limit, offset, self.default_limit)?;
        self.project_page(page)
    }

    fn list_templates_by_type(
        &self,
        template_type: &str,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<Arc<Template>>> {
        let page = Pagination::from_args(limit, offset, self.default_limit)?;
        self.filter_page(template_type, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, InMemoryCatalogStore};
    use crate::tenant::FixedTenant;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store that counts catalog reads
    struct CountingStore {
        inner: InMemoryCatalogStore,
        reads: AtomicUsize,
    }

    impl CatalogStore for CountingStore {
        fn current_catalog(&self) -> Result<&Catalog> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.current_catalog()
        }
    }

    fn catalog() -> Catalog {
        let mut builder = Catalog::builder();
        builder.insert("1", Template::new("1", "Alpha", "SAAS"));
        builder.insert("2", Template::new("2", "Beta", "ON_PREM"));
        builder.insert("3", Template::new("3", "Gamma", "SAAS"));
        builder.build()
    }

    fn handler_with(catalog: Catalog) -> FileBasedTemplateHandler {
        FileBasedTemplateHandler::new(
            Arc::new(InMemoryCatalogStore::new(catalog)),
            Arc::new(FixedTenant(42)),
        )
    }

    #[test]
    fn test_validation_runs_before_catalog_access() {
        let store = Arc::new(CountingStore {
            inner: InMemoryCatalogStore::new(catalog()),
            reads: AtomicUsize::new(0),
        });
        let handler = FileBasedTemplateHandler::new(store.clone(), Arc::new(FixedTenant(1)));

        assert!(handler.list_templates(-1, 0).is_err());
        assert!(handler.list_templates(0, -1).is_err());
        assert!(handler.list_templates_by_type("SAAS", -5, 0).is_err());
        assert_eq!(store.reads.load(Ordering::SeqCst), 0);

        handler.list_templates(1, 0).unwrap();
        assert_eq!(store.reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_lookup_returns_shared_record() {
        let store = Arc::new(InMemoryCatalogStore::new(catalog()));
        let handler = FileBasedTemplateHandler::new(store.clone(), Arc::new(FixedTenant(1)));

        let found = handler.get_template_by_id("2").unwrap().unwrap();
        let held = store.current_catalog().unwrap().get("2").unwrap();
        assert!(Arc::ptr_eq(&found, held));
    }

    #[test]
    fn test_non_numeric_id_fails_projection() {
        let mut builder = Catalog::builder();
        builder.insert("1", Template::new("1", "Alpha", "SAAS"));
        builder.insert("x", Template::new("abc", "Broken", "SAAS"));
        let handler = handler_with(builder.build());

        let err = handler.list_templates(0, 0).unwrap_err();
        assert!(!err.is_client_error());
        assert_eq!(err.error_message(), ErrorMessage::InvalidTemplateId);
        assert!(std::error::Error::source(&err).is_some());

        // The broken entry is outside this page
        let page = handler.list_templates(1, 0).unwrap();
        assert_eq!(page, vec![TemplateInfo::new(1, 42, "Alpha")]);
    }

    #[test]
    fn test_missing_id_fails_projection() {
        let mut keyless = Template::new("0", "Keyless", "SAAS");
        keyless.template_id = None;
        let mut builder = Catalog::builder();
        builder.insert("keyless", keyless);
        let handler = handler_with(builder.build());

        let err = handler.list_templates(0, 0).unwrap_err();
        assert_eq!(err.error_message(), ErrorMessage::TemplateIdMissing);
        // Type filtering does not parse identifiers
        assert_eq!(handler.list_templates_by_type("SAAS", 0, 0).unwrap().len(), 1);
    }

    #[test]
    fn test_absent_type_never_matches() {
        let mut untyped = Template::new("9", "Untyped", "SAAS");
        untyped.template_type = None;
        let mut builder = Catalog::builder();
        builder.insert("9", untyped);
        let handler = handler_with(builder.build());

        assert!(handler.list_templates_by_type("", 0, 0).unwrap().is_empty());
        assert!(handler.list_templates_by_type("SAAS", 0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_custom_default_limit() {
        let handler = handler_with(catalog()).with_default_limit(2);
        assert_eq!(handler.list_templates(0, 0).unwrap().len(), 2);
        assert_eq!(handler.list_templates(3, 0).unwrap().len(), 3);
    }

    #[test]
    fn test_zero_default_limit_raised_to_one() {
        let handler = handler_with(catalog()).with_default_limit(0);
        assert_eq!(handler.default_limit(), 1);
        assert_eq!(handler.list_templates(0, 0).unwrap().len(), 1);
        assert_eq!(handler.list_templates_by_type("SAAS", 0, 0).unwrap().len(), 1);
    }

    #[test]
    fn test_list_page_explicit_zero_is_empty() {
        let handler = handler_with(catalog());
        assert!(handler
            .list_page(PageRequest::new(Some(0), 0))
            .unwrap()
            .is_empty());
        assert_eq!(handler.list_page(PageRequest::default()).unwrap().len(), 3);
        let saas = handler
            .list_page_by_type("SAAS", PageRequest::new(None, 1))
            .unwrap();
        assert_eq!(saas.len(), 1);
        assert_eq!(saas[0].template_name, "Gamma");
    }

    #[test]
    fn test_projection_reads_scoped_tenant() {
        let handler = FileBasedTemplateHandler::new(
            Arc::new(InMemoryCatalogStore::new(catalog())),
            Arc::new(ScopedTenant::new(-1)),
        );

        let unscoped = handler.list_templates(1, 0).unwrap();
        assert_eq!(unscoped[0].tenant_id, -1);

        let scoped = ScopedTenant::sync_scope(77, || handler.list_templates(1, 0)).unwrap();
        assert_eq!(scoped[0].tenant_id, 77);
    }
}
