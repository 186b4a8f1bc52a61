//! Tenant context
//!
//! Supplies the tenant identifier of the current request. Listing
//! projections are stamped with it.

use std::future::Future;

/// Tenant id of the platform super tenant
pub const SUPER_TENANT_ID: i32 = -1234;

// Task-local rather than thread-local: tokio moves tasks between worker
// threads at await points.
tokio::task_local! {
    static CURRENT_TENANT: i32;
}

/// Source of the tenant id bound to the current execution context
pub trait TenantContext: Send + Sync {
    fn current_tenant_id(&self) -> i32;
}

/// Always reports the same tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTenant(pub i32);

impl TenantContext for FixedTenant {
    fn current_tenant_id(&self) -> i32 {
        self.0
    }
}

/// Reads the tenant bound with [`ScopedTenant::scope`] or [`ScopedTenant::sync_scope`]
///
/// Outside any scope the fallback tenant is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopedTenant {
    fallback: i32,
}

impl ScopedTenant {
    pub fn new(fallback: i32) -> Self {
        Self { fallback }
    }

    /// Run `future` with `tenant_id` bound as the current tenant
    pub async fn scope<F>(tenant_id: i32, future: F) -> F::Output
    where
        F: Future,
    {
        CURRENT_TENANT.scope(tenant_id, future).await
    }

    /// Run `f` synchronously with `tenant_id` bound as the current tenant
    pub fn sync_scope<F, R>(tenant_id: i32, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        CURRENT_TENANT.sync_scope(tenant_id, f)
    }

    /// Tenant bound to the current scope, if any
    pub fn bound() -> Option<i32> {
        CURRENT_TENANT.try_with(|tenant| *tenant).ok()
    }
}

impl Default for ScopedTenant {
    fn default() -> Self {
        Self::new(SUPER_TENANT_ID)
    }
}

impl TenantContext for ScopedTenant {
    fn current_tenant_id(&self) -> i32 {
        Self::bound().unwrap_or(self.fallback)
    }
}
