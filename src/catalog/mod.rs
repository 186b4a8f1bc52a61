//! File based template catalog
//!
//! Populated once at bootstrap by [`CatalogLoader`], read-only afterwards.

mod loader;
mod store;

pub use loader::CatalogLoader;
pub use store::{
    install_global_catalog, Catalog, CatalogBuilder, CatalogStore, GlobalCatalogStore,
    InMemoryCatalogStore,
};
