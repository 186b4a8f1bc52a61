//! Shared fixtures for handler integration tests

#![allow(dead_code)]

use std::sync::Arc;

use template_mgt::{
    Catalog, FileBasedTemplateHandler, FixedTenant, InMemoryCatalogStore, Template,
};

pub const TENANT_ID: i32 = 42;

/// Catalog A..E in insertion order:
///
/// | key | id | name    | type    |
/// |-----|----|---------|---------|
/// | a   | 1  | Alpha   | SAAS    |
/// | b   | 2  | Beta    | ON_PREM |
/// | c   | 3  | Gamma   | SAAS    |
/// | d   | 4  | Delta   | SAAS    |
/// | e   | 5  | Epsilon | ON_PREM |
pub fn scenario_catalog() -> Catalog {
    vec![
        Template::new("1", "Alpha", "SAAS"),
        Template::new("2", "Beta", "ON_PREM"),
        Template::new("3", "Gamma", "SAAS"),
        Template::new("4", "Delta", "SAAS"),
        Template::new("5", "Epsilon", "ON_PREM"),
    ]
    .into_iter()
    .collect()
}

/// Catalog of `size` templates with ids 1..=size, alternating SAAS / ON_PREM
pub fn numbered_catalog(size: usize) -> Catalog {
    (1..=size)
        .map(|i| {
            let template_type = if i % 2 == 1 { "SAAS" } else { "ON_PREM" };
            Template::new(i.to_string(), format!("Template {}", i), template_type)
        })
        .collect()
}

pub fn handler_for(catalog: Catalog) -> FileBasedTemplateHandler {
    FileBasedTemplateHandler::new(
        Arc::new(InMemoryCatalogStore::new(catalog)),
        Arc::new(FixedTenant(TENANT_ID)),
    )
}

pub fn scenario_handler() -> FileBasedTemplateHandler {
    handler_for(scenario_catalog())
}
