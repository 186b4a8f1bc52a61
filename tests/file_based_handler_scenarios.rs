//! End-to-end scenarios for the file based template handler
//!
//! Catalog: Alpha(1, SAAS), Beta(2, ON_PREM), Gamma(3, SAAS), Delta(4, SAAS),
//! Epsilon(5, ON_PREM) in that order; current tenant 42.

mod helpers;

use std::sync::Arc;

use helpers::{handler_for, numbered_catalog, scenario_handler, TENANT_ID};
use template_mgt::{ErrorMessage, ReadOnlyTemplateHandler, Template, TemplateInfo};

fn names<'a>(templates: impl IntoIterator<Item = &'a Arc<Template>>) -> Vec<&'a str> {
    templates
        .into_iter()
        .map(|t| t.template_name.as_str())
        .collect()
}

#[test]
fn get_existing_template_by_id() {
    let handler = scenario_handler();
    let template = handler.get_template_by_id("3").unwrap().unwrap();
    assert_eq!(template.template_name, "Gamma");
}

#[test]
fn get_missing_template_is_none() {
    let handler = scenario_handler();
    assert!(handler.get_template_by_id("99").unwrap().is_none());
}

#[test]
fn every_catalog_id_resolves_to_its_template() {
    let handler = scenario_handler();
    for id in ["1", "2", "3", "4", "5"] {
        let template = handler.get_template_by_id(id).unwrap().unwrap();
        assert_eq!(template.id(), Some(id));
    }
}

#[test]
fn list_window_in_middle() {
    let handler = scenario_handler();
    let page = handler.list_templates(2, 1).unwrap();
    assert_eq!(
        page,
        vec![
            TemplateInfo::new(2, TENANT_ID, "Beta"),
            TemplateInfo::new(3, TENANT_ID, "Gamma"),
        ]
    );
}

#[test]
fn list_zero_limit_returns_everything_under_default() {
    let handler = scenario_handler();
    let page = handler.list_templates(0, 0).unwrap();
    let ids: Vec<i32> = page.iter().map(|i| i.template_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert!(page.iter().all(|i| i.tenant_id == TENANT_ID));
}

#[test]
fn list_zero_limit_caps_at_default_page_size() {
    let handler = handler_for(numbered_catalog(150));
    assert_eq!(handler.list_templates(0, 0).unwrap().len(), 100);
    assert_eq!(handler.list_templates(0, 120).unwrap().len(), 30);
    assert_eq!(handler.list_templates(150, 0).unwrap().len(), 150);
}

#[test]
fn list_by_type_zero_limit_caps_at_default_page_size() {
    // 150 SAAS entries among 300
    let handler = handler_for(numbered_catalog(300));
    assert_eq!(handler.list_templates_by_type("SAAS", 0, 0).unwrap().len(), 100);
    assert_eq!(handler.list_templates_by_type("SAAS", 0, 120).unwrap().len(), 30);

    let tail = handler.list_templates_by_type("SAAS", 0, 120).unwrap();
    assert_eq!(tail[0].id(), Some("241"));
    assert_eq!(tail[29].id(), Some("299"));
}

#[test]
fn list_by_type_returns_full_records_in_order() {
    let handler = scenario_handler();
    let saas = handler.list_templates_by_type("SAAS", 10, 0).unwrap();
    assert_eq!(names(&saas), vec!["Alpha", "Gamma", "Delta"]);
    assert!(saas.iter().all(|t| t.type_name() == Some("SAAS")));
}

#[test]
fn list_by_type_paginates_filtered_sequence() {
    let handler = scenario_handler();
    let saas = handler.list_templates_by_type("SAAS", 2, 1).unwrap();
    assert_eq!(names(&saas), vec!["Gamma", "Delta"]);

    let on_prem = handler.list_templates_by_type("ON_PREM", 1, 1).unwrap();
    assert_eq!(names(&on_prem), vec!["Epsilon"]);
}

#[test]
fn list_by_type_is_exact_match() {
    let handler = scenario_handler();
    assert!(handler
        .list_templates_by_type("saas", 0, 0)
        .unwrap()
        .is_empty());
    assert!(handler
        .list_templates_by_type("SAAS ", 0, 0)
        .unwrap()
        .is_empty());
}

#[test]
fn negative_limit_is_invalid_arguments() {
    let handler = scenario_handler();
    let err = handler.list_templates(-1, 0).unwrap_err();
    assert!(err.is_client_error());
    assert_eq!(
        err.error_message(),
        ErrorMessage::InvalidArgumentsForLimitOffset
    );
    assert_eq!(err.http_status(), 400);
}

#[test]
fn negative_offset_is_invalid_arguments_for_both_listings() {
    let handler = scenario_handler();
    let projected = handler.list_templates(5, -1).unwrap_err();
    let filtered = handler.list_templates_by_type("SAAS", 5, -1).unwrap_err();
    assert_eq!(projected.code(), filtered.code());
    assert_eq!(
        filtered.error_message(),
        ErrorMessage::InvalidArgumentsForLimitOffset
    );
}

#[test]
fn offset_at_or_past_end_is_empty() {
    let handler = scenario_handler();
    assert!(handler.list_templates(10, 5).unwrap().is_empty());
    assert!(handler.list_templates(10, 500).unwrap().is_empty());
    assert!(handler
        .list_templates_by_type("SAAS", 10, 3)
        .unwrap()
        .is_empty());
}

#[test]
fn window_past_end_returns_tail() {
    let handler = scenario_handler();
    let tail = handler.list_templates(10, 3).unwrap();
    assert_eq!(
        tail,
        vec![
            TemplateInfo::new(4, TENANT_ID, "Delta"),
            TemplateInfo::new(5, TENANT_ID, "Epsilon"),
        ]
    );
}
