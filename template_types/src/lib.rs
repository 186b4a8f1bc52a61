//! Template Types - Level 1 Foundation Types
//!
//! Pure data structures for the read-only template catalog. Every other
//! crate in the workspace builds on these; this crate depends on nothing
//! but serde.
//!
//! ## Contents
//!
//! - [`Template`]: a pre-defined configuration artifact (application or
//!   identity-provider template) as loaded from disk
//! - [`TemplateType`]: the kind of a template, compared by its textual form
//! - [`TemplateInfo`]: the three-field projection returned by listing APIs
//!
//! ## Critical Rules
//!
//! 1. **NO BUSINESS LOGIC** - Only data structures, constructors and accessors
//! 2. **NO WORKSPACE DEPENDENCIES**
//! 3. **SERIALIZABLE** - Field names follow the camelCase wire form of the
//!    template-management API (`templateId`, `templateName`, ...)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// TEMPLATE TYPE
// ============================================================================

/// Kind of a template.
///
/// The two kinds shipped with the platform are modelled explicitly. Catalogs
/// may carry other kinds; those are preserved verbatim in [`TemplateType::Other`]
/// so that filtering by their textual form still works.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateType {
    /// Service provider (application) template
    ApplicationTemplate,
    /// Identity provider template
    IdpTemplate,
    /// Any other kind, kept as written in the catalog file
    Other(String),
}

impl TemplateType {
    pub const APPLICATION_TEMPLATE: &'static str = "APPLICATION_TEMPLATE";
    pub const IDP_TEMPLATE: &'static str = "IDP_TEMPLATE";

    /// Textual form used for serialization and type filtering
    pub fn as_str(&self) -> &str {
        match self {
            TemplateType::ApplicationTemplate => Self::APPLICATION_TEMPLATE,
            TemplateType::IdpTemplate => Self::IDP_TEMPLATE,
            TemplateType::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for TemplateType {
    fn from(s: &str) -> Self {
        match s {
            Self::APPLICATION_TEMPLATE => TemplateType::ApplicationTemplate,
            Self::IDP_TEMPLATE => TemplateType::IdpTemplate,
            other => TemplateType::Other(other.to_string()),
        }
    }
}

impl From<String> for TemplateType {
    fn from(s: String) -> Self {
        match s.as_str() {
            Self::APPLICATION_TEMPLATE => TemplateType::ApplicationTemplate,
            Self::IDP_TEMPLATE => TemplateType::IdpTemplate,
            _ => TemplateType::Other(s),
        }
    }
}

impl From<TemplateType> for String {
    fn from(t: TemplateType) -> Self {
        match t {
            TemplateType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TEMPLATE
// ============================================================================

/// A pre-defined configuration template loaded from disk at bootstrap
///
/// Immutable once it is in the catalog. `template_id` is a string on the wire
/// but must parse as an integer for the listing projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Catalog identifier (numeric string, e.g. "1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    /// Owning tenant as recorded in the file (informational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<i32>,

    /// Human-readable name
    pub template_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Kind of template; absent never matches a type filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_type: Option<TemplateType>,

    /// Free-form key/value properties
    #[serde(
        default,
        rename = "propertiesMap",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub properties: BTreeMap<String, String>,

    /// Opaque template payload (JSON document, script, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_script: Option<String>,
}

impl Template {
    /// Create a template with the fields every catalog entry is expected to have
    pub fn new(
        template_id: impl Into<String>,
        template_name: impl Into<String>,
        template_type: impl Into<TemplateType>,
    ) -> Self {
        Self {
            template_id: Some(template_id.into()),
            tenant_id: None,
            template_name: template_name.into(),
            description: None,
            image_url: None,
            template_type: Some(template_type.into()),
            properties: BTreeMap::new(),
            template_script: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.template_script = Some(script.into());
        self
    }

    /// Identifier as a string slice, if present
    pub fn id(&self) -> Option<&str> {
        self.template_id.as_deref()
    }

    /// Textual form of the template type, if present
    pub fn type_name(&self) -> Option<&str> {
        self.template_type.as_ref().map(TemplateType::as_str)
    }
}

// ============================================================================
// TEMPLATE INFO
// ============================================================================

/// Lightweight listing projection of a [`Template`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub template_id: i32,
    /// Tenant of the request that produced this projection
    pub tenant_id: i32,
    pub template_name: String,
}

impl TemplateInfo {
    pub fn new(template_id: i32, tenant_id: i32, template_name: impl Into<String>) -> Self {
        Self {
            template_id,
            tenant_id,
            template_name: template_name.into(),
        }
    }
}
