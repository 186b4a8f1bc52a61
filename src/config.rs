//! Template management configuration
//!
//! Loaded from a YAML file and/or environment variables:
//!
//! | variable | field |
//! |----------|-------|
//! | `TEMPLATE_MGT_CONFIG` | path of a YAML config file read first |
//! | `TEMPLATE_MGT_TEMPLATES_DIR` | `templates_dir` |
//! | `TEMPLATE_MGT_DEFAULT_LIMIT` | `default_search_limit` |
//! | `TEMPLATE_MGT_DEFAULT_TENANT` | `default_tenant_id` |

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::handler::DEFAULT_SEARCH_LIMIT;
use crate::tenant::SUPER_TENANT_ID;

pub const CONFIG_PATH_ENV: &str = "TEMPLATE_MGT_CONFIG";
pub const TEMPLATES_DIR_ENV: &str = "TEMPLATE_MGT_TEMPLATES_DIR";
pub const DEFAULT_LIMIT_ENV: &str = "TEMPLATE_MGT_DEFAULT_LIMIT";
pub const DEFAULT_TENANT_ENV: &str = "TEMPLATE_MGT_DEFAULT_TENANT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateMgtConfig {
    /// Directory holding the file based templates
    pub templates_dir: PathBuf,
    /// Page size substituted for an unspecified limit
    pub default_search_limit: u32,
    /// Tenant reported outside any request scope
    pub default_tenant_id: i32,
}

impl Default for TemplateMgtConfig {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("templates"),
            default_search_limit: DEFAULT_SEARCH_LIMIT,
            default_tenant_id: SUPER_TENANT_ID,
        }
    }
}

impl TemplateMgtConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Build from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(dir) = lookup(TEMPLATES_DIR_ENV) {
            config.templates_dir = PathBuf::from(dir);
        }
        if let Some(limit) = lookup(DEFAULT_LIMIT_ENV) {
            config.default_search_limit = parse_var(DEFAULT_LIMIT_ENV, &limit)?;
        }
        if let Some(tenant) = lookup(DEFAULT_TENANT_ENV) {
            config.default_tenant_id = parse_var(DEFAULT_TENANT_ENV, &tenant)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_search_limit == 0 {
            bail!("default_search_limit must be greater than zero");
        }
        Ok(())
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid value for {}: {:?}", name, value))
}
