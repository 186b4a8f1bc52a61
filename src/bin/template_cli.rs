//! Template catalog CLI
//!
//! Inspect a directory of file based templates through the same read-only
//! handler the template-management API uses.
//!
//! # Usage
//!
//! ```bash
//! # Show one template
//! template_cli --dir ./templates get 3
//!
//! # First page of projected listing (default page size)
//! template_cli --dir ./templates --tenant 42 list
//!
//! # Application templates, second page of ten
//! template_cli list --type APPLICATION_TEMPLATE --limit 10 --offset 10
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use template_mgt::{
    CatalogLoader, FileBasedTemplateHandler, FixedTenant, InMemoryCatalogStore,
    ReadOnlyTemplateHandler, TemplateMgtConfig, TemplateMgtError,
};

#[derive(Parser)]
#[command(name = "template_cli")]
#[command(version = "0.1.0")]
#[command(about = "Query a read-only catalog of file based templates")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Template directory (overrides config)
    #[arg(long, short, global = true, env = "TEMPLATE_MGT_TEMPLATES_DIR")]
    dir: Option<PathBuf>,

    /// YAML config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Tenant id stamped on listing projections
    #[arg(long, short, global = true, allow_hyphen_values = true)]
    tenant: Option<i32>,

    /// Output format
    #[arg(long, short = 'o', global = true, default_value = "pretty", value_enum)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the template with the given identifier
    Get {
        /// Template identifier
        id: String,
    },

    /// List a page of templates
    List {
        /// Page size; 0 selects the default
        #[arg(long, short, default_value_t = 0, allow_hyphen_values = true)]
        limit: i32,

        /// Number of entries to skip
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,

        /// Only templates of this type (full records instead of summaries)
        #[arg(long = "type", short = 'T')]
        template_type: Option<String>,
    },
}

// =============================================================================
// MAIN
// =============================================================================

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "template_mgt=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let (status, report) = outcome(run(&cli));
    if let Some(report) = report {
        eprintln!("{}", report);
    }
    ExitCode::from(status)
}

/// Exit status and stderr report for a finished run
///
/// Template management errors are reported as `code: message`.
fn outcome(result: Result<()>) -> (u8, Option<String>) {
    match result {
        Ok(()) => (0, None),
        Err(e) => {
            let report = match e.downcast_ref::<TemplateMgtError>() {
                Some(tm) => format!("{}: {}", tm.code(), tm.error_message().message()),
                None => format!("error: {:#}", e),
            };
            (1, Some(report))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => TemplateMgtConfig::from_file(path)?,
        None => TemplateMgtConfig::from_env()?,
    };
    if let Some(dir) = &cli.dir {
        config.templates_dir = dir.clone();
    }

    let catalog = CatalogLoader::load_from_dir(&config.templates_dir)?;
    let store = Arc::new(InMemoryCatalogStore::new(catalog));
    let handler = match cli.tenant {
        Some(tenant_id) => FileBasedTemplateHandler::new(store, Arc::new(FixedTenant(tenant_id)))
            .with_default_limit(config.default_search_limit),
        None => FileBasedTemplateHandler::from_config(&config, store),
    };

    match &cli.command {
        Commands::Get { id } => {
            let template = handler
                .get_template_by_id(id)?
                .ok_or_else(|| anyhow!("template not found: {}", id))?;
            print_output(&*template, cli.format)
        }
        Commands::List {
            limit,
            offset,
            template_type: Some(template_type),
        } => {
            let templates = handler.list_templates_by_type(template_type, *limit, *offset)?;
            print_output(&templates, cli.format)
        }
        Commands::List {
            limit,
            offset,
            template_type: None,
        } => {
            let infos = handler.list_templates(*limit, *offset)?;
            print_output(&infos, cli.format)
        }
    }
}

fn print_output<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    println!("{}", rendered);
    Ok(())
}
