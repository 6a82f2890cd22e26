//! site-breadcrumbs CLI
//!
//! Builds the breadcrumb trail for a page of a site described by a YAML or
//! JSON fixture and prints it as structured data.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use site_breadcrumbs_core::{
    format_output, load_overrides, ContentStore, DateQuery, FixtureFormat, InMemoryStore,
    OptionOverrides, OutputFormat, PageContext, TrailBuilder, TrailConfig, CATEGORY_TAXONOMY,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Breadcrumb trail builder for content-managed sites
#[derive(Parser)]
#[command(name = "site-breadcrumbs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build breadcrumb trails (home > ancestors > current page) from a site fixture")]
#[command(long_about = r#"
site-breadcrumbs: Breadcrumb Trails for Content-Managed Sites

Loads a site fixture (content types, items, category terms) and prints the
breadcrumb trail for the requested page.

Fixture formats:
  - YAML (.yaml, .yml)
  - JSON (.json)

Output formats:
  - JSON (default) - Structured JSON for programmatic use
  - YAML - Human-readable YAML format

Examples:
  site-breadcrumbs --site site.yaml single 42           # Trail for item 42
  site-breadcrumbs --site site.yaml category 7          # Trail for category 7
  site-breadcrumbs --site site.yaml archive product     # Content type archive
  site-breadcrumbs --site site.yaml year 2024 --year-suffix 年
  site-breadcrumbs --site site.yaml --options opts.yaml not-found
  site-breadcrumbs --site site.json context page.yaml   # Raw page context
"#)]
pub struct Args {
    /// Page to build the trail for
    #[command(subcommand)]
    pub command: Commands,

    /// Site fixture file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub site: Option<PathBuf>,

    /// Options file overriding the home and 404 nodes
    #[arg(long, global = true)]
    pub options: Option<PathBuf>,

    /// Suffix appended to year archive labels
    #[arg(long, global = true)]
    pub year_suffix: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormatArg::Json)]
    pub format: OutputFormatArg,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Front page
    Home,

    /// Request that matched nothing
    NotFound,

    /// Single content item
    Single {
        /// Item id
        id: u64,
    },

    /// Category listing
    Category {
        /// Category term id
        id: u64,
    },

    /// Content type archive
    Archive {
        /// Content type key
        post_type: String,
    },

    /// Year archive
    Year {
        /// Year
        year: i32,
    },

    /// Page context read from a YAML or JSON file
    Context {
        /// Path to the context file
        path: PathBuf,
    },
}

/// Output format argument
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Json,
    Yaml,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

/// Log format argument
#[derive(ValueEnum, Clone, Debug)]
pub enum LogFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args);

    let site = args.site.as_ref().context("--site is required")?;
    let store = InMemoryStore::load(site)
        .with_context(|| format!("Failed to load site fixture {}", site.display()))?;

    let overrides = match &args.options {
        Some(path) => load_overrides(path)
            .with_context(|| format!("Failed to load options {}", path.display()))?,
        None => OptionOverrides::default(),
    };

    let config = build_config(&args);
    let page = resolve_page(&args.command, &store)?;

    let trail = TrailBuilder::new(&store, &config).build(&page, &overrides);

    let output = format_output(&trail, args.format.clone().into())?;
    write_output(&output, args.output.as_ref())?;

    Ok(())
}

/// Log to stderr; RUST_LOG takes precedence over -v
fn init_tracing(args: &Args) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match args.verbose {
        0 => "warn",
        1 => "site_breadcrumbs_core=debug,site_breadcrumbs=debug",
        _ => "site_breadcrumbs_core=trace,site_breadcrumbs=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match args.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Build trail configuration from args
fn build_config(args: &Args) -> TrailConfig {
    let mut config = TrailConfig::new();

    if let Some(suffix) = &args.year_suffix {
        config = config.with_year_suffix(suffix.clone());
    }

    config
}

/// Resolve the requested page against the store
fn resolve_page(command: &Commands, store: &InMemoryStore) -> Result<PageContext> {
    let page = match command {
        Commands::Home => PageContext::home(),
        Commands::NotFound => PageContext::not_found(),
        Commands::Single { id } => {
            let item = store
                .content_item(*id)
                .with_context(|| format!("Content item {} not found", id))?;
            PageContext::singular(item)
        }
        Commands::Category { id } => {
            let term = store
                .term(*id, CATEGORY_TAXONOMY)
                .with_context(|| format!("Category {} not found", id))?;
            PageContext::category(term)
        }
        Commands::Archive { post_type } => {
            let descriptor = store
                .content_type(post_type)
                .with_context(|| format!("Content type '{}' not found", post_type))?;
            PageContext::post_type_archive(descriptor)
        }
        Commands::Year { year } => PageContext::date_archive(DateQuery::Year { year: *year }),
        Commands::Context { path } => read_context(path)?,
    };

    tracing::debug!(?page, "page context resolved");
    Ok(page)
}

fn read_context(path: &Path) -> Result<PageContext> {
    let Some(format) = FixtureFormat::from_path(path) else {
        anyhow::bail!("Unsupported context format: {}", path.display());
    };

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read context file {}", path.display()))?;

    let context: PageContext = match format {
        FixtureFormat::Json => serde_json::from_str(&source).context("Invalid JSON page context")?,
        FixtureFormat::Yaml => serde_yaml::from_str(&source).context("Invalid YAML page context")?,
    };

    Ok(context)
}

fn write_output(output: &str, path: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, output).context("Failed to write output file")?;
    } else {
        println!("{}", output);
    }
    Ok(())
}
