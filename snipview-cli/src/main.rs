//! `SnipView` CLI - Command-line interface for `SnipView` view snippets
//!
//! Loads a snippet manifest, builds a snippet helper over the manifest's
//! templates and renders placements or single snippets to stdout.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use snipview_core::{
    ManifestLoader, PlaceholderRenderer, SnippetError, SnippetHelper, SnippetManifest,
    TemplateError,
};
use tracing::debug;

/// `SnipView` command-line interface for rendering view snippets
#[derive(Parser)]
#[command(name = "snipview")]
#[command(author, version, about = "SnipView command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the snippet manifest (defaults to ~/.config/snipview/snippets.toml).
    /// A manifest that does not exist is an error.
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Render the enabled snippets of a placement
    #[command(about = "Render the enabled snippets of a placement")]
    Render {
        /// Placement to render (omit for the default placement)
        #[arg(short, long)]
        placement: Option<String>,

        /// Enable every snippet before rendering
        #[arg(long, conflicts_with = "disable_all")]
        enable_all: bool,

        /// Disable every snippet before rendering
        #[arg(long)]
        disable_all: bool,

        /// Enable a snippet before rendering (repeatable)
        #[arg(short, long = "enable", value_name = "NAME")]
        enable: Vec<String>,

        /// Disable a snippet before rendering (repeatable)
        #[arg(short, long = "disable", value_name = "NAME")]
        disable: Vec<String>,
    },

    /// Render a single snippet, enabled or not
    #[command(about = "Render a single snippet by name")]
    Snippet {
        /// Snippet name
        name: String,
    },

    /// List the snippets of the manifest
    #[command(about = "List the snippets of the manifest")]
    List {
        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Validate the manifest
    #[command(about = "Validate the manifest")]
    Check,
}

/// Output format for the list command
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Display as formatted table
    Table,
    /// Output as JSON
    Json,
    /// Output as CSV
    Csv,
}

/// Flag changes applied before rendering
#[derive(Debug, Default)]
pub struct FlagOverrides {
    /// Set every flag first: `Some(true)` enables all, `Some(false)` disables all
    pub all: Option<bool>,
    /// Snippets to enable
    pub enable: Vec<String>,
    /// Snippets to disable
    pub disable: Vec<String>,
}

fn main() {
    // Initialize logging with environment filter (RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = load_manifest(cli.manifest.as_deref()).and_then(|manifest| match cli.command {
        Commands::Render {
            placement,
            enable_all,
            disable_all,
            enable,
            disable,
        } => {
            let overrides = FlagOverrides {
                all: match (enable_all, disable_all) {
                    (true, _) => Some(true),
                    (false, true) => Some(false),
                    (false, false) => None,
                },
                enable,
                disable,
            };
            cmd_render(&manifest, placement.as_deref(), &overrides)
        }
        Commands::Snippet { name } => cmd_snippet(&manifest, &name),
        Commands::List { format } => cmd_list(&manifest, format),
        Commands::Check => cmd_check(&manifest),
    });

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

/// Loads the manifest from `path`, or from the default location
fn load_manifest(path: Option<&Path>) -> Result<SnippetManifest, CliError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => ManifestLoader::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}")))?
            .manifest_path(),
    };

    // The library treats a missing file as an empty manifest; here it is a usage error
    if !path.exists() {
        return Err(CliError::Config(format!(
            "Manifest not found: {}",
            path.display()
        )));
    }

    debug!(path = %path.display(), "Loading manifest");
    ManifestLoader::load(&path)
        .map_err(|e| CliError::Config(format!("Failed to load manifest: {e}")))
}

fn build_helper(manifest: &SnippetManifest) -> SnippetHelper<PlaceholderRenderer> {
    SnippetHelper::from_manifest(manifest.placeholder_renderer(), manifest)
}

/// Render command handler
fn cmd_render(
    manifest: &SnippetManifest,
    placement: Option<&str>,
    overrides: &FlagOverrides,
) -> Result<String, CliError> {
    debug!(?placement, ?overrides, "Rendering placement");
    let mut helper = build_helper(manifest);

    if let Some(all) = overrides.all {
        helper.set_enable_all(all);
    }
    for name in &overrides.enable {
        helper.set_enabled(name, true)?;
    }
    for name in &overrides.disable {
        helper.set_enabled(name, false)?;
    }

    Ok(helper.render(placement)?)
}

/// Single snippet command handler
fn cmd_snippet(manifest: &SnippetManifest, name: &str) -> Result<String, CliError> {
    debug!(snippet = %name, "Rendering single snippet");
    Ok(build_helper(manifest).render_snippet(name)?)
}

/// List command handler
fn cmd_list(manifest: &SnippetManifest, format: OutputFormat) -> Result<String, CliError> {
    let rows = snippet_rows(manifest);

    match format {
        OutputFormat::Table => Ok(format_snippet_table(&rows)),
        OutputFormat::Json => serde_json::to_string_pretty(&rows)
            .map_err(|e| CliError::Config(format!("Failed to serialize: {e}"))),
        OutputFormat::Csv => Ok(format_snippet_csv(&rows)),
    }
}

/// Check command handler
fn cmd_check(manifest: &SnippetManifest) -> Result<String, CliError> {
    let errors = ManifestLoader::validate_manifest(manifest);
    debug!(problems = errors.len(), "Manifest validated");
    if errors.is_empty() {
        return Ok(format!(
            "Manifest OK: {} snippet(s), {} template(s)",
            manifest.snippets.len(),
            manifest.templates.len()
        ));
    }

    let mut report = String::new();
    for (i, e) in &errors {
        let _ = writeln!(report, "  entry {i}: {e}");
    }
    Err(CliError::Validation(format!(
        "{} problem(s) found\n{}",
        errors.len(),
        report.trim_end()
    )))
}

/// Snippet as shown by the list command
#[derive(Debug, Clone, serde::Serialize)]
pub struct SnippetRow {
    pub name: String,
    pub placement: Option<String>,
    pub enabled: bool,
    pub template: String,
}

/// Lists snippets the way a helper built from the manifest holds them
fn snippet_rows(manifest: &SnippetManifest) -> Vec<SnippetRow> {
    let helper = build_helper(manifest);

    helper
        .names()
        .into_iter()
        .filter_map(|name| {
            helper.snippet(name).map(|snippet| SnippetRow {
                name: name.to_string(),
                placement: snippet.placement.clone(),
                enabled: helper.is_enabled(name),
                template: snippet.template.clone(),
            })
        })
        .collect()
}

/// Format snippets as table
fn format_snippet_table(rows: &[SnippetRow]) -> String {
    if rows.is_empty() {
        return "No snippets found.".to_string();
    }

    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(4).max(4);
    let placement_width = rows
        .iter()
        .filter_map(|r| r.placement.as_ref())
        .map(String::len)
        .max()
        .unwrap_or(9)
        .max(9);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_width$}  {:<placement_width$}  {:<7}  TEMPLATE",
        "NAME", "PLACEMENT", "ENABLED"
    );
    let _ = write!(out, "{:-<name_width$}  {:-<placement_width$}  {:-<7}  {:-<20}", "", "", "", "");

    for row in rows {
        let placement = row.placement.as_deref().unwrap_or("-");
        let enabled = if row.enabled { "yes" } else { "no" };
        let _ = write!(
            out,
            "\n{:<name_width$}  {:<placement_width$}  {:<7}  {}",
            row.name, placement, enabled, row.template
        );
    }

    out
}

/// Format snippets as CSV
fn format_snippet_csv(rows: &[SnippetRow]) -> String {
    let mut out = String::from("name,placement,enabled,template");
    for row in rows {
        let _ = write!(
            out,
            "\n{},{},{},{}",
            escape_csv_field(&row.name),
            escape_csv_field(row.placement.as_deref().unwrap_or("")),
            row.enabled,
            escape_csv_field(&row.template)
        );
    }
    out
}

/// Escape a field for CSV output
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Exit codes for CLI commands
pub mod exit_codes {
    /// General error - configuration, validation, rendering or I/O errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Snippet not found - a named snippet was never defined
    pub const SNIPPET_NOT_FOUND: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Manifest validation failed
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Snippet not found
    #[error("Snippet not found: {0}")]
    SnippetNotFound(String),

    /// Rendering failed
    #[error("Render error: {0}")]
    Render(#[from] TemplateError),
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::SnippetNotFound(_) => exit_codes::SNIPPET_NOT_FOUND,
            Self::Config(_) | Self::Validation(_) | Self::Render(_) => exit_codes::GENERAL_ERROR,
        }
    }
}

impl From<SnippetError<TemplateError>> for CliError {
    fn from(err: SnippetError<TemplateError>) -> Self {
        match err {
            SnippetError::NotFound(name) => Self::SnippetNotFound(name),
            SnippetError::Render(e) => Self::Render(e),
        }
    }
}
