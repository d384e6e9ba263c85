//! # opmodel
//!
//! Command-line companion for the operating model widget. Renders the widget
//! for a chosen state to a standalone HTML page, or prints what would be
//! visible as a text outline.
//!
//! ## Usage
//!
//! ```bash
//! # Collapsed page on stdout
//! opmodel render > model.html
//!
//! # Growth detail open, Japan selected
//! opmodel render --expand ENABLING --select growth --country Japan -o model.html
//!
//! # Everything open, as text
//! opmodel outline --expand-all
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use operating_model::layout::{outline, visible_items};
use operating_model::types::{Country, ExpansionKey};
use operating_model::{Catalog, WidgetConfig, WidgetState, render_page, render_widget};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "opmodel")]
#[command(about = "Render the Consult operating model widget")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the widget to HTML (a full page unless --fragment)
    Render {
        #[command(flatten)]
        state: StateArgs,
        /// Widget config TOML (title, scroll step, placeholders)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Write to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Emit only the widget markup, without <html>/<head> and CSS
        #[arg(long)]
        fragment: bool,
    },
    /// Print the visible tree as text
    Outline {
        #[command(flatten)]
        state: StateArgs,
        /// Print the visible item cells as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// List the country tags in strip order
    Countries,
}

/// Initial widget state, expressed as the clicks that would produce it.
#[derive(Args, Debug, Default)]
struct StateArgs {
    /// Catalog TOML file (default: built-in Consult model)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,
    /// Open a header: SECTION or SECTION/SUBSECTION (repeatable).
    /// Opening a subsection also opens its section.
    #[arg(long = "expand", value_name = "KEY")]
    expand: Vec<ExpansionKey>,
    /// Open every header
    #[arg(long)]
    expand_all: bool,
    /// Select the item with this id (opens the detail modal)
    #[arg(long, value_name = "ID")]
    select: Option<String>,
    /// Select a country tag (e.g. Japan, UKI)
    #[arg(long, value_name = "NAME")]
    country: Option<Country>,
}

// ============================================================================
// State construction
// ============================================================================

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from_path(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

fn build_state(catalog: &Catalog, args: &StateArgs) -> Result<WidgetState> {
    let mut state = WidgetState::new();

    if args.expand_all {
        state.expand_all(catalog);
    }
    for key in &args.expand {
        catalog
            .resolve_key(key)
            .with_context(|| format!("Cannot expand `{}`", key))?;
        if key.subsection.is_some() {
            state.expand(ExpansionKey::section(&key.section));
        }
        state.expand(key.clone());
    }
    if let Some(id) = &args.select {
        let item = catalog
            .resolve_item(id)
            .with_context(|| format!("Cannot select `{}`", id))?;
        state.select_item(item);
    }
    if let Some(country) = args.country {
        state.select_country(country);
    }

    debug!(
        expanded = state.expanded_keys().len(),
        item = ?state.selected_item().map(|i| &i.id),
        country = ?state.selected_country(),
        "built widget state"
    );
    Ok(state)
}

// ============================================================================
// Output
// ============================================================================

/// Write to stdout; a closed pipe (e.g. `| head`) is not an error.
fn emit(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("Failed to write to stdout"),
    }
}

fn run_render(
    state_args: &StateArgs,
    config_path: Option<&Path>,
    output: Option<&Path>,
    fragment: bool,
) -> Result<()> {
    let catalog = load_catalog(state_args.catalog.as_deref())?;
    let config = match config_path {
        Some(path) => WidgetConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => WidgetConfig::default(),
    };
    let state = build_state(&catalog, state_args)?;

    let html = if fragment {
        render_widget(&catalog, &config, &state)
    } else {
        render_page(&catalog, &config, &state)
    };

    match output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "wrote widget");
            Ok(())
        }
        None => emit(&html),
    }
}

fn run_outline(state_args: &StateArgs, json: bool) -> Result<()> {
    let catalog = load_catalog(state_args.catalog.as_deref())?;
    let state = build_state(&catalog, state_args)?;

    if json {
        let visible = visible_items(&catalog, &state);
        let mut text =
            serde_json::to_string_pretty(&visible).context("Failed to serialize outline")?;
        text.push('\n');
        emit(&text)
    } else {
        emit(&outline(&catalog, &state))
    }
}

fn run_countries() -> Result<()> {
    let text: String = Country::ALL
        .iter()
        .map(|country| format!("{}\n", country))
        .collect();
    emit(&text)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render {
            state,
            config,
            output,
            fragment,
        } => run_render(&state, config.as_deref(), output.as_deref(), fragment),
        Command::Outline { state, json } => run_outline(&state, json),
        Command::Countries => run_countries(),
    }
}

/// Configure SIGPIPE handling to ignore broken pipes at OS level.
/// Writes to a closed pipe then fail with EPIPE, which `emit` swallows.
#[cfg(unix)]
fn ignore_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_IGN);
    }
}

#[cfg(not(unix))]
fn ignore_sigpipe() {
    // No-op on non-Unix platforms
}

fn main() -> ExitCode {
    ignore_sigpipe();

    let cli = Cli::parse();

    // stdout carries the rendered output, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("opmodel v{}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[opmodel] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
