//! orrery CLI
//!
//! Loads the star system once, then answers requests from an interactive
//! console, a single `--query`, or a JSON-RPC session on stdio.

// Exclude from coverage - CLI binary tested via integration tests
#![cfg_attr(tarpaulin, ignore)]

use anyhow::Context;
use clap::Parser;
use orrery::core::{Catalog, CelestialBody, Config, Intent, Theme};
use orrery::server::QueryServer;
use orrery::shell::{run_console, Renderer, Response, Shell, SUBJECT_PROMPT};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// 🔭 orrery: ask a star system questions in plain words.
#[derive(Parser, Debug)]
#[command(name = "orrery")]
#[command(version = orrery::VERSION)]
#[command(about = "🔭 orrery: ask a star system questions in plain words")]
#[command(after_help = "EXAMPLES:
  # Start the interactive console with the bundled Sol catalog
  orrery

  # Ask a single question
  orrery --query \"how many moons does Jupiter have\"

  # Use your own catalog directory (planets.json + moons.json)
  orrery --catalog-dir ./data --star Sol

  # Serve JSON-RPC over stdio
  orrery --server
")]
struct Cli {
    // ═══════════════════════════════════════════════════════════════════════════
    // 🪐 CATALOG
    // ═══════════════════════════════════════════════════════════════════════════

    /// Config file path (default: user config dir, if present)
    #[arg(short = 'c', long = "config", value_name = "FILE", help_heading = "🪐 CATALOG")]
    config: Option<PathBuf>,

    /// Directory holding planets.json and moons.json
    #[arg(long = "catalog-dir", value_name = "DIR", help_heading = "🪐 CATALOG")]
    catalog_dir: Option<PathBuf>,

    /// Name of the root star
    #[arg(long = "star", value_name = "NAME", help_heading = "🪐 CATALOG")]
    star: Option<String>,

    // ═══════════════════════════════════════════════════════════════════════════
    // 💬 QUERIES
    // ═══════════════════════════════════════════════════════════════════════════

    /// Answer one request and exit
    #[arg(short = 'q', long = "query", value_name = "TEXT", help_heading = "💬 QUERIES")]
    query: Option<String>,

    /// Planet to use when the query names none
    #[arg(long = "subject", value_name = "NAME", requires = "query", help_heading = "💬 QUERIES")]
    subject: Option<String>,

    /// Print the planet names and exit
    #[arg(long = "list", help_heading = "💬 QUERIES")]
    list: bool,

    /// Plain text output (no emoji); same as --theme plain
    #[arg(long = "plain", help_heading = "💬 QUERIES")]
    plain: bool,

    /// Output theme: full or plain
    #[arg(long = "theme", value_name = "THEME", value_parser = parse_theme, conflicts_with = "plain", help_heading = "💬 QUERIES")]
    theme: Option<Theme>,

    // ═══════════════════════════════════════════════════════════════════════════
    // 🚀 SPECIAL MODES
    // ═══════════════════════════════════════════════════════════════════════════

    /// Run as JSON-RPC 2.0 server over stdio
    #[arg(long = "server", conflicts_with_all = ["query", "list"], help_heading = "🚀 SPECIAL MODES")]
    server: bool,

    /// More log output on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, help_heading = "🚀 SPECIAL MODES")]
    verbose: u8,
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    Theme::parse(s).ok_or_else(|| format!("unknown theme '{}' (expected full or plain)", s))
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Defaults, then the config file, then CLI flags.
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::discover(cli.config.as_deref()).context("failed to load config")?;
    if let Some(dir) = &cli.catalog_dir {
        config.catalog_dir = Some(dir.clone());
    }
    if let Some(star) = &cli.star {
        config.star_name = star.clone();
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.plain {
        config.theme = Theme::Plain;
    }
    Ok(config)
}

fn load_system(config: &Config) -> anyhow::Result<CelestialBody> {
    let catalog = Catalog::from_config(config).context("failed to load catalog")?;
    Ok(catalog.build_system(&config.star_name))
}

fn answer_once(star: &CelestialBody, renderer: &Renderer, text: &str, subject: Option<&str>) -> io::Result<()> {
    let shell = Shell::new(star);
    let mut response = shell.handle(text);
    if let (Response::NeedsSubject(intent), Some(name)) = (response, subject) {
        response = shell.handle_subject(intent, name);
    }
    if let Response::NeedsSubject(intent) = response {
        info!(%intent, "query named no planet");
        return writeln!(io::stdout(), "{}", needs_subject_hint(intent));
    }
    writeln!(io::stdout(), "{}", renderer.render(&response))
}

fn needs_subject_hint(intent: Intent) -> String {
    format!(
        "{} (no planet named; pass --subject NAME to answer a {} request)",
        SUBJECT_PROMPT,
        intent
    )
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = build_config(&cli)?;
    let star = load_system(&config)?;
    info!(star = star.name(), planets = %star.orbiting_object_names(), "catalog loaded");
    let renderer = Renderer::new().with_theme(config.theme);

    if cli.server {
        let server = QueryServer::new(star, renderer);
        server.run().context("server error")?;
        return Ok(());
    }

    if cli.list {
        let mut stdout = io::stdout().lock();
        for name in star.orbiting_object_name_list() {
            writeln!(stdout, "{}", name)?;
        }
        return Ok(());
    }

    if let Some(text) = &cli.query {
        answer_once(&star, &renderer, text, cli.subject.as_deref())?;
        return Ok(());
    }

    let shell = Shell::new(&star);
    run_console(&shell, &renderer, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn main() {
    // Reset SIGPIPE so piping to head/tail terminates quietly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
