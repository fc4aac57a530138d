//! nerv-demo CLI
//!
//! Show the NERV theme in a demo dashboard, or inspect registered themes.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nerv_theme::builtin::{NERV_NAME, is_builtin};
use nerv_theme::loader::{default_theme_dir, load_theme_dir};
use nerv_theme::registry::ThemeRegistry;
use nerv_theme::report::{format_theme, format_theme_list};
use nerv_theme::stylesheet::DEMO_STYLESHEET;
use nerv_theme::theme::Theme;
use nerv_theme::tui;
use nerv_theme::types::OutputFormat;

#[derive(Parser)]
#[command(name = "nerv-demo")]
#[command(about = "NERV color theme demo for the terminal")]
#[command(version)]
struct Cli {
    /// Theme to start with
    #[arg(long, global = true, default_value = NERV_NAME)]
    theme: String,

    /// Directory of extra JSON themes (default: user config dir)
    #[arg(long, global = true)]
    themes_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the demo dashboard (default)
    Run,

    /// List registered themes
    List,

    /// Print a theme's roles and variables
    Show {
        /// Theme to print (default: nerv)
        name: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Verify every style rule resolves in a theme (default: all themes)
    Check {
        /// Theme to check
        name: Option<String>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run);

    init_logging(matches!(command, Commands::Run));

    let result = build_registry(cli.themes_dir, &cli.theme).and_then(|registry| match command {
        Commands::Run => cmd_run(registry),
        Commands::List => cmd_list(&registry),
        Commands::Show { name, format } => cmd_show(&registry, name, format.into()),
        Commands::Check { name } => cmd_check(&registry, name),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// SETUP
// ============================================================================

/// Install the tracing subscriber, filtered by `NERV_LOG` (default: warn).
///
/// The dashboard owns the terminal, so in TUI mode logs go to a file in
/// the user cache dir. Everything else logs to stderr.
fn init_logging(tui: bool) {
    let filter = EnvFilter::try_from_env("NERV_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    if tui {
        // No log file means no logging: stderr would draw over the dashboard
        if let Ok(file) = open_log_file() {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn open_log_file() -> io::Result<File> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("nerv-theme");
    fs::create_dir_all(&dir)?;
    File::create(dir.join("nerv-demo.log"))
}

/// Built-in themes plus user themes, with `start` active.
fn build_registry(themes_dir: Option<PathBuf>, start: &str) -> Result<ThemeRegistry, String> {
    let mut registry = ThemeRegistry::with_builtins();

    let dir = themes_dir.unwrap_or_else(default_theme_dir);
    let loaded = load_theme_dir(&dir);

    // Print failures to stderr so they don't interfere with JSON output
    for failure in &loaded.failures {
        eprintln!("Note: {}", failure);
    }
    for name in registry.register_all(loaded.themes) {
        if is_builtin(&name) {
            eprintln!("Note: user theme {} replaces a built-in", name);
        } else {
            eprintln!("Note: user theme {} replaces an earlier theme of the same name", name);
        }
    }

    registry.set_active(start).map_err(|e| e.to_string())?;
    Ok(registry)
}

fn lookup<'a>(registry: &'a ThemeRegistry, name: Option<&str>) -> Result<&'a Theme, String> {
    let name = name.unwrap_or(NERV_NAME);
    registry
        .get(name)
        .ok_or_else(|| format!("unknown theme: {}", name))
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_run(registry: ThemeRegistry) -> Result<(), String> {
    tui::run::run(registry).map_err(|e| format!("terminal error: {}", e))
}

fn cmd_list(registry: &ThemeRegistry) -> Result<(), String> {
    print!("{}", format_theme_list(registry.themes(), registry.active_name()));
    Ok(())
}

fn cmd_show(registry: &ThemeRegistry, name: Option<String>, format: OutputFormat) -> Result<(), String> {
    let theme = lookup(registry, name.as_deref())?;
    let text = format_theme(theme, format);
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn cmd_check(registry: &ThemeRegistry, name: Option<String>) -> Result<(), String> {
    let themes: Vec<&Theme> = match name {
        Some(name) => vec![lookup(registry, Some(&name))?],
        None => registry.themes().collect(),
    };

    let mut failed = 0;
    for theme in &themes {
        match DEMO_STYLESHEET.check(theme) {
            Ok(()) => println!("ok    {}", theme.name()),
            Err(e) => {
                println!("FAIL  {}: {}", theme.name(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} themes failed the style check", failed, themes.len()));
    }
    Ok(())
}
