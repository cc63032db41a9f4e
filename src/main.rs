//! prompt-cheatsheet: render and publish the prompt engineering cheat sheet
//!
//! Renders the technique catalog as a responsive HTML page, alternate
//! document formats, or terminal output, and builds the static site.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use prompt_cheatsheet::{
    cli,
    config::{self, AppConfig},
    pipeline::exit_codes,
    render::RenderFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "prompt-cheatsheet")]
#[command(version)]
#[command(about = "Prompt engineering cheat sheet renderer and site builder", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Catalog validation failed / technique not found
    3  Error occurred

EXAMPLES:
    # Show the cheat sheet in the terminal
    prompt-cheatsheet render

    # Write the standalone page
    prompt-cheatsheet render -o html -O cheatsheet.html

    # Build the GitHub Pages site
    prompt-cheatsheet build --out-dir dist --base /prompt-engineering-cheatsheet/

    # Check a custom catalog in CI
    prompt-cheatsheet --catalog techniques.yaml validate")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Technique catalog (YAML or JSON) to use instead of the built-in list
    #[arg(long, global = true, env = "PROMPT_CHEATSHEET_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs (extracted for readability)
// ============================================================================

/// Arguments for the `render` subcommand
#[derive(Parser)]
struct RenderArgs {
    /// Output format (auto: table on a terminal, by extension for files, html otherwise)
    #[arg(short, long, default_value = "auto")]
    output: RenderFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Viewport width in CSS pixels at which the table replaces the cards
    #[arg(long)]
    breakpoint: Option<u32>,
}

/// Arguments for the `build` subcommand
#[derive(Parser)]
struct BuildArgs {
    /// Directory to write the site into
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Path or URL the site is served under
    #[arg(long)]
    base: Option<String>,

    /// Remove the output directory before building
    #[arg(long)]
    clean: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the cheat sheet in one format
    Render(RenderArgs),

    /// Build the static site
    Build(BuildArgs),

    /// Check the technique catalog invariants
    Validate {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one technique by id or name
    Show {
        /// Technique id (e.g. 3) or name (e.g. "few-shot")
        key: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .prompt-cheatsheet.yaml in the current directory
    Init,
}

/// Load the file config and layer the global CLI flags over it.
fn effective_config(cli: &Cli, overrides: AppConfig) -> Result<AppConfig> {
    let mut overrides = AppConfig {
        catalog: cli.catalog.clone(),
        ..overrides
    };
    overrides.output.no_color |= cli.no_color;
    cli::effective_config(cli.config.as_deref(), &overrides)
}

fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Render(args) => {
            let mut overrides = AppConfig::builder()
                .output_format(args.output)
                .output_file(args.output_file.clone());
            if let Some(px) = args.breakpoint {
                overrides = overrides.breakpoint_px(px);
            }
            let config = effective_config(&cli, overrides.build())?;
            cli::run_render(&config, cli.quiet)
        }

        Commands::Build(args) => {
            let mut overrides = AppConfig::builder();
            if let Some(dir) = &args.out_dir {
                overrides = overrides.out_dir(dir);
            }
            if let Some(base) = &args.base {
                overrides = overrides.base_path(base);
            }
            let config = effective_config(&cli, overrides.build())?;
            cli::run_build(&config, args.clean, cli.quiet)
        }

        Commands::Validate { json } => {
            let config = effective_config(&cli, AppConfig::default())?;
            cli::run_validate(config.catalog.as_deref(), *json)
        }

        Commands::Show { key } => {
            let config = effective_config(&cli, AppConfig::default())?;
            cli::run_show(&config, key, cli.quiet)
        }

        Commands::Completions { shell } => {
            generate(
                *shell,
                &mut Cli::command(),
                "prompt-cheatsheet",
                &mut io::stdout(),
            );
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to generate schema")?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref())
                    .context("cannot load configuration")?;
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                    if config.is_default() {
                        eprintln!("# (file overrides nothing)");
                    }
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    config::user_config_dir().map(|p| p.display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                eprintln!("  (git repository root, when inside one)");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".prompt-cheatsheet.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}
