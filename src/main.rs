use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket_ledger::config::{paths::DIR_ENV_VAR, LedgerPaths, Settings};
use pocket_ledger::display::format_session_summary;
use pocket_ledger::logging;

#[derive(Parser)]
#[command(
    name = "pocket",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal income and expense tracker",
    long_about = "Pocket Ledger records income and expenses for the current session, \
                  shows running totals and lets you filter and sort what you entered. \
                  Records are kept in memory and are not saved between sessions."
)]
struct Cli {
    /// Directory holding config.json and the diagnostic log (written by `tui`)
    #[arg(long, global = true, env = DIR_ENV_VAR, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui {
        /// Do not print the session's records after quitting
        #[arg(long)]
        no_summary: bool,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,

    /// List the categories offered by the entry form
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.config_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Tui { no_summary: false }) {
        Commands::Tui { no_summary } => {
            // Only the interactive session writes the diagnostic log
            logging::init(&paths, &settings)?;
            let ledger = pocket_ledger::tui::run_tui(&settings)?;
            if !no_summary && !ledger.is_empty() {
                print!("{}", format_session_summary(&ledger, &settings));
            }
        }
        Commands::Init => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!(
                    "Wrote default settings to: {}",
                    paths.settings_file().display()
                );
            }
        }
        Commands::Config => {
            println!("Pocket Ledger Configuration");
            println!("===========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Default sort:     {}", settings.default_sort);
            println!("  Log level:        {}", settings.log_level);
            println!("  Tick rate:        {} ms", settings.tick_rate_ms);
            println!("  Categories:       {}", settings.baseline_categories.len());
        }
        Commands::Categories => {
            for category in &settings.baseline_categories {
                println!("{}", category);
            }
        }
    }

    Ok(())
}
