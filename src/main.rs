use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use pocket_ledger::config::{paths::LedgerPaths, settings::Settings};
use pocket_ledger::display::{format_register, format_summary};
use pocket_ledger::logging::{init_logging, LOG_ENV_VAR};

#[derive(Parser)]
#[command(
    name = "pocket",
    author = "Kaylee Beyene",
    version,
    about = "Record expenses and income from the terminal",
    long_about = "Pocket Ledger opens a dialog for recording expenses and income, \
                  with a live estimate of each amount in a second currency. \
                  Transactions recorded in a session are printed when it ends."
)]
struct Cli {
    /// Exchange rate used for the estimate (overrides the config file)
    #[arg(long, global = true, env = "POCKET_RATE")]
    rate: Option<f64>,

    /// Write the session's transactions to this file as JSON on exit
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        /// Start on the register instead of the add dialog
        #[arg(long)]
        no_dialog: bool,
    },

    /// Write a default config file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(rate) = cli.rate {
        settings = settings.with_exchange_rate(rate)?;
    }

    match cli.command.unwrap_or(Commands::Tui { no_dialog: false }) {
        Commands::Tui { no_dialog } => {
            if let Err(e) = init_logging(&paths) {
                eprintln!("Logging disabled: {}", e);
            }
            info!(rate = settings.exchange_rate, "session starting");

            let ledger = pocket_ledger::tui::run_tui(&settings, !no_dialog)?;

            print!("{}", format_register(ledger.transactions(), &settings));
            if !ledger.is_empty() {
                println!();
                println!("{}", format_summary(&ledger.summary(), &settings));
            }

            if let Some(path) = cli.output {
                if let Err(e) = ledger.save_json(&path) {
                    warn!(path = %path.display(), error = %e, "failed to save session");
                    return Err(e.into());
                }
                println!("Saved {} transactions to {}", ledger.len(), path.display());
            }
        }
        Commands::Init => {
            println!("Initializing Pocket Ledger at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Wrote {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("Pocket Ledger Configuration");
            println!("===========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!("Log filter env:   {}", LOG_ENV_VAR);
            println!();
            println!("Settings:");
            println!(
                "  Exchange rate:    1 {} = {} {}",
                settings.entry_currency, settings.exchange_rate, settings.display_currency
            );
            println!("  Estimate symbol:  {}", settings.display_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Default type:     {}", settings.default_type);
        }
    }

    Ok(())
}
