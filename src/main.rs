use anyhow::Result;
use clap::Parser;
use tracing::debug;

use wallet_cli::cli::{handle_command, Commands};
use wallet_cli::config::{paths::WalletPaths, settings::Settings};
use wallet_cli::export::{read_dump, write_dump};

#[derive(Parser)]
#[command(
    name = "wallet",
    version,
    about = "In-memory wallet ledger with phone-registered accounts",
    long_about = "wallet keeps accounts registered by phone number, their balances, \
                  payments and favorite payments. State is stored as dump files in \
                  the data directory between runs."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = WalletPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    wallet_cli::logging::init(&settings.log_filter);

    let Some(command) = cli.command else {
        println!("wallet - phone-registered accounts and payments");
        println!();
        println!("Run 'wallet --help' for usage information.");
        return Ok(());
    };

    if let Commands::Config = command {
        if !paths.settings_file().exists() {
            settings.save(&paths)?;
            debug!(path = %paths.settings_file().display(), "default settings written");
        }

        println!("Wallet Configuration");
        println!("====================");
        println!("Base directory:   {}", paths.base_dir().display());
        println!("Data directory:   {}", paths.data_dir().display());
        println!("Settings file:    {}", paths.settings_file().display());
        println!();
        println!("Settings:");
        println!("  Record style: {:?}", settings.record_style);
        println!("  Log filter:   {}", settings.log_filter);
        return Ok(());
    }

    let mut ledger = read_dump(paths.data_dir())?;
    let mutating = command.is_mutating();

    handle_command(&mut ledger, &settings, command)?;

    if mutating {
        paths.ensure_directories()?;
        write_dump(paths.data_dir(), &ledger)?;
        debug!(dir = %paths.data_dir().display(), "state saved");
    }

    Ok(())
}
