use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expenses::cli::{
    handle_chart_command, handle_export_command, handle_list_command, handle_log_command,
    handle_seed_command, FilterArgs,
};
use expenses::config::{paths::ExpensePaths, settings::Settings};
use expenses::storage::{initialize_storage, seed_if_empty, Storage};

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record dated, categorized expenses in a local SQLite database, \
                  filter them by category or date range, export them to CSV and \
                  see where the money goes with a per-category chart."
)]
struct Cli {
    /// Directory holding the database, settings and audit log
    #[arg(long, global = true, env = "EXPENSES_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// List expenses with totals
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Export expenses to a CSV file
    Export {
        /// Output file
        output: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Insert the sample expenses
    Seed,

    /// Show spending by category
    Chart(FilterArgs),

    /// Show current configuration and paths
    Config,

    /// Show recent changes from the audit log
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let fresh = initialize_storage(&paths)?;
    let settings = Settings::load_or_create(&paths)?;
    if fresh {
        settings.save(&paths)?;
    }

    // Initialize storage, seeding an empty database on request
    let storage = Storage::new(paths.clone())?;
    let seeded = if settings.seed_on_first_run {
        seed_if_empty(&storage)?
    } else {
        0
    };

    match cli.command {
        None | Some(Commands::Tui) => {
            expenses::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::List(filter)) => {
            handle_list_command(&storage, &settings, &filter)?;
        }
        Some(Commands::Export { output, filter }) => {
            handle_export_command(&storage, &output, &filter)?;
        }
        Some(Commands::Seed) => {
            handle_seed_command(&storage, seeded)?;
        }
        Some(Commands::Chart(filter)) => {
            handle_chart_command(&storage, &settings, &filter)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Database:       {}", paths.database_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency:        {}", settings.currency_symbol);
            println!("  Status timeout:  {}s", settings.status_timeout_secs);
            println!("  Seed first run:  {}", settings.seed_on_first_run);
            println!("  Categories:      {}", settings.categories.join(", "));
            println!();
            println!("Records:       {}", storage.expenses.count()?);
            println!("Audit entries: {}", storage.audit().entry_count()?);
        }
        Some(Commands::Log { count }) => {
            handle_log_command(&storage, count)?;
        }
    }

    Ok(())
}
