use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expenses::cli::{
    handle_large_command, handle_list_command, handle_make_command, handle_outliers_command,
    handle_report_command, open_session, FilterArgs,
};
use expenses::config::{ExpensesPaths, Settings};
use expenses::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Track monthly burn-rate",
    long_about = "expenses imports bank statement CSV exports into a SQLite \
                  database and reports monthly income and outgoing, with \
                  median and average, large transactions and outliers."
)]
struct Cli {
    /// Config file (defaults to ~/.expenses.yaml)
    #[arg(long, global = true, env = "EXPENSES_CONFIG")]
    config: Option<PathBuf>,

    /// Database file (defaults to ./expenses.sql)
    #[arg(long, global = true, env = "EXPENSES_DATABASE")]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly income and outgoing with median and average (default)
    Report {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Transform bank CSV files into the database
    Make,

    /// List outflows above the large threshold
    Large {
        #[command(flatten)]
        filter: FilterArgs,
        /// Override the configured threshold
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// List transactions outside the silent boundaries
    Outliers {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List events, newest first
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Only events with this payee
        #[arg(short, long)]
        payee: Option<String>,
        /// Number of events to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show resolved paths and settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut paths = ExpensesPaths::new()?;
    if let Some(config) = cli.config {
        paths = paths.with_config_file(config);
    }
    if let Some(database) = cli.database {
        paths = paths.with_database_file(database);
    }

    match cli.command {
        None => {
            let (settings, store) = open_session(&paths)?;
            handle_report_command(&settings, &store, &FilterArgs::default().to_filter())?;
        }
        Some(Commands::Report { filter }) => {
            let (settings, store) = open_session(&paths)?;
            handle_report_command(&settings, &store, &filter.to_filter())?;
        }
        Some(Commands::Make) => {
            let settings = Settings::load(&paths)?;
            handle_make_command(&paths, &settings)?;
        }
        Some(Commands::Large { filter, threshold }) => {
            let (settings, store) = open_session(&paths)?;
            handle_large_command(&settings, &store, &filter.to_filter(), threshold)?;
        }
        Some(Commands::Outliers { filter }) => {
            let (settings, store) = open_session(&paths)?;
            handle_outliers_command(&settings, &store, &filter.to_filter())?;
        }
        Some(Commands::List {
            filter,
            payee,
            limit,
        }) => {
            let (_settings, store) = open_session(&paths)?;
            handle_list_command(&store, &filter.to_filter(), payee, limit)?;
        }
        Some(Commands::Config) => {
            println!("expenses Configuration");
            println!("======================");
            println!("Config file:   {}", paths.config_file().display());
            println!("Database file: {}", paths.database_file().display());
            println!();
            let settings = Settings::load(&paths)?;
            print!("{}", settings.to_yaml()?);
        }
    }

    Ok(())
}
