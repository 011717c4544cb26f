use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use fintrack::audit::AuditLogger;
use fintrack::cli::{
    handle_budget_command, handle_report_command, handle_transaction_command, BudgetCommands,
    ReportCommands, TransactionCommands,
};
use fintrack::config::{Settings, TrackerPaths};
use fintrack::display::{format_category_list, format_notification};
use fintrack::storage::FileStore;
use fintrack::tracker::Tracker;

/// Environment variable holding the log filter
const LOG_ENV: &str = "FINTRACK_LOG";

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Track expenses against monthly category budgets",
    long_about = "fintrack records your expenses in a fixed set of categories, \
                  keeps a monthly budget per category and reports spending \
                  against those budgets."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// List the spending categories
    Categories,

    /// Show recent entries from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let today = Local::now().date_naive();

    let Some(command) = cli.command else {
        println!("fintrack - personal expense tracker");
        println!();
        println!("Run 'fintrack --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Config => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Write mode:      {:?}", settings.write_mode);
            println!("  Audit log:       {}", settings.audit_enabled);
            return Ok(());
        }
        Commands::History { count } => {
            let logger = AuditLogger::new(paths.audit_log());
            let entries = logger.recent(count)?;
            if entries.is_empty() {
                println!("No history yet.");
            }
            for entry in entries {
                println!("{}", entry);
            }
            return Ok(());
        }
        _ => {}
    }

    paths.ensure_directories()?;
    let mut tracker = Tracker::open(FileStore::new(paths.data_dir()), settings.write_mode)?;
    if settings.audit_enabled {
        tracker.subscribe(AuditLogger::new(paths.audit_log()).into_subscriber());
    }

    let outcome = match command {
        Commands::Transaction(cmd) => {
            handle_transaction_command(&mut tracker, &settings, today, cmd)
        }
        Commands::Budget(cmd) => handle_budget_command(&mut tracker, &settings, cmd),
        Commands::Report(cmd) => handle_report_command(&tracker, &settings, today, cmd),
        Commands::Categories => {
            print!("{}", format_category_list(tracker.budgets(), &settings));
            Ok(())
        }
        Commands::Config | Commands::History { .. } => Ok(()),
    };

    // Changes made before a failure are still written back
    let flushed = tracker.flush();

    for notification in tracker.drain_notifications() {
        if notification.kind.is_problem() {
            eprintln!("{}", format_notification(&notification));
        } else {
            tracing::debug!(message = %notification.message, "notification");
        }
    }

    outcome?;
    flushed?;
    Ok(())
}
