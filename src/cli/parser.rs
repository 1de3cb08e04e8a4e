use crate::core::stats::Metric;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rFuelLogger
/// CLI application to log fuel fill-ups and track mileage
#[derive(Parser)]
#[command(
    name = "rfuellogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple fuel logging CLI: record fill-ups, track km/l and cost per km on a SQLite sheet",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Start a session from a starting odometer, or show the current one
    Session {
        /// Starting odometer (km)
        #[arg(long = "start", help = "Starting odometer (km)")]
        start: Option<f64>,

        #[arg(long = "user", short = 'u', help = "Your name or email")]
        user: Option<String>,
    },

    /// Add a fuel fill-up starting at the session's last odometer
    Add {
        /// Current odometer (km)
        #[arg(long = "end", help = "Current odometer (km)")]
        end: f64,

        /// Amount paid
        #[arg(long = "paid", help = "Amount paid (₹)")]
        paid: f64,

        /// Fuel price per litre
        #[arg(long = "price", default_value_t = 100.0, help = "Fuel price (₹/litre)")]
        price: f64,

        #[arg(long = "user", short = 'u', help = "Your name or email")]
        user: Option<String>,
    },

    /// Edit an existing entry; unspecified fields keep their value
    Edit {
        #[arg(long = "row", help = "Row number as shown by `list`")]
        row: usize,

        #[arg(
            long = "gen",
            help = "Sheet generation shown by `list`; refuses the edit if the sheet changed since"
        )]
        generation: Option<u64>,

        #[arg(long = "user", short = 'u')]
        user: Option<String>,

        #[arg(long = "start", help = "Odometer start (km)")]
        start: Option<f64>,

        #[arg(long = "end", help = "Odometer end (km)")]
        end: Option<f64>,

        #[arg(long = "paid", help = "Amount paid (₹)")]
        paid: Option<f64>,

        #[arg(long = "price", help = "Fuel price (₹/l)")]
        price: Option<f64>,
    },

    /// Delete an entry by row number
    Del {
        #[arg(long = "row", help = "Row number as shown by `list`")]
        row: usize,

        #[arg(
            long = "gen",
            help = "Sheet generation shown by `list`; refuses the delete if the sheet changed since"
        )]
        generation: Option<u64>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List entries
    List {
        #[arg(long = "user", short = 'u', help = "Filter by user")]
        user: Option<String>,

        #[arg(long = "users", help = "List distinct users only")]
        users: bool,
    },

    /// Plot efficiency or cost per km against the timestamp
    Trend {
        #[arg(long, value_enum, default_value = "efficiency")]
        metric: Metric,

        #[arg(long = "user", short = 'u', help = "Filter by user")]
        user: Option<String>,
    },

    /// Totals and averages
    Summary {
        #[arg(long = "user", short = 'u', help = "Filter by user")]
        user: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export fuel entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "user", short = 'u', help = "Export only this user's entries")]
        user: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
