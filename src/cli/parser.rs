use crate::export::ExportFormat;
use crate::export::share::SharePlatform;
use clap::{Parser, Subcommand};

/// Command-line interface definition for EquipTrack
/// CLI application to track daily equipment inventory with SQLite
#[derive(Parser)]
#[command(
    name = "equiptrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track daily equipment by category: record, search, export and share reports",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Record an equipment item
    Add {
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Category: box, sound, remote, camera, chip
        #[arg(long = "cat", value_name = "CATEGORY")]
        category: String,

        /// Contract number
        #[arg(long)]
        contract: Option<String>,

        /// Serial number
        #[arg(long)]
        serial: Option<String>,

        /// Attach a photo file (repeatable; stored encoded in the item)
        #[arg(long = "photo", value_name = "FILE")]
        photos: Vec<String>,
    },

    /// Edit an existing item's fields by id
    Set {
        /// Date the item was recorded on (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Item id (as shown by `list --ids`)
        #[arg(long)]
        id: String,

        #[arg(long)]
        contract: Option<String>,

        #[arg(long)]
        serial: Option<String>,

        /// Attach a photo file (repeatable)
        #[arg(long = "photo", value_name = "FILE")]
        photos: Vec<String>,

        /// Remove the photo at this zero-based index
        #[arg(long = "drop-photo", value_name = "INDEX")]
        drop_photo: Option<usize>,
    },

    /// Delete items by id
    Del {
        /// Date the items were recorded on (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Category: box, sound, remote, camera, chip
        #[arg(long = "cat", value_name = "CATEGORY")]
        category: String,

        /// Item ids to delete
        #[arg(required = true)]
        ids: Vec<String>,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Show recorded equipment for a day (or the month so far)
    List {
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,

        #[arg(long, help = "Aggregate the month through the given date")]
        month: bool,

        #[arg(long, help = "Include untouched blank input rows")]
        all: bool,

        #[arg(long, help = "Show item ids (needed by set/del)")]
        ids: bool,

        #[arg(long, help = "Print the internal audit log")]
        audit: bool,
    },

    /// Search items by contract or serial across all dates
    Search {
        /// Text to look for (at least 2 characters)
        query: String,
    },

    /// Export a report file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,

        #[arg(long, help = "Aggregate the month through the given date")]
        month: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Print a share summary and a prefilled messenger link
    Share {
        #[arg(long, value_enum, default_value = "whatsapp")]
        via: SharePlatform,

        /// Date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,

        #[arg(long, help = "Aggregate the month through the given date")]
        month: bool,
    },

    /// Delete ALL recorded data
    Clear {
        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Interactive editing session (undo, delete mode, lock simulation)
    Shell {
        /// Date to open on (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },
}
