use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Bitácora Digital.
/// Fill in a food-service shift checklist, one action per call.
#[derive(Parser)]
#[command(
    name = "bitacora",
    version = env!("CARGO_PKG_VERSION"),
    about = "Digital shift logbook: checklists, photo evidence, fulfillment tally and shareable reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act on this entry instead of the most recently updated open one
    #[arg(global = true, long = "entry", value_name = "ID")]
    pub entry: Option<i64>,

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
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with default values")]
        migrate: bool,

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

    /// Start a new logbook entry
    New {
        #[arg(long, help = "Unit name (default: default_unit from config)")]
        unit: Option<String>,

        #[arg(long, help = "Responsible supervisor (default: default_responsible)")]
        responsible: Option<String>,

        #[arg(long, help = "Shift: matutino (m), vespertino (v) or mixto (x)")]
        shift: Option<String>,

        #[arg(long, help = "Date (YYYY-MM-DD, default: today)")]
        date: Option<String>,
    },

    /// Set identification and text fields of the active entry
    Set {
        #[arg(long)]
        unit: Option<String>,

        #[arg(long)]
        responsible: Option<String>,

        #[arg(long, help = "Shift: matutino (m), vespertino (v) or mixto (x)")]
        shift: Option<String>,

        #[arg(long, help = "Date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "fv-time", help = "Produce wash time")]
        fv_time: Option<String>,

        #[arg(long = "fv-ppm", help = "Produce sanitizer PPM: 0, 50, 100, 150 or 200")]
        fv_ppm: Option<String>,

        #[arg(long = "cool-food-1", help = "First cooling food")]
        cool_food_1: Option<String>,

        #[arg(long = "cool-food-2", help = "Second cooling food")]
        cool_food_2: Option<String>,
    },

    /// Mark a section as applicable or not for this shift
    Applies {
        /// Section key (personal, handwash, ..., handover)
        section: String,

        /// on | off
        value: String,
    },

    /// Staff headcount, roster checks and staff photos
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },

    /// Edit the variable-length lists (cook, reheat, catering, hotBar, ...)
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },

    /// Set or clear a named evidence photo
    Photo {
        /// Photo field key (e.g. chlorineMeasure, handoverSalon)
        field: String,

        /// Image file
        file: Option<String>,

        #[arg(long, conflicts_with = "file", help = "Remove the photo")]
        clear: bool,
    },

    /// Set or clear one slot of the handwash or cleaning photo arrays
    Slot {
        /// handwash | cleaning
        array: String,

        /// Slot number, starting at 1
        index: usize,

        /// Image file
        file: Option<String>,

        #[arg(long, conflicts_with = "file", help = "Remove the photo")]
        clear: bool,
    },

    /// Overview of the active entry with item ids
    Show,

    /// Applicable and fulfilled section counts
    Tally,

    /// Render the report on the terminal
    Report,

    /// Print the share message
    Share,

    /// Print the document name and write the rendered report next to it
    Print {
        #[arg(long, value_name = "DIR", help = "Output directory (default: current)")]
        dir: Option<String>,
    },

    /// Export the report of the active entry
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List all entries in the store
    List,

    /// Finalize the active entry; it can no longer be edited
    Close,

    /// Delete an entry
    Del {
        /// Entry id
        id: i64,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
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

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum StaffAction {
    /// Set the headcount; the roster grows or shrinks to match
    Count {
        /// Raw headcount (non-numeric counts as 0)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Set one grooming check of a roster row
    Check {
        id: String,
        /// mask | uniform | shoes | hair | nails | jewelry | watch
        check: String,
        /// on | off
        value: String,
    },

    /// Set the name of a roster row
    Name { id: String, name: String },

    /// Add staff photos, one item per file
    Photos {
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Remove a staff photo
    Unphoto { id: String },
}

#[derive(Subcommand)]
pub enum ItemAction {
    /// Append an item to a list
    Add {
        list: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        temp: Option<String>,

        #[arg(long = "temp-out")]
        temp_out: Option<String>,

        #[arg(long = "temp-in")]
        temp_in: Option<String>,
    },

    /// Remove an item
    Rm { list: String, id: String },

    /// Replace one text field of an item (name, temp, tempOut, tempIn)
    Set {
        list: String,
        id: String,
        field: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Attach a photo to an item
    Photo {
        list: String,
        id: String,
        file: String,

        #[arg(long, help = "Photo field (default depends on the list)")]
        field: Option<String>,
    },

    /// Remove a photo from an item
    Unphoto {
        list: String,
        id: String,

        #[arg(long)]
        field: Option<String>,
    },
}
