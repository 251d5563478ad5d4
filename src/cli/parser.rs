use clap::{Parser, Subcommand};

/// Command-line interface definition for feedlog
#[derive(Parser)]
#[command(
    name = "feedlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small local breastfeeding log: track feeding sessions in SQLite",
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

    /// Record a feeding session
    Add {
        /// Date of the feed (YYYY-MM-DD, defaults to today)
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long = "start")]
        start: String,

        /// End time (HH:MM)
        #[arg(long = "end")]
        end: String,

        /// End date (YYYY-MM-DD) when the feed crosses midnight.
        /// Without it, an end time earlier than the start rolls to the next day.
        #[arg(long = "end-date")]
        end_date: Option<String>,

        /// Side: left or right (l/r also accepted)
        #[arg(long = "side")]
        side: String,

        /// Nursing position: cradle, clutch, or lying
        #[arg(long = "pos")]
        pos: Option<String>,
    },

    /// List feeding sessions, most recent first
    List {
        /// Print the entries as JSON instead of a table
        #[arg(long = "json")]
        json: bool,
    },

    /// Edit a feeding session by key; unspecified fields keep their values
    Edit {
        /// Entry key (as shown by `list`)
        key: String,

        /// New date of the feed (YYYY-MM-DD)
        #[arg(long = "date")]
        date: Option<String>,

        /// New start time (HH:MM)
        #[arg(long = "start")]
        start: Option<String>,

        /// New end time (HH:MM)
        #[arg(long = "end")]
        end: Option<String>,

        /// New side: left or right
        #[arg(long = "side")]
        side: Option<String>,

        /// New nursing position
        #[arg(long = "pos", conflicts_with = "no_pos")]
        pos: Option<String>,

        /// Clear the recorded position
        #[arg(long = "no-pos")]
        no_pos: bool,
    },

    /// Delete a feeding session by key
    Del {
        /// Entry key (as shown by `list`)
        key: String,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },
}
