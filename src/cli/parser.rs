use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for dwlog
/// Keep a daily markdown work log, summarize it and push it to git
#[derive(Parser)]
#[command(
    name = "dwlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily work log: append what you did, summarize the day with Gemini, push it to git",
    long_about = None
)]
pub struct Cli {
    /// Use a different configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the log directory
    #[arg(global = true, long = "log-dir", value_name = "DIR")]
    pub log_dir: Option<String>,

    /// Override the activity database path
    #[arg(global = true, long = "db", value_name = "FILE")]
    pub db: Option<String>,

    /// Freeze the clock (YYYY-MM-DDTHH:MM), used by tests
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    /// Increase diagnostic output on stderr (-v, -vv)
    #[arg(global = true, short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the configuration file and create the activity database
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

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

    /// Append an entry to today's log
    Save {
        /// What you did
        #[arg(long, short = 'p', value_name = "TEXT")]
        progress: Option<String>,

        /// What is blocking you
        #[arg(long, short = 'b', value_name = "TEXT")]
        blockers: Option<String>,

        /// What you learned
        #[arg(long, short = 'l', value_name = "TEXT")]
        learnings: Option<String>,

        /// Write the entry in $EDITOR from a pre-filled template
        #[arg(long = "edit", conflicts_with_all = ["progress", "blockers", "learnings"])]
        edit: bool,

        #[arg(long = "editor", requires = "edit")]
        editor: Option<String>,
    },

    /// Print today's log (or another day's)
    Show {
        /// Day to show (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// List the days that have a log file
        #[arg(long, conflicts_with = "date")]
        list: bool,
    },

    /// Summarize today's log with the configured model
    Summary,

    /// Stage, commit and push the log repository
    Sync,

    /// Interactive mode: save, summarize and sync from one prompt
    Session,

    /// Print the internal activity log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Archive every day file into a zip
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing archive")]
        force: bool,
    },
}
