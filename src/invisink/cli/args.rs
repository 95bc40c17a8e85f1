use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "invisink", version)]
#[command(about = "Hide structured session data inside plain-text notes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true, env = "INVISINK_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode text into invisible characters
    #[command(alias = "e")]
    Encode {
        /// Text to encode (read from stdin if omitted)
        text: Option<String>,
    },

    /// Decode invisible characters back into text
    #[command(alias = "d")]
    Decode {
        /// Invisible text, optionally with the marker (read from stdin if omitted)
        text: Option<String>,
    },

    /// Build a note carrying exercise durations
    #[command(alias = "w")]
    Wrap {
        /// Entries in the form <exercise-id>=<duration>
        #[arg(num_args = 0..)]
        entries: Vec<String>,

        /// JSON file with a detail log to embed
        #[arg(long)]
        details: Option<PathBuf>,
    },

    /// Read the payload out of a note
    #[command(alias = "u")]
    Unwrap {
        /// Note text (read from stdin if omitted)
        note: Option<String>,

        /// Print the payload as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what a note is made of without decoding it
    #[command(alias = "i")]
    Inspect {
        /// Note text (read from stdin if omitted)
        note: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (compression-level, buffer-size, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
