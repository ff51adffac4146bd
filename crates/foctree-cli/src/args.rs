//! Command-line argument definitions for the foctree CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Each subcommand moves a tree between the script format,
//! the JSON store, and the localisation output.

use clap::{Parser, Subcommand};

/// Command-line arguments for the foctree focus tree tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

/// The operation to perform.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import a focus tree script into a JSON store file
    Import {
        /// Path to the input script file
        input: String,

        /// Path to the output store file
        #[arg(short, long, default_value = "tree.json")]
        output: String,
    },

    /// Export a JSON store file as the canonical script
    Export {
        /// Path to the input store file
        input: String,

        /// Path to the output script file
        #[arg(short, long, default_value = "national_focus.txt")]
        output: String,
    },

    /// Rewrite a script file in its canonical form
    Fmt {
        /// Path to the script file
        input: String,

        /// Output path; the input is rewritten in place when omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate a localisation file from a JSON store file
    Localise {
        /// Path to the input store file
        input: String,

        /// Path to the output localisation file
        #[arg(short, long, default_value = "focus_localisation.yml")]
        output: String,
    },
}
