//! Command-line interface library for foctree.
//!
//! This crate wires the [`foctree`] library to the command line: argument
//! parsing, configuration discovery, and rendering of rich error reports
//! via miette.

pub mod error_adapter;

mod args;
mod config;

use std::fs;

use log::info;

use foctree::{FoctreeError, TreeBuilder};

pub use args::{Args, Command};

/// Run the application with the given arguments.
///
/// Loads configuration, then dispatches to the requested subcommand.
///
/// # Errors
///
/// Returns a [`FoctreeError`] when the input cannot be read or parsed,
/// or the output cannot be written.
pub fn run(args: &Args) -> Result<(), FoctreeError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = TreeBuilder::new(app_config);

    match &args.command {
        Command::Import { input, output } => {
            info!(input = input.as_str(), output = output.as_str(); "Importing script into store");

            let source = fs::read_to_string(input)?;
            let tree = builder.parse(&source)?;
            builder.save(&tree, output)?;

            info!(focuses = tree.len(); "Import complete");
        }

        Command::Export { input, output } => {
            info!(input = input.as_str(), output = output.as_str(); "Exporting store as script");

            let tree = builder.load(input)?;
            fs::write(output, builder.render_script(&tree))?;

            info!(focuses = tree.len(); "Export complete");
        }

        Command::Fmt { input, output } => {
            let target = output.as_deref().unwrap_or(input.as_str());
            info!(input = input.as_str(), output = target; "Reformatting script");

            let source = fs::read_to_string(input)?;
            let tree = builder.parse(&source)?;
            fs::write(target, builder.render_script(&tree))?;
        }

        Command::Localise { input, output } => {
            info!(input = input.as_str(), output = output.as_str(); "Generating localisation");

            let tree = builder.load(input)?;
            fs::write(output, builder.render_localisation(&tree))?;

            info!(focuses = tree.len(); "Localisation complete");
        }
    }

    Ok(())
}
