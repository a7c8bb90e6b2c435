//! CLI logic for the Netsketch batch host.
//!
//! Reads a connection script, applies it to an empty diagram and exports
//! the result as SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use netsketch::{Editor, NetsketchError, import::ImportSummary};

/// Run the Netsketch CLI application
///
/// With `--check` every line of the script is validated and nothing is
/// written. Otherwise the script is imported and the diagram is exported to
/// the output path.
///
/// # Errors
///
/// Returns `NetsketchError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed script lines
/// - Export errors
pub fn run(args: &Args) -> Result<(), NetsketchError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing script"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let source = fs::read_to_string(&args.input)?;

    if args.check {
        let relations = netsketch_parser::parse_script(&source).map_err(|err| {
            NetsketchError::new_import_error(err, source.as_str(), ImportSummary::default())
        })?;
        info!(relations = relations.len(); "Script is valid");
        return Ok(());
    }

    let mut editor = Editor::new(app_config);
    let summary = editor.import(&source)?;
    info!(
        nodes = summary.nodes_created,
        connections = summary.connections_created,
        self_loops = summary.self_loops_skipped;
        "Script imported"
    );

    editor.write_svg(&args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
