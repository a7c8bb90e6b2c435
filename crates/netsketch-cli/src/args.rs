//! Command-line argument definitions for the Netsketch CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`].

use clap::Parser;

/// Import a connection script and export it as an SVG network diagram
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the connection script, one `<label> -> <label>` per line
    #[arg(help = "Path to the input script")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "network-diagram.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Report every malformed line without writing any output
    #[arg(long)]
    pub check: bool,
}
