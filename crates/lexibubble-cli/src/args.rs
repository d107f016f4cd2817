//! Command-line argument definitions for the Lexibubble CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the word to explore, where analysis
//! payloads come from, the canvas, the output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Lexibubble word explorer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Word to place at the center
    #[arg(help = "Word to explore")]
    pub word: String,

    /// Directory holding analysis payloads (`<word>.json`, `compare/<a>__<b>.json`)
    #[arg(short, long)]
    pub fixtures: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Canvas width
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    /// Canvas height
    #[arg(long, default_value_t = 600.0)]
    pub height: f32,

    /// Bubble ids to click in order after the layout settles
    #[arg(long = "click", value_name = "ID")]
    pub clicks: Vec<String>,

    /// Write the final frame as JSON to this path
    #[arg(long)]
    pub frames: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
