//! Lexibubble CLI library
//!
//! This module contains the core CLI logic for the Lexibubble word explorer.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io};

use log::{info, warn};

use lexibubble::{
    LexiError, geometry::Size, identifier::NodeId, provider::FixtureProvider, session::Explorer,
};

/// Run the Lexibubble CLI application
///
/// This function analyzes the word through the fixture provider, settles the
/// bubble layout, applies the requested clicks, and writes the resulting SVG
/// to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `LexiError` for:
/// - Configuration loading errors
/// - Empty words
/// - Missing or malformed provider payloads
/// - Rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), LexiError> {
    info!(
        word = args.word,
        fixtures = args.fixtures,
        output_path = args.output;
        "Exploring word"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let provider = FixtureProvider::new(&args.fixtures);
    let mut explorer = Explorer::new(
        app_config,
        provider.clone(),
        provider,
        Size::new(args.width, args.height),
    );

    explorer.search(&args.word)?;
    explorer.run_to_convergence();

    for click in &args.clicks {
        let outcome = explorer.click(NodeId::new(click))?;
        info!(node_id = click, outcome:?; "Applied click");
        explorer.run_to_convergence();
    }

    if let Some(comparison) = explorer.comparison() {
        info!(
            word1 = comparison.word1,
            word2 = comparison.word2;
            "{}",
            comparison.differences
        );
    }

    let (Some(frame), Some(nodes)) = (explorer.frame(), explorer.nodes()) else {
        warn!("Layout produced no frame");
        return Err(LexiError::Io(io::Error::other("layout produced no frame")));
    };

    let svg = lexibubble::render_svg(frame, nodes, explorer.config().style())?;
    fs::write(&args.output, svg)?;
    info!(output_file = args.output; "SVG exported successfully");

    if let Some(frames_path) = &args.frames {
        let json = serde_json::to_string_pretty(frame).map_err(io::Error::other)?;
        fs::write(frames_path, json)?;
        info!(frames_file = frames_path; "Frame exported successfully");
    }

    Ok(())
}
