//! Lexibubble - a visual "bubble dictionary".
//!
//! A searched word sits at the center of the canvas; its synonyms orbit it at
//! a distance that shrinks as similarity grows, and its antonyms gather on an
//! outer ring. This crate holds the force-directed layout engine, the
//! exploration session driving it from word analysis providers, and SVG
//! snapshot export.
//!
//! # Example
//!
//! ```rust,no_run
//! use lexibubble::{
//!     config::AppConfig,
//!     provider::FixtureProvider,
//!     session::Explorer,
//! };
//! use lexibubble_core::geometry::Size;
//!
//! let provider = FixtureProvider::new("fixtures");
//! let mut explorer = Explorer::new(
//!     AppConfig::default(),
//!     provider.clone(),
//!     provider,
//!     Size::new(800.0, 600.0),
//! );
//!
//! explorer.search("happy").expect("Failed to analyze");
//! let frame = explorer.run_to_convergence().expect("No layout");
//! println!("{} bubbles placed", frame.len());
//! ```

pub mod config;
pub mod export;
pub mod layout;
pub mod provider;
pub mod session;

mod error;

pub use lexibubble_core::{color, geometry, identifier, node, word};

pub use error::{LexiError, ProviderError};

use log::{debug, info};

use config::StyleConfig;
use layout::{NodeSet, PositionFrame};

/// Renders a frame of `nodes` as an SVG string.
///
/// # Errors
///
/// Returns [`LexiError::Export`] if the style holds an invalid color or the
/// frame does not position every node.
pub fn render_svg(
    frame: &PositionFrame,
    nodes: &NodeSet,
    style: &StyleConfig,
) -> Result<String, LexiError> {
    info!(nodes = nodes.len(), tick = frame.tick(); "Rendering snapshot");
    let svg = export::svg::SvgBuilder::new("").with_style(style).build()?;
    let rendered = svg.render_to_string(frame, nodes)?;
    debug!(bytes = rendered.len(); "Snapshot rendered");
    Ok(rendered)
}
