//! Export of layout snapshots.
//!
//! The [`Exporter`] trait turns one [`PositionFrame`] and the [`NodeSet`] it
//! positions into an output format. [`svg`] is the built-in backend.
//!
//! Export operations return [`Error`], which converts into
//! [`LexiError::Export`](crate::LexiError::Export) at the crate boundary.

pub mod svg;

use crate::layout::{NodeSet, PositionFrame};

/// Abstraction for snapshot export backends.
pub trait Exporter {
    /// Exports one frame of a layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a frame position is missing for a node,
    /// or [`Error::Io`] if writing the output fails.
    fn export_frame(&mut self, frame: &PositionFrame, nodes: &NodeSet) -> Result<(), Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
