//! Layout runs and their cancellation.
//!
//! Every run is tagged with a generation number handed out by a
//! [`LayoutScheduler`]. Starting a new run bumps the generation, which
//! cancels every older [`CancellationToken`] at once: the superseded run stops
//! yielding frames, and the [`PositionBoard`](super::PositionBoard) rejects
//! anything it still tries to publish.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use log::{debug, info, warn};

use lexibubble_core::geometry::Size;

use super::{frame::PositionFrame, nodes::NodeSet, simulation::Simulation};
use crate::config::LayoutConfig;

/// Canvas used when the host reports an unusable size.
const FALLBACK_CANVAS: Size = Size::new(800.0, 600.0);

/// Hands out generations; the latest one is the only live one.
#[derive(Debug, Clone, Default)]
pub struct LayoutScheduler {
    generation: Arc<AtomicU64>,
}

impl LayoutScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation, cancelling all earlier tokens.
    pub fn begin(&self) -> CancellationToken {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(generation; "Layout generation started");
        CancellationToken {
            generation,
            live: Arc::clone(&self.generation),
        }
    }

    /// Cancels the live generation without starting a run.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// The live generation.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

/// Identifies one layout run; cancelled once a newer run begins.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    generation: u64,
    live: Arc<AtomicU64>,
}

impl CancellationToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.live.load(Ordering::Acquire) != self.generation
    }
}

/// A running layout: an iterator over the frames of one simulation.
///
/// Yields one frame per tick until the simulation converges or the token is
/// cancelled. A cancelled run yields nothing, even if it has not converged.
#[derive(Debug)]
pub struct LayoutRun {
    simulation: Option<Simulation>,
    token: CancellationToken,
    canvas: Size,
    reported: bool,
}

impl LayoutRun {
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Changes the canvas later frames are produced for.
    ///
    /// Positions are relative to the canvas center, so the simulation itself
    /// is unaffected.
    pub fn resize(&mut self, canvas: Size) {
        self.canvas = checked_canvas(canvas, self.canvas);
    }

    pub fn is_converged(&self) -> bool {
        self.simulation
            .as_ref()
            .is_none_or(Simulation::is_converged)
    }

    /// Frame of the current state, without advancing.
    ///
    /// `None` once the run has been cancelled.
    pub fn current_frame(&self) -> Option<PositionFrame> {
        if self.token.is_cancelled() {
            return None;
        }
        self.simulation
            .as_ref()
            .map(|simulation| simulation.frame(self.token.generation(), self.canvas))
    }

    /// Advances until convergence and returns the final frame.
    ///
    /// `None` if the run was cancelled.
    pub fn finish(&mut self) -> Option<PositionFrame> {
        let mut last = None;
        for frame in self.by_ref() {
            last = Some(frame);
        }
        if self.token.is_cancelled() {
            None
        } else {
            last.or_else(|| self.current_frame())
        }
    }
}

impl Iterator for LayoutRun {
    type Item = PositionFrame;

    fn next(&mut self) -> Option<PositionFrame> {
        if self.token.is_cancelled() {
            if !self.reported {
                debug!(generation = self.token.generation(); "Layout run cancelled");
                self.reported = true;
            }
            return None;
        }

        let simulation = self.simulation.take()?;
        if simulation.is_converged() {
            if !self.reported {
                info!(
                    generation = self.token.generation(),
                    ticks = simulation.ticks();
                    "Layout converged"
                );
                self.reported = true;
            }
            self.simulation = Some(simulation);
            return None;
        }

        let simulation = simulation.tick();
        let frame = simulation.frame(self.token.generation(), self.canvas);
        self.simulation = Some(simulation);
        Some(frame)
    }
}

/// Starts a layout run over `nodes`.
///
/// The caller obtains `token` from a [`LayoutScheduler`] right before the
/// call, which cancels whatever run was live before.
pub fn compute_layout(
    nodes: &NodeSet,
    canvas: Size,
    token: CancellationToken,
    config: &LayoutConfig,
) -> LayoutRun {
    info!(
        generation = token.generation(),
        nodes = nodes.len();
        "Starting layout"
    );

    LayoutRun {
        simulation: Some(Simulation::new(nodes.nodes(), config)),
        canvas: checked_canvas(canvas, FALLBACK_CANVAS),
        token,
        reported: false,
    }
}

fn checked_canvas(canvas: Size, fallback: Size) -> Size {
    if canvas.is_valid() {
        canvas
    } else {
        warn!(
            width = canvas.width(),
            height = canvas.height();
            "Invalid canvas size, keeping previous"
        );
        fallback
    }
}
