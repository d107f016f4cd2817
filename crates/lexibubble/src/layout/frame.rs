//! Position frames and the live position board.
//!
//! A [`PositionFrame`] is one snapshot of a layout run. Positions are stored
//! relative to the canvas center; absolute coordinates are derived from the
//! canvas size the frame was produced for, so a resize re-bases every node by
//! the shift of the canvas center and nothing else.

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use lexibubble_core::{
    geometry::{Point, Size},
    identifier::NodeId,
};

use super::run::{CancellationToken, LayoutScheduler};

/// Positions of every node after one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionFrame {
    generation: u64,
    tick: u64,
    alpha: f32,
    canvas: Size,
    positions: IndexMap<NodeId, Point>,
}

impl PositionFrame {
    pub(crate) fn new(
        generation: u64,
        tick: u64,
        alpha: f32,
        canvas: Size,
        positions: IndexMap<NodeId, Point>,
    ) -> Self {
        Self {
            generation,
            tick,
            alpha,
            canvas,
            positions,
        }
    }

    /// Generation of the run that produced this frame.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of ticks the simulation had run when the frame was taken.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulation temperature at the time of the frame.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Position of a node relative to the canvas center.
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    /// Position of a node in canvas coordinates.
    pub fn absolute_position(&self, id: NodeId) -> Option<Point> {
        self.position(id)
            .map(|position| self.canvas.center().add_point(position))
    }

    /// Iterates over relative positions in node order, center first.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        self.positions.iter().map(|(id, position)| (*id, *position))
    }

    /// Iterates over canvas coordinates in node order, center first.
    pub fn absolute(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        let origin = self.canvas.center();
        self.iter()
            .map(move |(id, position)| (id, origin.add_point(position)))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The same frame, interpreted on a canvas of another size.
    pub fn with_canvas(mut self, canvas: Size) -> Self {
        self.canvas = canvas;
        self
    }
}

/// The shared "current positions" a presentation layer reads from.
///
/// Only frames from the scheduler's live generation are accepted, so a run
/// that has been superseded can never overwrite the positions of its
/// successor.
#[derive(Debug)]
pub struct PositionBoard {
    scheduler: LayoutScheduler,
    frame: Option<PositionFrame>,
}

impl PositionBoard {
    pub fn new(scheduler: LayoutScheduler) -> Self {
        Self {
            scheduler,
            frame: None,
        }
    }

    /// Stores `frame` if it belongs to the live generation.
    ///
    /// Returns `false` and leaves the board untouched for stale frames.
    pub fn publish(&mut self, frame: PositionFrame) -> bool {
        let live = self.scheduler.generation();
        if frame.generation() != live {
            debug!(
                frame_generation = frame.generation(),
                live_generation = live;
                "Rejected stale frame"
            );
            return false;
        }
        self.frame = Some(frame);
        true
    }

    /// Latest accepted frame, if it is still from the live generation.
    pub fn frame(&self) -> Option<&PositionFrame> {
        self.frame
            .as_ref()
            .filter(|frame| frame.generation() == self.scheduler.generation())
    }

    /// Whether `token` would be allowed to publish.
    pub fn accepts(&self, token: &CancellationToken) -> bool {
        token.generation() == self.scheduler.generation()
    }

    /// Re-bases the current frame on a new canvas size.
    pub fn resize(&mut self, canvas: Size) {
        if let Some(frame) = self.frame.take() {
            self.frame = Some(frame.with_canvas(canvas));
        }
    }

    pub fn clear(&mut self) {
        self.frame = None;
    }
}
