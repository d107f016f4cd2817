//! Per-axis pull toward the canvas center.

use lexibubble_core::geometry::Point;

use super::Force;
use crate::{config::CenteringConfig, layout::body::Body};

/// Coordinate axis a [`Centering`] force acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Spring toward zero on one axis.
///
/// The strength depends on the node kind; negative strengths push outward.
#[derive(Debug, Clone, Copy)]
pub struct Centering {
    axis: Axis,
    config: CenteringConfig,
}

impl Centering {
    pub fn new(axis: Axis, config: CenteringConfig) -> Self {
        Self { axis, config }
    }
}

impl Force for Centering {
    fn name(&self) -> &'static str {
        match self.axis {
            Axis::X => "center-x",
            Axis::Y => "center-y",
        }
    }

    fn apply(&self, bodies: &[Body], alpha: f32) -> Vec<Point> {
        bodies
            .iter()
            .map(|body| {
                let strength = self.config.strength(body.kind(), body.similarity()) * alpha;
                let position = body.position();
                match self.axis {
                    Axis::X => Point::new(-position.x() * strength, 0.0),
                    Axis::Y => Point::new(0.0, -position.y() * strength),
                }
            })
            .collect()
    }
}
