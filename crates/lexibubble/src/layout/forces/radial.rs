//! Radial placement around the canvas center.

use lexibubble_core::geometry::Point;

use super::Force;
use crate::{config::OrbitConfig, layout::body::Body};

/// Pulls each satellite toward its orbit.
///
/// Synonym orbits grow as similarity drops; all antonyms share one outer
/// orbit. The center is left alone.
#[derive(Debug, Clone, Copy)]
pub struct Radial {
    config: OrbitConfig,
}

impl Radial {
    pub fn new(config: OrbitConfig) -> Self {
        Self { config }
    }
}

impl Force for Radial {
    fn name(&self) -> &'static str {
        "radial"
    }

    fn apply(&self, bodies: &[Body], alpha: f32) -> Vec<Point> {
        bodies
            .iter()
            .map(|body| {
                if body.kind().is_center() {
                    return Point::default();
                }

                let mut offset = body.position();
                if offset.is_zero() {
                    offset = Point::new(1e-6, 0.0);
                }
                let distance = offset.hypot();
                let target = self.config.target_radius(body.kind(), body.similarity());
                let k = (target - distance) * self.config.strength() * alpha / distance;
                offset.scale(k)
            })
            .collect()
    }
}
