//! N-body charge repulsion.

use lexibubble_core::geometry::Point;

use super::{Force, jiggle_pair};
use crate::{config::RepulsionConfig, layout::body::Body};

/// Pairwise repulsion with magnitude `strength * alpha / distance`.
///
/// Exact O(n²) summation; a layout holds a few dozen nodes at most.
#[derive(Debug, Clone, Copy)]
pub struct ManyBody {
    strength: f32,
    min_distance_squared: f32,
}

impl ManyBody {
    pub fn new(config: RepulsionConfig) -> Self {
        Self {
            strength: config.strength(),
            min_distance_squared: config.min_distance() * config.min_distance(),
        }
    }
}

impl Force for ManyBody {
    fn name(&self) -> &'static str {
        "many-body"
    }

    fn apply(&self, bodies: &[Body], alpha: f32) -> Vec<Point> {
        let mut deltas = vec![Point::default(); bodies.len()];

        for (i, body) in bodies.iter().enumerate() {
            if body.is_pinned() {
                continue;
            }

            for (j, other) in bodies.iter().enumerate() {
                if i == j {
                    continue;
                }

                let mut offset = body.position().sub_point(other.position());
                if offset.is_zero() {
                    offset = jiggle_pair(i, j);
                }

                let mut distance_squared = offset.length_squared();
                if distance_squared < self.min_distance_squared {
                    distance_squared = (self.min_distance_squared * distance_squared).sqrt();
                }

                let weight = self.strength * alpha / distance_squared;
                deltas[i] = deltas[i].add_point(offset.scale(weight));
            }
        }

        deltas
    }
}
