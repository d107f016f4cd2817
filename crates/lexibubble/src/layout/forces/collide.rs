//! Overlap prevention.

use lexibubble_core::geometry::Point;

use super::{Force, jiggle_pair};
use crate::{config::CollisionConfig, layout::body::Body};

/// Pushes overlapping bodies apart along the line between their centers.
///
/// Works on predicted positions (position plus velocity) and is relaxed over
/// several passes per tick. The correction is shared by squared radius, so
/// the smaller body moves more. Pinned bodies are immovable: the other body
/// takes the whole correction. Collision is not scaled by temperature, which
/// keeps overlaps resolved after the layout has cooled.
#[derive(Debug, Clone, Copy)]
pub struct Collide {
    padding: f32,
    passes: usize,
    strength: f32,
}

impl Collide {
    pub fn new(config: CollisionConfig) -> Self {
        Self {
            padding: config.padding(),
            passes: config.passes(),
            strength: config.strength(),
        }
    }

    fn share(&self, a: &Body, b: &Body) -> Option<(f32, f32)> {
        match (a.is_pinned(), b.is_pinned()) {
            (true, true) => None,
            (true, false) => Some((0.0, 1.0)),
            (false, true) => Some((1.0, 0.0)),
            (false, false) => {
                let ra = (a.radius() + self.padding).powi(2);
                let rb = (b.radius() + self.padding).powi(2);
                let a_share = rb / (ra + rb);
                Some((a_share, 1.0 - a_share))
            }
        }
    }
}

impl Force for Collide {
    fn name(&self) -> &'static str {
        "collide"
    }

    fn apply(&self, bodies: &[Body], _alpha: f32) -> Vec<Point> {
        let mut deltas = vec![Point::default(); bodies.len()];

        for _ in 0..self.passes {
            for (i, a) in bodies.iter().enumerate() {
                for (j, b) in bodies.iter().enumerate().skip(i + 1) {
                    let Some((a_share, b_share)) = self.share(a, b) else {
                        continue;
                    };

                    let predicted_a = a.predicted().add_point(deltas[i]);
                    let predicted_b = b.predicted().add_point(deltas[j]);
                    let reach = a.radius() + b.radius() + 2.0 * self.padding;

                    let mut offset = predicted_a.sub_point(predicted_b);
                    if offset.is_zero() {
                        offset = jiggle_pair(i, j);
                    }

                    let distance = offset.hypot();
                    if distance >= reach {
                        continue;
                    }

                    let correction = offset.scale((reach - distance) / distance * self.strength);
                    deltas[i] = deltas[i].add_point(correction.scale(a_share));
                    deltas[j] = deltas[j].sub_point(correction.scale(b_share));
                }
            }
        }

        deltas
    }
}
