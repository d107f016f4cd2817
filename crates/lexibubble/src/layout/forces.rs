//! Force terms of the bubble simulation
//!
//! Every force is a pure function of the current bodies and the simulation
//! temperature, returning one velocity contribution per body. The simulation
//! sums the contributions of all forces before integrating, so the order of
//! forces does not matter.

mod centering;
mod collide;
mod many_body;
mod radial;

pub use centering::{Axis, Centering};
pub use collide::Collide;
pub use many_body::ManyBody;
pub use radial::Radial;

use lexibubble_core::geometry::Point;

use crate::{config::LayoutConfig, layout::body::Body};

/// One force term.
pub trait Force {
    /// Short name used in trace logs.
    fn name(&self) -> &'static str;

    /// Computes the velocity contribution for every body, in body order.
    ///
    /// `alpha` is the current simulation temperature in (0, 1].
    fn apply(&self, bodies: &[Body], alpha: f32) -> Vec<Point>;
}

/// Builds the standard force list from the layout configuration.
pub fn standard(config: &LayoutConfig) -> Vec<Box<dyn Force>> {
    vec![
        Box::new(ManyBody::new(*config.repulsion())),
        Box::new(Collide::new(*config.collision())),
        Box::new(Centering::new(Axis::X, *config.centering())),
        Box::new(Centering::new(Axis::Y, *config.centering())),
        Box::new(Radial::new(*config.orbit())),
    ]
}

/// Tiny deterministic offset used when two bodies coincide exactly.
///
/// Keeps the direction of a push defined without drawing from an RNG, so
/// that seeded runs stay reproducible.
fn jiggle(i: usize, j: usize) -> f32 {
    let magnitude = ((i * 7 + j * 13) % 11 + 1) as f32 * 1e-6;
    if (i + j) % 2 == 0 {
        magnitude
    } else {
        -magnitude
    }
}

/// Separation vector for two coincident bodies, seen from body `i`.
///
/// Antisymmetric: `jiggle_pair(i, j) == -jiggle_pair(j, i)`.
fn jiggle_pair(i: usize, j: usize) -> Point {
    let (lo, hi) = (i.min(j), i.max(j));
    let offset = Point::new(jiggle(lo, hi), jiggle(hi, lo));
    if i < j { offset } else { offset.scale(-1.0) }
}
