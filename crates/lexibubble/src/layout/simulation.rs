//! The tick-by-tick simulation state machine.

use indexmap::IndexMap;
use log::trace;

use lexibubble_core::{
    geometry::{Point, Size},
    node::Node,
};

use super::{
    body::Body,
    forces::{self, Force},
    frame::PositionFrame,
};
use crate::config::{CoolingConfig, LayoutConfig};

/// State of one layout run.
///
/// Each call to [`Simulation::tick`] consumes the current state and returns
/// the next one. Per tick the temperature `alpha` decays toward zero, every
/// force contributes a velocity delta per body, the deltas are summed, and
/// bodies integrate with damping.
pub struct Simulation {
    bodies: Vec<Body>,
    forces: Vec<Box<dyn Force>>,
    cooling: CoolingConfig,
    alpha: f32,
    ticks: u64,
}

impl Simulation {
    /// Creates a simulation over `nodes` with the standard forces.
    ///
    /// The center node is pinned at the origin.
    pub fn new<'a>(nodes: impl IntoIterator<Item = &'a Node>, config: &LayoutConfig) -> Self {
        let bodies = nodes
            .into_iter()
            .map(|node| Body::new(node, node.kind().is_center()))
            .collect();

        Self {
            bodies,
            forces: forces::standard(config),
            cooling: *config.cooling(),
            alpha: 1.0,
            ticks: 0,
        }
    }

    /// Replaces the force list.
    pub fn with_forces(mut self, forces: Vec<Box<dyn Force>>) -> Self {
        self.forces = forces;
        self
    }

    /// Advances the simulation by one step.
    ///
    /// A converged simulation is returned unchanged.
    pub fn tick(mut self) -> Self {
        if self.is_converged() {
            return self;
        }

        for body in &mut self.bodies {
            body.repair();
        }

        self.alpha -= self.alpha * self.cooling.alpha_decay();

        let mut deltas = vec![Point::default(); self.bodies.len()];
        for force in &self.forces {
            for (delta, contribution) in deltas.iter_mut().zip(force.apply(&self.bodies, self.alpha)) {
                if contribution.is_finite() {
                    *delta = delta.add_point(contribution);
                }
            }
        }

        let velocity_keep = 1.0 - self.cooling.velocity_decay();
        for (body, delta) in self.bodies.iter_mut().zip(deltas) {
            body.integrate(delta, velocity_keep);
            body.repair();
        }

        self.ticks += 1;
        trace!(tick = self.ticks, alpha = self.alpha; "Simulation tick");

        self
    }

    /// Whether the temperature has dropped below the minimum, or the tick
    /// cap has been reached.
    pub fn is_converged(&self) -> bool {
        self.alpha < self.cooling.alpha_min() || self.ticks >= self.cooling.max_ticks()
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Snapshot of the current positions.
    pub fn frame(&self, generation: u64, canvas: Size) -> PositionFrame {
        let positions: IndexMap<_, _> = self
            .bodies
            .iter()
            .map(|body| (body.id(), body.position()))
            .collect();
        PositionFrame::new(generation, self.ticks, self.alpha, canvas, positions)
    }

    #[cfg(test)]
    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("bodies", &self.bodies.len())
            .field("alpha", &self.alpha)
            .field("ticks", &self.ticks)
            .finish()
    }
}
