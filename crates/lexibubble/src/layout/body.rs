//! Simulation state of one node.

use log::warn;

use lexibubble_core::{
    geometry::Point,
    identifier::NodeId,
    node::{Node, NodeKind},
};

/// A node together with its mutable simulation state.
///
/// Positions are offsets from the canvas center.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    id: NodeId,
    kind: NodeKind,
    similarity: f32,
    radius: f32,
    position: Point,
    velocity: Point,
    pinned: bool,
}

impl Body {
    /// Creates a body at the node's seed position with zero velocity.
    pub fn new(node: &Node, pinned: bool) -> Self {
        Self {
            id: node.id(),
            kind: node.kind(),
            similarity: node.similarity(),
            radius: node.radius(),
            position: if pinned { Point::default() } else { node.seed() },
            velocity: Point::default(),
            pinned,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn similarity(&self) -> f32 {
        self.similarity
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    /// Pinned bodies never move and are immovable for collisions.
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Position the body will reach if its velocity is applied unchanged.
    pub fn predicted(&self) -> Point {
        self.position.add_point(self.velocity)
    }

    /// Applies the summed velocity contributions of one tick, then damping,
    /// then moves the body.
    pub(super) fn integrate(&mut self, delta: Point, velocity_keep: f32) {
        if self.pinned {
            self.position = Point::default();
            self.velocity = Point::default();
            return;
        }

        self.velocity = self.velocity.add_point(delta).scale(velocity_keep);
        self.position = self.position.add_point(self.velocity);
    }

    /// Resets non-finite state.
    ///
    /// A non-finite position puts the body back at the canvas center and
    /// zeroes its velocity; a non-finite velocity is zeroed. Returns `true`
    /// if anything was repaired.
    pub(super) fn repair(&mut self) -> bool {
        if !self.position.is_finite() {
            warn!(node_id:% = self.id; "Non-finite position, resetting to canvas center");
            self.position = Point::default();
            self.velocity = Point::default();
            return true;
        }
        if !self.velocity.is_finite() {
            warn!(node_id:% = self.id; "Non-finite velocity, zeroing");
            self.velocity = Point::default();
            return true;
        }
        false
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, position: Point, velocity: Point) {
        self.position = position;
        self.velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_body_starts_at_origin() {
        let node = Node::center(NodeId::new("center")).with_seed(Point::new(10.0, 10.0));
        let body = Body::new(&node, true);
        assert!(body.position().is_zero());
        assert!(body.is_pinned());
    }

    #[test]
    fn test_integrate_applies_damping() {
        let node = Node::synonym(NodeId::new("joyful"), 0.9).with_seed(Point::new(100.0, 0.0));
        let mut body = Body::new(&node, false);

        body.integrate(Point::new(10.0, -4.0), 0.5);

        assert_eq!(body.velocity(), Point::new(5.0, -2.0));
        assert_eq!(body.position(), Point::new(105.0, -2.0));
    }

    #[test]
    fn test_integrate_keeps_pinned_body_fixed() {
        let mut body = Body::new(&Node::center(NodeId::new("center")), true);
        body.integrate(Point::new(10.0, 10.0), 0.65);
        assert!(body.position().is_zero());
        assert!(body.velocity().is_zero());
    }

    #[test]
    fn test_repair() {
        let mut body = Body::new(&Node::synonym(NodeId::new("a"), 0.5), false);

        body.set_state(Point::new(f32::NAN, 1.0), Point::new(3.0, 3.0));
        assert!(body.repair());
        assert!(body.position().is_zero());
        assert!(body.velocity().is_zero());

        body.set_state(Point::new(7.0, 1.0), Point::new(f32::INFINITY, 3.0));
        assert!(body.repair());
        assert_eq!(body.position(), Point::new(7.0, 1.0));
        assert!(body.velocity().is_zero());

        assert!(!body.repair());
    }
}
