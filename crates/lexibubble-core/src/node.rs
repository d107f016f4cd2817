//! Layout nodes
//!
//! A [`Node`] is what the layout engine positions: one per word bubble. Nodes
//! are immutable descriptions; the engine keeps position and velocity in its
//! own state. Construction repairs out-of-range or non-finite similarity so no
//! later force computation has to.

use log::warn;

use crate::{geometry::Point, identifier::NodeId};

/// Radius of the center bubble.
pub const CENTER_RADIUS: f32 = 50.0;
/// Radius of a satellite with similarity 0.
pub const SATELLITE_BASE_RADIUS: f32 = 25.0;
/// Extra satellite radius per unit of similarity.
pub const SATELLITE_RADIUS_GAIN: f32 = 6.0;

/// Role of a node in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Center,
    Synonym,
    Antonym,
}

impl NodeKind {
    pub fn is_center(self) -> bool {
        matches!(self, NodeKind::Center)
    }

    pub fn is_antonym(self) -> bool {
        matches!(self, NodeKind::Antonym)
    }
}

/// Clamps a similarity score into [0, 1].
///
/// NaN and negative infinity map to 0, positive infinity maps to 1.
///
/// # Examples
///
/// ```
/// use lexibubble_core::node::clamp_similarity;
///
/// assert_eq!(clamp_similarity(1.7), 1.0);
/// assert_eq!(clamp_similarity(-0.3), 0.0);
/// assert_eq!(clamp_similarity(f32::NAN), 0.0);
/// assert_eq!(clamp_similarity(0.42), 0.42);
/// ```
pub fn clamp_similarity(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// One positioned unit of the bubble layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    similarity: f32,
    radius: f32,
    seed: Point,
}

impl Node {
    /// Creates the center node. Its similarity is fixed at 1.
    pub fn center(id: NodeId) -> Self {
        Self {
            id,
            kind: NodeKind::Center,
            similarity: 1.0,
            radius: CENTER_RADIUS,
            seed: Point::default(),
        }
    }

    /// Creates a synonym node, clamping `similarity` into [0, 1].
    pub fn synonym(id: NodeId, similarity: f32) -> Self {
        Self::satellite(id, NodeKind::Synonym, similarity)
    }

    /// Creates an antonym node, clamping `similarity` into [0, 1].
    pub fn antonym(id: NodeId, similarity: f32) -> Self {
        Self::satellite(id, NodeKind::Antonym, similarity)
    }

    fn satellite(id: NodeId, kind: NodeKind, similarity: f32) -> Self {
        let clamped = clamp_similarity(similarity);
        if clamped != similarity {
            warn!(
                node_id:% = id,
                reported = similarity,
                clamped;
                "Similarity out of range, clamped"
            );
        }

        Self {
            id,
            kind,
            similarity: clamped,
            radius: SATELLITE_RADIUS_GAIN.mul_add(clamped, SATELLITE_BASE_RADIUS),
            seed: Point::default(),
        }
    }

    /// Sets the initial position, relative to the canvas center.
    ///
    /// Non-finite seeds are ignored and the node starts at the origin.
    pub fn with_seed(mut self, seed: Point) -> Self {
        if seed.is_finite() {
            self.seed = seed;
        } else {
            warn!(node_id:% = self.id; "Ignoring non-finite seed position");
        }
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Similarity to the center word, always within [0, 1].
    pub fn similarity(&self) -> f32 {
        self.similarity
    }

    /// Visual and collision radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Initial position, relative to the canvas center.
    pub fn seed(&self) -> Point {
        self.seed
    }
}
