//! Building the node set of one layout from an analysis result.
//!
//! A [`NodeSet`] holds exactly one center node followed by the satellites,
//! each with the word and color class it displays. It is built in bulk and
//! replaced wholesale on the next search.

use std::{collections::HashSet, f32::consts::PI};

use indexmap::IndexMap;
use log::{debug, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

use lexibubble_core::{
    geometry::Point,
    identifier::NodeId,
    node::{Node, NodeKind},
    word::{AnalysisResponse, BubbleColor, PositionHint, WordBubble},
};

use crate::config::SeedingConfig;

/// Radius step of the phyllotaxis fallback placement.
const PHYLLOTAXIS_STEP: f32 = 10.0;

/// A node with what it displays.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    node: Node,
    word: String,
    color: BubbleColor,
}

impl Entry {
    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn color(&self) -> BubbleColor {
        self.color
    }
}

/// The nodes of one layout pass, center first.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSet {
    entries: IndexMap<NodeId, Entry>,
}

impl NodeSet {
    /// Builds the node set for an analysis result.
    ///
    /// Provider ids are reused when non-empty and unique; otherwise positional
    /// ids (`syn-<n>`, `ant-<n>`) are assigned. Satellites are seeded from the
    /// provider's position hint, or on a phyllotaxis spiral when the hint is
    /// zero, plus a small random jitter.
    pub fn from_analysis(analysis: &AnalysisResponse, seeding: &SeedingConfig) -> Self {
        let mut rng = match seeding.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut used = HashSet::new();

        let center_bubble = &analysis.center_word.bubble;
        let center_id = match center_bubble.id.trim() {
            "" => NodeId::new("center"),
            id => NodeId::new(id),
        };
        used.insert(center_id);
        let mut entries = IndexMap::new();
        entries.insert(
            center_id,
            Entry {
                node: Node::center(center_id),
                word: center_bubble.word.clone(),
                color: center_bubble.color,
            },
        );

        let satellites = analysis
            .synonyms
            .iter()
            .enumerate()
            .map(|(index, bubble)| (NodeKind::Synonym, "syn", index, bubble))
            .chain(
                analysis
                    .antonyms
                    .iter()
                    .enumerate()
                    .map(|(index, bubble)| (NodeKind::Antonym, "ant", index, bubble)),
            );

        for (slot, (kind, prefix, index, bubble)) in satellites.enumerate() {
            let id = assign_id(&mut used, &bubble.id, prefix, index);
            let node = satellite_node(id, kind, bubble)
                .with_seed(seed_position(bubble.position, slot, seeding, &mut rng));
            let color = if kind.is_antonym() {
                BubbleColor::Dark
            } else {
                bubble.color
            };

            entries.insert(
                id,
                Entry {
                    node,
                    word: bubble.word.clone(),
                    color,
                },
            );
        }

        debug!(
            word = center_bubble.word.as_str(),
            nodes = entries.len();
            "Node set built"
        );

        Self { entries }
    }

    /// Builds a node set from ready-made nodes, displaying each node's id.
    ///
    /// Satellites whose id repeats an earlier node are skipped.
    pub fn from_nodes(center: Node, satellites: impl IntoIterator<Item = Node>) -> Self {
        let mut entries = IndexMap::new();
        let center = if center.kind().is_center() {
            center
        } else {
            warn!(node_id:% = center.id(); "Center node has a satellite kind, treating as center");
            Node::center(center.id())
        };
        entries.insert(center.id(), display_entry(center));

        for node in satellites {
            if node.kind().is_center() || entries.contains_key(&node.id()) {
                warn!(node_id:% = node.id(); "Skipping duplicate or second center node");
                continue;
            }
            entries.insert(node.id(), display_entry(node));
        }

        Self { entries }
    }

    /// The center entry.
    pub fn center(&self) -> &Entry {
        // Construction always inserts the center first.
        &self.entries[0]
    }

    pub fn get(&self, id: NodeId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    /// Iterates over all entries, center first.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Iterates over all nodes, center first.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.entries.values().map(Entry::node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a node set has at least its center.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn display_entry(node: Node) -> Entry {
    let color = if node.kind().is_antonym() {
        BubbleColor::Dark
    } else {
        BubbleColor::Yellow
    };
    Entry {
        word: node.id().to_string(),
        node,
        color,
    }
}

fn satellite_node(id: NodeId, kind: NodeKind, bubble: &WordBubble) -> Node {
    match kind {
        NodeKind::Antonym => Node::antonym(id, bubble.similarity),
        _ => Node::synonym(id, bubble.similarity),
    }
}

fn assign_id(used: &mut HashSet<NodeId>, provided: &str, prefix: &str, index: usize) -> NodeId {
    let provided = provided.trim();
    if provided.is_empty() {
        warn!(prefix, index; "Missing node id, assigning a positional id");
    } else {
        let id = NodeId::new(provided);
        if used.insert(id) {
            return id;
        }
        warn!(provided, prefix, index; "Duplicate node id, assigning a positional id");
    }

    (index..)
        .map(|n| NodeId::positional(prefix, n))
        .find(|id| used.insert(*id))
        .unwrap_or_else(|| NodeId::positional(prefix, index))
}

/// Initial position of the satellite in `slot`.
fn seed_position(hint: PositionHint, slot: usize, seeding: &SeedingConfig, rng: &mut StdRng) -> Point {
    let base = if hint.x == 0.0 && hint.y == 0.0 {
        phyllotaxis(slot)
    } else {
        Point::new(hint.x, hint.y).scale(seeding.hint_scale())
    };

    let jitter = seeding.jitter();
    if jitter > 0.0 {
        base.add_point(Point::new(
            rng.random_range(-jitter..=jitter),
            rng.random_range(-jitter..=jitter),
        ))
    } else {
        base
    }
}

/// Sunflower spiral placement for the `index`-th satellite.
fn phyllotaxis(index: usize) -> Point {
    let golden_angle = PI * (3.0 - 5.0f32.sqrt());
    let i = index as f32 + 1.0;
    let radius = PHYLLOTAXIS_STEP * (0.5 + i).sqrt();
    let angle = i * golden_angle;
    Point::new(radius * angle.cos(), radius * angle.sin())
}
