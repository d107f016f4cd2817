//! Force-directed bubble layout.
//!
//! Positions a center word and its synonyms and antonyms so that distance
//! from the center encodes similarity, antonyms gather on an outer orbit,
//! and no two bubbles overlap.
//!
//! # Pipeline
//!
//! 1. [`NodeSet`] turns an analysis result into seeded nodes.
//! 2. [`LayoutScheduler::begin`] cancels the previous run and issues a token.
//! 3. [`compute_layout`] returns a [`LayoutRun`] yielding one
//!    [`PositionFrame`] per tick until the [`Simulation`] converges.
//! 4. The host publishes frames to a [`PositionBoard`], which rejects frames
//!    of superseded runs.
//!
//! # Example
//!
//! ```
//! use lexibubble::{
//!     config::LayoutConfig,
//!     layout::{LayoutScheduler, NodeSet, compute_layout},
//! };
//! use lexibubble_core::{geometry::{Point, Size}, identifier::NodeId, node::Node};
//!
//! let nodes = NodeSet::from_nodes(
//!     Node::center(NodeId::new("happy")),
//!     [Node::synonym(NodeId::new("joyful"), 0.9).with_seed(Point::new(20.0, 15.0))],
//! );
//! let scheduler = LayoutScheduler::new();
//! let config = LayoutConfig::default().with_seed(1);
//!
//! let mut run = compute_layout(&nodes, Size::new(800.0, 600.0), scheduler.begin(), &config);
//! let frame = run.finish().unwrap();
//! assert_eq!(frame.position(NodeId::new("happy")), Some(Point::default()));
//! ```

mod body;
pub mod forces;
mod frame;
mod nodes;
mod run;
mod simulation;

pub use body::Body;
pub use frame::{PositionBoard, PositionFrame};
pub use nodes::{Entry, NodeSet};
pub use run::{CancellationToken, LayoutRun, LayoutScheduler, compute_layout};
pub use simulation::Simulation;
