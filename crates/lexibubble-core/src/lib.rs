//! Lexibubble Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Lexibubble
//! crates. It includes:
//!
//! - **Identifiers**: Interned node identifiers ([`identifier::NodeId`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes and bounds ([`geometry`] module)
//! - **Words**: The analysis and comparison data model ([`word`] module)
//! - **Nodes**: The unit the layout engine positions ([`node`] module)

pub mod color;
pub mod geometry;
pub mod identifier;
pub mod node;
pub mod word;
