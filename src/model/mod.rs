//! # Topology Model
//!
//! Clean DTOs for the interconnect topology: nodes, link properties,
//! direct and synthesized links, path chains.
//! These types cross every boundary: probe ↔ adjacency ↔ resolver ↔ user.
//!
//! Design rule: NO driver types, NO sysfs paths, NO wire formats here.
//! This module is pure data — no I/O, no state.

pub mod node;
pub mod link;
pub mod path;

pub use node::{Node, NodeIdx, Package, Tile};
pub use link::{
    DirectLink, Duplex, IndirectLink, LinkClass, LinkIdx, LinkProperties,
    BandwidthUnit, LatencyUnit, MAX_LINK_LABEL,
};
pub use path::PathChain;
