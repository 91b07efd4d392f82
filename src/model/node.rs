//! Nodes in the topology catalog, and the two-level input hierarchy.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::probe::ProbeRef;

/// Opaque catalog index. Assigned once when the catalog is flattened;
/// every other component addresses nodes through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeIdx(pub u32);

impl NodeIdx {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A discoverable compute entity: an accelerator package or one of its
/// sub-tiles, addressed by catalog index.
///
/// Built once by [`NodeCatalog::build`](crate::catalog::NodeCatalog::build)
/// and immutable afterward. Sub-node containment is a read-only relation,
/// never an interconnect edge.
#[derive(Clone)]
pub struct Node {
    pub idx: NodeIdx,
    pub name: String,
    /// The package this node is a tile of, if any.
    pub owner: Option<NodeIdx>,
    /// Catalog indices of directly owned tiles.
    pub subnodes: SmallVec<[NodeIdx; 4]>,
    /// Capability objects that can confirm direct links from this node.
    pub probes: Vec<ProbeRef>,
}

impl Node {
    /// Whether `other` is a direct sub-node of this node.
    pub fn owns(&self, other: NodeIdx) -> bool {
        self.subnodes.contains(&other)
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("idx", &self.idx)
            .field("name", &self.name)
            .field("owner", &self.owner)
            .field("subnodes", &self.subnodes)
            .field("probes", &self.probes.len())
            .finish()
    }
}

/// A top-level accelerator package: the caller-facing input to catalog
/// construction. Tiles are flattened immediately after their package,
/// in input order.
#[derive(Clone, Default)]
pub struct Package {
    pub name: String,
    pub probes: Vec<ProbeRef>,
    pub tiles: Vec<Tile>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), probes: Vec::new(), tiles: Vec::new() }
    }

    pub fn with_probe(mut self, probe: ProbeRef) -> Self {
        self.probes.push(probe);
        self
    }

    pub fn with_tile(mut self, tile: Tile) -> Self {
        self.tiles.push(tile);
        self
    }
}

/// A sub-tile directly owned by a [`Package`].
#[derive(Clone, Default)]
pub struct Tile {
    pub name: String,
    pub probes: Vec<ProbeRef>,
}

impl Tile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), probes: Vec::new() }
    }

    pub fn with_probe(mut self, probe: ProbeRef) -> Self {
        self.probes.push(probe);
        self
    }
}
