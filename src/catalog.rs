//! NodeCatalog — flattens the package/tile hierarchy into one indexed
//! sequence.
//!
//! Every other component addresses nodes through the catalog index: the
//! position of a node in the flattened sequence. Each package is followed
//! immediately by its tiles, in input order.

use std::ops::Index;

use smallvec::SmallVec;

use crate::model::{Node, NodeIdx, Package};

/// The flattened, zero-based node sequence. Build-once, read-only.
#[derive(Debug, Clone, Default)]
pub struct NodeCatalog {
    nodes: Vec<Node>,
}

impl NodeCatalog {
    /// Flatten packages and their tiles into the indexed catalog.
    ///
    /// An empty input yields an empty catalog, and empty discovery
    /// results downstream. Never fails.
    pub fn build(packages: Vec<Package>) -> Self {
        let mut nodes = Vec::new();

        for package in packages {
            let pkg_idx = NodeIdx(nodes.len() as u32);
            nodes.push(Node {
                idx: pkg_idx,
                name: package.name,
                owner: None,
                subnodes: SmallVec::new(),
                probes: package.probes,
            });

            let mut tile_idxs: SmallVec<[NodeIdx; 4]> = SmallVec::new();
            for tile in package.tiles {
                let idx = NodeIdx(nodes.len() as u32);
                tile_idxs.push(idx);
                nodes.push(Node {
                    idx,
                    name: tile.name,
                    owner: Some(pkg_idx),
                    subnodes: SmallVec::new(),
                    probes: tile.probes,
                });
            }
            nodes[pkg_idx.index()].subnodes = tile_idxs;
        }

        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, idx: NodeIdx) -> Option<&Node> {
        self.nodes.get(idx.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// All catalog indices, in order.
    pub fn indices(&self) -> impl Iterator<Item = NodeIdx> {
        (0..self.nodes.len() as u32).map(NodeIdx)
    }

    /// Whether one of the two nodes is the other's direct sub-node.
    /// Containment pairs are excluded from path resolution entirely.
    pub fn contains_pair(&self, a: NodeIdx, b: NodeIdx) -> bool {
        self[a].owns(b) || self[b].owns(a)
    }
}

impl Index<NodeIdx> for NodeCatalog {
    type Output = Node;

    fn index(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.index()]
    }
}
