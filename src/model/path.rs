//! PathChain — the node sequence a synthesized link is derived from.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::NodeIdx;

/// An ordered sequence of catalog indices from a source node to a target
/// node, each consecutive pair joined by a direct link. Transient:
/// computed by the resolver and consumed by the synthesizer within one
/// pair resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathChain {
    /// Nodes along the path, source first. Never empty.
    pub nodes: Vec<NodeIdx>,
}

impl PathChain {
    /// Reconstruct the source→target chain from a parent-pointer map in
    /// which the source maps to itself.
    pub fn from_parents(parents: &HashMap<NodeIdx, NodeIdx>, source: NodeIdx, target: NodeIdx) -> Self {
        let mut nodes = vec![target];
        let mut current = target;
        while current != source {
            current = *parents
                .get(&current)
                .expect("parent chain always reaches the source");
            nodes.push(current);
        }
        nodes.reverse();
        Self { nodes }
    }

    pub fn source(&self) -> NodeIdx {
        *self.nodes.first().expect("PathChain always has at least one node")
    }

    pub fn target(&self) -> NodeIdx {
        *self.nodes.last().expect("PathChain always has at least one node")
    }

    /// Number of hops (one less than the node count).
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consecutive `(from, to)` hop pairs, source side first.
    pub fn hops(&self) -> impl DoubleEndedIterator<Item = (NodeIdx, NodeIdx)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }
}
