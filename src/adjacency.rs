//! AdjacencyBuilder — probes every node pair and splits the result into
//! direct links and non-adjacent candidates.
//!
//! Direct links live in an arena (`Vec<DirectLink>`); adjacency entries
//! reference them by stable [`LinkIdx`] so entries issued early stay
//! valid while later pairs keep appending. Entries and non-adjacent sets
//! are plain vectors indexed by catalog position, which keeps iteration
//! deterministic — the same probe answers always produce the same output
//! order.

use smallvec::SmallVec;
use tracing::debug;

use crate::catalog::NodeCatalog;
use crate::model::{DirectLink, LinkIdx, LinkProperties, NodeIdx};
use crate::Result;

/// One entry under a node: a confirmed peer and the arena index of the
/// link joining them.
pub type AdjEntry = (NodeIdx, LinkIdx);

/// The probed topology: direct-link arena, symmetric adjacency index,
/// and the symmetric non-adjacent sets. Build-once, read-only.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    links: Vec<DirectLink>,
    entries: Vec<SmallVec<[AdjEntry; 8]>>,
    non_adjacent: Vec<Vec<NodeIdx>>,
}

impl Adjacency {
    /// Probe every unordered pair of catalog indices and classify it.
    ///
    /// For a pair (i, j) with i < j, each capability attached to node i
    /// is asked for a direct link to node j. Every confirming capability
    /// yields one [`DirectLink`] plus an adjacency entry under both
    /// endpoints. A pair no capability confirms is recorded as
    /// non-adjacent under both endpoints — unless one node is the
    /// other's sub-node, in which case the pair is dropped entirely.
    ///
    /// Probe errors abort the pass.
    pub fn build(catalog: &NodeCatalog) -> Result<Self> {
        let n = catalog.len();
        let mut adjacency = Self {
            links: Vec::new(),
            entries: vec![SmallVec::new(); n],
            non_adjacent: vec![Vec::new(); n],
        };

        for i in catalog.indices() {
            for j in catalog.indices().skip(i.index() + 1) {
                let confirmed_before = adjacency.links.len();

                for probe in &catalog[i].probes {
                    if let Some(props) = probe.direct_link(&catalog[i], &catalog[j])? {
                        debug!(a = %i, b = %j, label = %props.label, "direct link confirmed");
                        adjacency.push_link(i, j, props);
                    }
                }

                if adjacency.links.len() == confirmed_before && !catalog.contains_pair(i, j) {
                    adjacency.non_adjacent[i.index()].push(j);
                    adjacency.non_adjacent[j.index()].push(i);
                }
            }
        }

        Ok(adjacency)
    }

    fn push_link(&mut self, a: NodeIdx, b: NodeIdx, props: LinkProperties) {
        let idx = LinkIdx(self.links.len() as u32);
        self.entries[a.index()].push((b, idx));
        self.entries[b.index()].push((a, idx));
        self.links.push(DirectLink { a, b, props });
    }

    /// Confirmed peers of a node, in discovery order.
    pub fn entries(&self, node: NodeIdx) -> &[AdjEntry] {
        &self.entries[node.index()]
    }

    /// Peers with no direct link to `node`, in discovery order.
    pub fn non_adjacent(&self, node: NodeIdx) -> &[NodeIdx] {
        &self.non_adjacent[node.index()]
    }

    pub fn link(&self, idx: LinkIdx) -> &DirectLink {
        &self.links[idx.index()]
    }

    pub fn props(&self, idx: LinkIdx) -> &LinkProperties {
        &self.links[idx.index()].props
    }

    /// Properties of the first confirmed link between the pair, if any.
    pub fn link_between(&self, a: NodeIdx, b: NodeIdx) -> Option<&LinkProperties> {
        self.entries(a)
            .iter()
            .find(|(peer, _)| *peer == b)
            .map(|&(_, idx)| self.props(idx))
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Consume the index, keeping only the direct-link arena.
    pub fn into_links(self) -> Vec<DirectLink> {
        self.links
    }
}
