//! PathResolver — layered BFS over the adjacency index.
//!
//! For a non-adjacent (source, target) pair, find one path through
//! intermediate nodes. The search is an unweighted BFS with a secondary
//! exploration-order tie-break between the two hop classes: within one
//! layer, bridge discoveries are queued ahead of xlink discoveries. It
//! guarantees minimum hop count — not minimum aggregate latency and not
//! maximum aggregate bandwidth.

use std::collections::VecDeque;

use hashbrown::HashMap;
use tracing::debug;

use crate::adjacency::Adjacency;
use crate::model::{LinkClass, NodeIdx, PathChain};

/// Find one minimum-hop path from `source` to `target`, or `None` if the
/// target is unreachable.
///
/// Each invocation owns its parent map and frontier; the adjacency index
/// is only read. Nodes with no adjacency entries simply contribute no
/// discoveries and fold into ordinary termination.
pub fn resolve(adj: &Adjacency, source: NodeIdx, target: NodeIdx) -> Option<PathChain> {
    let mut came_from: HashMap<NodeIdx, NodeIdx> = HashMap::new();
    came_from.insert(source, source);

    let mut frontier: VecDeque<NodeIdx> = VecDeque::new();
    frontier.push_back(source);

    loop {
        let mut bridge_found: Vec<NodeIdx> = Vec::new();
        let mut xlink_found: Vec<NodeIdx> = Vec::new();

        // Drain the current layer completely before refilling.
        while let Some(current) = frontier.pop_front() {
            if current == target {
                return Some(PathChain::from_parents(&came_from, source, target));
            }

            for &(peer, link) in adj.entries(current) {
                if came_from.contains_key(&peer) {
                    continue;
                }
                came_from.insert(peer, current);
                match adj.props(link).class() {
                    LinkClass::Bridge => bridge_found.push(peer),
                    LinkClass::Xlink => xlink_found.push(peer),
                }
            }
        }

        if bridge_found.is_empty() && xlink_found.is_empty() {
            debug!(%source, %target, "target unreachable, frontier exhausted");
            return None;
        }

        // Bridge hops are explored before xlink hops within a layer.
        frontier.extend(bridge_found);
        frontier.extend(xlink_found);
    }
}
