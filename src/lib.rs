//! # fabric-topo — Accelerator Interconnect Topology Discovery
//!
//! Given a set of accelerator packages and their sub-tiles, each able to
//! report whether it has a direct physical interconnect to another node,
//! this crate produces the set of directly measured links plus one
//! synthesized indirect link for every node pair that is only reachable
//! through intermediates.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: [`LinkProbe`] is the contract between the engine
//!    and whatever measures links — the engine never measures anything
//!    itself
//! 2. **Clean DTOs**: `Node`, `LinkProperties`, `DirectLink`,
//!    `IndirectLink` cross all boundaries
//! 3. **Build-once data**: catalog and adjacency are read-only after
//!    construction; each pair resolution owns its own scratch state
//! 4. **Stable indices**: nodes and links are addressed by arena index,
//!    never by pointer into a growing collection
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use fabric_topo::{LinkProperties, Package, TableProbe, TopologyEngine};
//!
//! # fn example() -> fabric_topo::Result<()> {
//! let probe = Arc::new(
//!     TableProbe::new()
//!         .with_link("gpu0", "gpu1", LinkProperties::new("XL", 10.0, 1.0))
//!         .with_link("gpu1", "gpu2", LinkProperties::new("XL", 8.0, 2.0)),
//! );
//!
//! let engine = TopologyEngine::new(vec![
//!     Package::new("gpu0").with_probe(probe.clone()),
//!     Package::new("gpu1").with_probe(probe.clone()),
//!     Package::new("gpu2").with_probe(probe),
//! ]);
//!
//! let report = engine.discover()?;
//! assert_eq!(report.direct.len(), 2);   // gpu0–gpu1, gpu1–gpu2
//! assert_eq!(report.indirect.len(), 1); // gpu0–gpu2, synthesized
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod probe;
pub mod catalog;
pub mod adjacency;
pub mod resolve;
pub mod synth;

use tracing::info;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    BandwidthUnit, DirectLink, Duplex, IndirectLink, LatencyUnit, LinkClass, LinkIdx,
    LinkProperties, Node, NodeIdx, Package, PathChain, Tile, MAX_LINK_LABEL,
};

// ============================================================================
// Re-exports: Probes
// ============================================================================

pub use probe::{LinkProbe, ProbeRef, TableProbe};

// ============================================================================
// Re-exports: Engine stages
// ============================================================================

pub use adjacency::Adjacency;
pub use catalog::NodeCatalog;

// ============================================================================
// Top-level engine handle
// ============================================================================

/// The primary entry point. Owns the flattened node catalog and runs
/// discovery passes over it.
pub struct TopologyEngine {
    catalog: NodeCatalog,
}

impl TopologyEngine {
    /// Flatten the package hierarchy into a catalog and wrap it in an
    /// engine. Catalog construction never fails; an empty input yields
    /// empty reports.
    pub fn new(packages: Vec<Package>) -> Self {
        Self { catalog: NodeCatalog::build(packages) }
    }

    pub fn catalog(&self) -> &NodeCatalog {
        &self.catalog
    }

    /// Run one discovery pass: probe every pair, then resolve and
    /// synthesize every reachable non-adjacent pair.
    ///
    /// The pass is sequential and deterministic — the same probe answers
    /// always produce the same report, order included. Each unordered
    /// non-adjacent pair is resolved once, from its lower-indexed side.
    pub fn discover(&self) -> Result<TopologyReport> {
        let adj = Adjacency::build(&self.catalog)?;

        let mut indirect = Vec::new();
        for source in self.catalog.indices() {
            for &target in adj.non_adjacent(source) {
                if target <= source {
                    continue;
                }
                if let Some(chain) = resolve::resolve(&adj, source, target) {
                    indirect.push(synth::synthesize(&adj, &chain));
                }
            }
        }

        info!(
            nodes = self.catalog.len(),
            direct = adj.link_count(),
            indirect = indirect.len(),
            "discovery pass complete",
        );

        Ok(TopologyReport { direct: adj.into_links(), indirect })
    }
}

// ============================================================================
// Discovery report
// ============================================================================

/// The two result collections of one discovery pass.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TopologyReport {
    /// Directly measured links, one per confirming capability, in probe
    /// order.
    pub direct: Vec<DirectLink>,
    /// Synthesized links, one per reachable non-adjacent pair, in
    /// catalog order of their lower endpoint.
    pub indirect: Vec<IndirectLink>,
}

impl TopologyReport {
    /// Properties of the first link (direct preferred, then synthesized)
    /// joining the pair, in either endpoint order.
    pub fn link_between(&self, a: NodeIdx, b: NodeIdx) -> Option<&LinkProperties> {
        let joins = |x: NodeIdx, y: NodeIdx| (x == a && y == b) || (x == b && y == a);
        self.direct
            .iter()
            .find(|link| joins(link.a, link.b))
            .map(|link| &link.props)
            .or_else(|| {
                self.indirect
                    .iter()
                    .find(|link| joins(link.a, link.b))
                    .map(|link| &link.props)
            })
    }

    /// Whether the pair is connected at all, directly or through
    /// intermediates.
    pub fn is_reachable(&self, a: NodeIdx, b: NodeIdx) -> bool {
        self.link_between(a, b).is_some()
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A probe backend failed mid-pass. Probes answering "no link" return
    /// `Ok(None)`; this is for genuine backend failures (lost driver
    /// handle, ioctl error).
    #[error("probe error: {0}")]
    Probe(String),
}

pub type Result<T> = std::result::Result<T, Error>;
