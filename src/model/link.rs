//! Link properties, direct links, and synthesized indirect links.

use serde::{Deserialize, Serialize};

use super::NodeIdx;

/// Maximum length (bytes) of a link label, composed path labels included.
/// Longer labels are truncated, never rejected.
pub const MAX_LINK_LABEL: usize = 256;

/// Opaque index into the direct-link arena.
///
/// Adjacency entries reference link properties through this index rather
/// than by pointer, so entries issued early stay valid while the arena
/// keeps growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkIdx(pub u32);

impl LinkIdx {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for LinkIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two link-technology classes recognized by the aggregation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkClass {
    /// High-speed package-to-package interconnect (label prefix `XL`).
    Xlink,
    /// Package-internal fabric bridge between tiles (label prefix `BR`).
    Bridge,
}

impl LinkClass {
    /// Classify a link by its label prefix.
    ///
    /// # Panics
    ///
    /// Panics on a label matching neither class. Exactly two classes
    /// exist; silently misclassifying would corrupt the bandwidth and
    /// latency folds downstream, so this fails fast instead.
    pub fn classify(label: &str) -> Self {
        if label.starts_with("XL") {
            LinkClass::Xlink
        } else if label.starts_with("BR") {
            LinkClass::Bridge
        } else {
            panic!("unrecognized link class label: {label:?}");
        }
    }
}

/// Bandwidth unit tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BandwidthUnit {
    BytesPerNanosecond,
    Unknown,
}

/// Latency unit tag. `Unknown` marks synthesized paths whose hops mix
/// link classes and therefore cannot report a comparable latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatencyUnit {
    Nanoseconds,
    Unknown,
}

/// Duplexity tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Duplex {
    Full,
    Half,
}

/// Measured or synthesized characteristics of one link. Immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkProperties {
    /// Category/model label, e.g. `"XL4x16"`, or a hyphen-joined hop
    /// composition for synthesized links. Bounded by [`MAX_LINK_LABEL`].
    pub label: String,
    pub bandwidth: f64,
    pub bandwidth_unit: BandwidthUnit,
    pub latency: f64,
    pub latency_unit: LatencyUnit,
    pub duplex: Duplex,
}

impl LinkProperties {
    /// Measured link with the default units: bytes/ns bandwidth,
    /// nanosecond latency, full duplex.
    pub fn new(label: impl Into<String>, bandwidth: f64, latency: f64) -> Self {
        let mut label = label.into();
        truncate_label(&mut label);
        Self {
            label,
            bandwidth,
            bandwidth_unit: BandwidthUnit::BytesPerNanosecond,
            latency,
            latency_unit: LatencyUnit::Nanoseconds,
            duplex: Duplex::Full,
        }
    }

    pub fn with_duplex(mut self, duplex: Duplex) -> Self {
        self.duplex = duplex;
        self
    }

    /// The link's class, derived from its label.
    pub fn class(&self) -> LinkClass {
        LinkClass::classify(&self.label)
    }
}

/// A physically measured connection between two catalog nodes, reported
/// by one capability object. Multiple capabilities confirming the same
/// pair each yield their own `DirectLink`; none are deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectLink {
    pub a: NodeIdx,
    pub b: NodeIdx,
    pub props: LinkProperties,
}

/// A derived connection between two nodes with no direct link, computed
/// from one multi-hop path. Created once per reachable non-adjacent pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndirectLink {
    pub a: NodeIdx,
    pub b: NodeIdx,
    pub props: LinkProperties,
}

/// Truncate a label to [`MAX_LINK_LABEL`], respecting char boundaries.
pub(crate) fn truncate_label(label: &mut String) {
    if label.len() <= MAX_LINK_LABEL {
        return;
    }
    let mut cut = MAX_LINK_LABEL;
    while !label.is_char_boundary(cut) {
        cut -= 1;
    }
    label.truncate(cut);
}
