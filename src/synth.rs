//! EdgeSynthesizer — materializes one indirect link from a path chain.
//!
//! Walks the chain backward (target side first), resolving each hop's
//! properties from the adjacency index, and folds them into a single
//! synthesized [`IndirectLink`]:
//!
//! - the path label is the hyphen-joined hop labels in source→target
//!   order, truncated to [`MAX_LINK_LABEL`](crate::model::MAX_LINK_LABEL);
//! - xlink hops fold bandwidth into a running minimum and latency into a
//!   running sum;
//! - bridge hops fold into neither aggregate, and their presence discards
//!   the latency sum — a mixed-class path cannot report a comparable
//!   latency, so it gets latency 0 with the `Unknown` unit.

use tracing::debug;

use crate::adjacency::Adjacency;
use crate::model::{
    link::truncate_label, BandwidthUnit, Duplex, IndirectLink, LatencyUnit, LinkClass,
    LinkProperties, PathChain,
};

/// Synthesize the indirect link for a resolved chain.
///
/// Hops with more than one direct link between the same pair use the
/// first confirmed one, matching adjacency discovery order.
pub fn synthesize(adj: &Adjacency, chain: &PathChain) -> IndirectLink {
    let mut label = String::new();
    let mut bandwidth = f64::MAX;
    let mut latency_sum = 0.0;
    let mut crossed_bridge = false;

    for (from, to) in chain.hops().rev() {
        let props = adj
            .link_between(from, to)
            .expect("every chain hop is joined by a direct link");

        if label.is_empty() {
            label = props.label.clone();
        } else {
            label = format!("{}-{}", props.label, label);
        }

        match props.class() {
            LinkClass::Xlink => {
                bandwidth = bandwidth.min(props.bandwidth);
                latency_sum += props.latency;
            }
            LinkClass::Bridge => crossed_bridge = true,
        }
    }
    truncate_label(&mut label);

    let (latency, latency_unit) = if crossed_bridge {
        (0.0, LatencyUnit::Unknown)
    } else {
        (latency_sum, LatencyUnit::Nanoseconds)
    };

    debug!(
        source = %chain.source(),
        target = %chain.target(),
        hops = chain.len(),
        %label,
        "synthesized indirect link",
    );

    IndirectLink {
        a: chain.source(),
        b: chain.target(),
        props: LinkProperties {
            label,
            bandwidth,
            bandwidth_unit: BandwidthUnit::BytesPerNanosecond,
            latency,
            latency_unit,
            duplex: Duplex::Full,
        },
    }
}
