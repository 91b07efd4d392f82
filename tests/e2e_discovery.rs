//! End-to-end discovery scenarios.
//!
//! Each test builds a package hierarchy, wires a `TableProbe` with a
//! known link table, runs a full discovery pass, and checks the two
//! result collections.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use fabric_topo::{
    LatencyUnit, LinkProbe, LinkProperties, NodeIdx, Package, TableProbe, Tile,
    TopologyEngine, TopologyReport,
};

// ============================================================================
// Helper: engine over named packages sharing one probe.
// ============================================================================

fn engine_with(probe: Arc<dyn LinkProbe>, names: &[&str]) -> TopologyEngine {
    TopologyEngine::new(
        names
            .iter()
            .map(|name| Package::new(*name).with_probe(probe.clone()))
            .collect(),
    )
}

/// Linear chain gpu0 –XL– gpu1 –XL– gpu2.
fn linear_chain() -> TopologyEngine {
    let probe: Arc<dyn LinkProbe> = Arc::new(
        TableProbe::new()
            .with_link("gpu0", "gpu1", LinkProperties::new("XL", 10.0, 1.0))
            .with_link("gpu1", "gpu2", LinkProperties::new("XL", 8.0, 2.0)),
    );
    engine_with(probe, &["gpu0", "gpu1", "gpu2"])
}

// ============================================================================
// 1. Three-node chain: two direct links, one synthesized
// ============================================================================

#[test]
fn test_three_node_chain() {
    let report = linear_chain().discover().unwrap();

    assert_eq!(report.direct.len(), 2);
    assert_eq!(report.indirect.len(), 1);

    let synth = &report.indirect[0];
    assert_eq!((synth.a, synth.b), (NodeIdx(0), NodeIdx(2)));
    assert_eq!(synth.props.bandwidth, 8.0);
    assert_eq!(synth.props.latency, 3.0);
    assert_eq!(synth.props.latency_unit, LatencyUnit::Nanoseconds);
    assert_eq!(synth.props.label, "XL-XL");
}

// ============================================================================
// 2. Same chain, second hop is a bridge
// ============================================================================

#[test]
fn test_bridge_hop_yields_unknown_latency() {
    let probe: Arc<dyn LinkProbe> = Arc::new(
        TableProbe::new()
            .with_link("gpu0", "gpu1", LinkProperties::new("XL", 10.0, 1.0))
            .with_link("gpu1", "gpu2", LinkProperties::new("BR", 8.0, 2.0)),
    );
    let report = engine_with(probe, &["gpu0", "gpu1", "gpu2"]).discover().unwrap();

    let synth = &report.indirect[0];
    // Only the xlink hop folds into the bandwidth minimum.
    assert_eq!(synth.props.bandwidth, 10.0);
    assert_eq!(synth.props.latency, 0.0);
    assert_eq!(synth.props.latency_unit, LatencyUnit::Unknown);
}

// ============================================================================
// 3. Package/tile containment is neither direct nor synthesized
// ============================================================================

#[test]
fn test_unlinked_tile_pair_is_excluded() {
    let probe: Arc<dyn LinkProbe> = Arc::new(TableProbe::new());
    let engine = TopologyEngine::new(vec![
        Package::new("gpu0")
            .with_probe(probe.clone())
            .with_tile(Tile::new("gpu0.t0").with_probe(probe)),
    ]);
    let report = engine.discover().unwrap();

    assert!(report.direct.is_empty());
    assert!(report.indirect.is_empty());
    assert!(!report.is_reachable(NodeIdx(0), NodeIdx(1)));
}

// ============================================================================
// 4. Tiles do participate in cross-package paths
// ============================================================================

#[test]
fn test_tiles_bridge_across_packages() {
    // Two two-tile packages: bridges inside each package, one xlink
    // between gpu0.t1 and gpu1.t0. Everything else is synthesized.
    let probe: Arc<dyn LinkProbe> = Arc::new(
        TableProbe::new()
            .with_link("gpu0.t0", "gpu0.t1", LinkProperties::new("BR", 4.0, 0.5))
            .with_link("gpu1.t0", "gpu1.t1", LinkProperties::new("BR", 4.0, 0.5))
            .with_link("gpu0.t1", "gpu1.t0", LinkProperties::new("XL", 10.0, 1.0)),
    );
    let engine = TopologyEngine::new(vec![
        Package::new("gpu0")
            .with_probe(probe.clone())
            .with_tile(Tile::new("gpu0.t0").with_probe(probe.clone()))
            .with_tile(Tile::new("gpu0.t1").with_probe(probe.clone())),
        Package::new("gpu1")
            .with_probe(probe.clone())
            .with_tile(Tile::new("gpu1.t0").with_probe(probe.clone()))
            .with_tile(Tile::new("gpu1.t1").with_probe(probe)),
    ]);
    let report = engine.discover().unwrap();

    assert_eq!(report.direct.len(), 3);

    // gpu0.t0 (idx 1) reaches gpu1.t1 (idx 5) through BR-XL-BR.
    let cross = report.link_between(NodeIdx(1), NodeIdx(5)).unwrap();
    assert_eq!(cross.label, "BR-XL-BR");
    assert_eq!(cross.latency_unit, LatencyUnit::Unknown);
}

// ============================================================================
// 5. Disconnected node appears in no synthesized link
// ============================================================================

#[test]
fn test_disconnected_node_is_omitted() {
    let probe: Arc<dyn LinkProbe> = Arc::new(
        TableProbe::new()
            .with_link("gpu0", "gpu1", LinkProperties::new("XL", 10.0, 1.0))
            .with_link("gpu1", "gpu2", LinkProperties::new("XL", 8.0, 2.0)),
    );
    let report = engine_with(probe, &["gpu0", "gpu1", "gpu2", "gpu3"])
        .discover()
        .unwrap();

    let island = NodeIdx(3);
    assert!(report.direct.iter().all(|l| l.a != island && l.b != island));
    assert!(report.indirect.iter().all(|l| l.a != island && l.b != island));
    // The connected component is still fully synthesized.
    assert_eq!(report.indirect.len(), 1);
}

// ============================================================================
// 6. One synthesized link per unordered pair
// ============================================================================

#[test]
fn test_one_indirect_link_per_pair() {
    let report = linear_chain().discover().unwrap();

    let pairs: Vec<(NodeIdx, NodeIdx)> =
        report.indirect.iter().map(|l| (l.a, l.b)).collect();
    assert_eq!(pairs, vec![(NodeIdx(0), NodeIdx(2))]);
}

// ============================================================================
// 7. Idempotence: two passes, identical reports
// ============================================================================

#[test]
fn test_discovery_is_idempotent() {
    let engine = linear_chain();
    let first = engine.discover().unwrap();
    let second = engine.discover().unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// 8. Empty input, empty report
// ============================================================================

#[test]
fn test_empty_input() {
    let engine = TopologyEngine::new(Vec::new());
    let report = engine.discover().unwrap();
    assert_eq!(report, TopologyReport { direct: Vec::new(), indirect: Vec::new() });
}

// ============================================================================
// 9. Report survives a serde round-trip
// ============================================================================

#[test]
fn test_report_roundtrips_through_json() {
    let report = linear_chain().discover().unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let restored: TopologyReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, restored);
}

// ============================================================================
// 10. Probe failure surfaces as an error
// ============================================================================

#[test]
fn test_probe_failure_aborts_discovery() {
    struct BrokenProbe;
    impl LinkProbe for BrokenProbe {
        fn direct_link(
            &self,
            _: &fabric_topo::Node,
            _: &fabric_topo::Node,
        ) -> fabric_topo::Result<Option<LinkProperties>> {
            Err(fabric_topo::Error::Probe("device fell off the bus".into()))
        }
    }

    let probe: Arc<dyn LinkProbe> = Arc::new(BrokenProbe);
    let err = engine_with(probe, &["gpu0", "gpu1"]).discover().unwrap_err();
    assert!(err.to_string().contains("device fell off the bus"));
}
