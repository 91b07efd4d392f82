//! In-memory table probe.
//!
//! This is the reference implementation of `LinkProbe`. Links are looked
//! up by node-name pair in a symmetric table populated up front.
//!
//! Use this probe for:
//! - Testing the catalog, adjacency builder, resolver, and synthesizer
//! - Embedding the engine with a topology known ahead of time
//! - Validating correctness before wiring in a driver-backed probe

use hashbrown::HashMap;

use crate::model::{LinkProperties, Node};
use crate::Result;
use super::LinkProbe;

/// Symmetric pair table keyed by node names. Never errors.
#[derive(Debug, Clone, Default)]
pub struct TableProbe {
    links: HashMap<(String, String), LinkProperties>,
}

impl TableProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a link between the named nodes. The table is unordered:
    /// both query directions see the same properties.
    pub fn insert(&mut self, a: impl Into<String>, b: impl Into<String>, props: LinkProperties) {
        self.links.insert(Self::key(a.into(), b.into()), props);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_link(
        mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        props: LinkProperties,
    ) -> Self {
        self.insert(a, b, props);
        self
    }

    fn key(a: String, b: String) -> (String, String) {
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl LinkProbe for TableProbe {
    fn direct_link(&self, from: &Node, to: &Node) -> Result<Option<LinkProperties>> {
        let key = Self::key(from.name.clone(), to.name.clone());
        Ok(self.links.get(&key).cloned())
    }
}
