//! # Link Probe Trait
//!
//! This is THE contract between the discovery engine and whatever can
//! actually measure a link: a driver binding, a sysfs reader, a fixture
//! table. The engine never measures links itself and is agnostic to how
//! many or which concrete backends exist.
//!
//! ## Implementations
//!
//! | Probe | Module | Description |
//! |-------|--------|-------------|
//! | `TableProbe` | `table` | In-memory pair table for testing/embedding |

pub mod table;

use std::sync::Arc;

use crate::model::{LinkProperties, Node};
use crate::Result;

pub use table::TableProbe;

/// Shared handle to a probe backend, as attached to catalog nodes.
pub type ProbeRef = Arc<dyn LinkProbe>;

/// A capability object that can answer "is there a direct physical link
/// from this node to that node, and with what characteristics".
///
/// Contract: side-effect-free, non-blocking, and consistent — the same
/// pair must get the same answer for the whole of one discovery pass.
pub trait LinkProbe: Send + Sync {
    /// Report the direct link from `from` to `to`, if this capability
    /// can confirm one. `Ok(None)` means "no link that I can see", which
    /// is an ordinary answer, not an error.
    fn direct_link(&self, from: &Node, to: &Node) -> Result<Option<LinkProperties>>;
}
