/*!
Topology module

This module wraps parsed neighbor records into per-device snapshots and
manages the collection of snapshots the graph is built from.

Structure:
- `snapshot`: `TopologySnapshot` (one device's view of its neighbors), the
  assembler, and the `discover` invocation boundary.
- `store`: `SnapshotStore`, an insertion-ordered mapping from device name to
  snapshot, loaded from `topology_<device>.json` files.

Re-exports the two types callers usually need.
*/

pub mod snapshot;
pub mod store;

pub use snapshot::TopologySnapshot;
pub use store::SnapshotStore;
