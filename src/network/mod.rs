/*
 * This module defines the merged, protocol-agnostic graph format consumed by
 * the renderers, along with node/edge de-duplication and display ordering.
 */

pub mod edge;
pub mod graph;
pub mod node;

pub use graph::TopologyGraph;
