//! Resolver Module
//!
//! The dependency resolution and validation engine: load-order computation,
//! full-graph cycle detection, per-skill validation, tool aggregation, and
//! graph export. Every operation is a self-contained synchronous traversal
//! over the immutable registry snapshot.

pub mod cycles;
pub mod graph;
pub mod order;
pub mod tools;
pub mod validate;
