//! Skilldep -- Skill Dependency Resolver and Validator
//!
//! Turns a directory of independently declared skill records into a
//! validated dependency graph: deterministic load orders, cycle detection,
//! and aggregated tool manifests across auto-load edges.

pub mod config;
pub mod resolver;
pub mod skills;
pub mod types;
