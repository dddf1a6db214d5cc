//! Skills Module
//!
//! Markdown-based skill definitions with YAML frontmatter. Sources are
//! discovered on disk, parsed into records, and collected into the
//! per-session registry the resolver operates on.

pub mod format;
pub mod loader;
pub mod registry;
