//! Graph Exporter
//!
//! Renders the registry's dependency edges either as a Mermaid directed-edge
//! diagram or as a structured adjacency listing. The graph is built as an
//! explicit value first and rendered by pure functions, independent of any
//! resolution result.

use serde::Serialize;
use serde_json::json;

use crate::skills::registry::SkillRegistry;

/// One styled dependency edge: `from` is the dependency, `to` the dependent.
#[derive(Clone, Debug, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub required: bool,
    pub auto_load: bool,
}

/// The registry's dependency relation as plain data.
///
/// Only edges whose target exists in the registry are included; dangling
/// references are a validation finding, not a drawable edge.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DependencyGraph {
    pub edges: Vec<GraphEdge>,
}

/// Collect all drawable skill edges from the registry.
pub fn build_graph(registry: &SkillRegistry) -> DependencyGraph {
    let mut edges = Vec::new();

    for (name, skill) in registry.iter() {
        for dep in &skill.dependencies.skills {
            if registry.contains(&dep.name) {
                edges.push(GraphEdge {
                    from: dep.name.clone(),
                    to: name.to_string(),
                    required: dep.required,
                    auto_load: dep.auto_load,
                });
            }
        }
    }

    DependencyGraph { edges }
}

/// Render a graph as a Mermaid `graph TD` diagram.
///
/// Required edges are solid (`-->|required|`), optional edges dashed
/// (`-.->|optional|`), auto-load edges annotated with ` (auto)`. Hyphens in
/// names are mapped to underscores for Mermaid node identifiers.
pub fn render_mermaid(graph: &DependencyGraph) -> String {
    let mut lines = vec!["graph TD".to_string()];

    for edge in &graph.edges {
        let arrow = if edge.required { " -->|" } else { " -.->|" };
        let label = if edge.required { "required|" } else { "optional|" };
        let auto = if edge.auto_load { " (auto)" } else { "" };
        lines.push(format!(
            "    {}{}{}{} {}",
            mermaid_id(&edge.from),
            arrow,
            label,
            auto,
            mermaid_id(&edge.to),
        ));
    }

    lines.join("\n")
}

fn mermaid_id(name: &str) -> String {
    name.replace('-', "_")
}

/// Structured adjacency listing: each skill mapped to the names of all its
/// skill dependencies (dangling ones included) and its own tool names.
pub fn adjacency_listing(registry: &SkillRegistry) -> serde_json::Value {
    let mut listing = serde_json::Map::new();

    for (name, skill) in registry.iter() {
        let dependencies: Vec<&str> = skill
            .dependencies
            .skills
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        let tools: Vec<&str> = skill.tools.iter().map(|t| t.name.as_str()).collect();

        listing.insert(
            name.to_string(),
            json!({ "dependencies": dependencies, "tools": tools }),
        );
    }

    serde_json::Value::Object(listing)
}
