//! Cycle Detector
//!
//! Full-graph scan enumerating cyclic dependency chains. Unlike the
//! resolver, this follows every skill edge (required and optional alike) and
//! restarts independently from each registered skill, so one underlying loop
//! can be reported once per entry point reachable into it. That duplication
//! is documented behavior and is not deduplicated here.

use std::collections::HashSet;

use crate::skills::registry::SkillRegistry;

/// Enumerate all cyclic chains reachable in the registry.
///
/// Each cycle is the ordered name sequence forming the loop, closed by
/// repeating the entry node (`["a", "b", "a"]`).
pub fn detect_cycles(registry: &SkillRegistry) -> Vec<Vec<String>> {
    let mut cycles = Vec::new();

    for name in registry.names() {
        let mut visited = HashSet::new();
        walk(registry, name, &mut visited, &[], &mut cycles);
    }

    cycles
}

/// DFS with an explicit path stack. The path is cloned per child frame so a
/// shared prefix cannot leak between sibling branches.
fn walk(
    registry: &SkillRegistry,
    name: &str,
    visited: &mut HashSet<String>,
    path: &[String],
    cycles: &mut Vec<Vec<String>>,
) {
    if let Some(first) = path.iter().position(|p| p == name) {
        let mut cycle: Vec<String> = path[first..].to_vec();
        cycle.push(name.to_string());
        cycles.push(cycle);
        return;
    }

    if !visited.insert(name.to_string()) {
        return;
    }

    let mut path = path.to_vec();
    path.push(name.to_string());

    if let Some(skill) = registry.get(name) {
        for dep in &skill.dependencies.skills {
            // Dangling edges are the validator's concern, not a cycle.
            if registry.contains(&dep.name) {
                walk(registry, &dep.name, visited, &path, cycles);
            }
        }
    }
}
