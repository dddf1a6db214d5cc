//! Dependency Resolver
//!
//! Computes a topological load order for one skill over its required and
//! auto-load edges. Cycles and dangling references degrade locally: the
//! offending branch is pruned and recorded as a message while sibling
//! branches still resolve.

use std::collections::HashSet;

use crate::skills::registry::SkillRegistry;

/// Resolve the load order for `name`.
///
/// Returns `(order, missing)`: `order` lists skill names with every
/// required/auto-load dependency placed before its dependent (post-order
/// DFS); `missing` collects circular-dependency and not-found messages in
/// the order they were encountered. Optional edges that are not auto-load
/// are ignored for ordering.
pub fn resolve_order(registry: &SkillRegistry, name: &str) -> (Vec<String>, Vec<String>) {
    let mut resolved = HashSet::new();
    let mut on_stack = HashSet::new();
    let mut order = Vec::new();
    let mut missing = Vec::new();

    visit(
        registry,
        name,
        &mut resolved,
        &mut on_stack,
        &mut order,
        &mut missing,
    );

    (order, missing)
}

/// One DFS frame. `resolved` holds fully processed names whose position in
/// `order` is final; `on_stack` holds the names currently being expanded and
/// detects cycles on the active path.
fn visit(
    registry: &SkillRegistry,
    name: &str,
    resolved: &mut HashSet<String>,
    on_stack: &mut HashSet<String>,
    order: &mut Vec<String>,
    missing: &mut Vec<String>,
) {
    if on_stack.contains(name) {
        missing.push(format!("Circular dependency detected: {}", name));
        return;
    }

    if resolved.contains(name) {
        return;
    }

    let skill = match registry.get(name) {
        Some(s) => s,
        None => {
            missing.push(format!("Skill not found: {}", name));
            return;
        }
    };

    on_stack.insert(name.to_string());

    for dep in &skill.dependencies.skills {
        if dep.required || dep.auto_load {
            visit(registry, &dep.name, resolved, on_stack, order, missing);
        }
    }

    on_stack.remove(name);
    resolved.insert(name.to_string());
    order.push(name.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SkillDependency, SkillRecord};

    fn skill_with_deps(name: &str, deps: &[(&str, bool, bool)]) -> SkillRecord {
        let mut record = SkillRecord::named(name);
        for (dep, required, auto_load) in deps {
            record.dependencies.skills.push(SkillDependency {
                name: dep.to_string(),
                required: *required,
                auto_load: *auto_load,
                reason: String::new(),
            });
        }
        record
    }

    #[test]
    fn test_no_dependencies() {
        let registry = SkillRegistry::from_records(vec![SkillRecord::named("solo")]);
        let (order, missing) = resolve_order(&registry, "solo");
        assert_eq!(order, vec!["solo"]);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_chain_resolves_dependencies_first() {
        let registry = SkillRegistry::from_records(vec![
            skill_with_deps("a", &[("b", true, false)]),
            skill_with_deps("b", &[("c", true, false)]),
            SkillRecord::named("c"),
        ]);
        let (order, missing) = resolve_order(&registry, "a");
        assert_eq!(order, vec!["c", "b", "a"]);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_diamond_places_shared_dependency_once() {
        let registry = SkillRegistry::from_records(vec![
            skill_with_deps("a", &[("b", true, false), ("c", true, false)]),
            skill_with_deps("b", &[("d", true, false)]),
            skill_with_deps("c", &[("d", true, false)]),
            SkillRecord::named("d"),
        ]);
        let (order, missing) = resolve_order(&registry, "a");

        assert!(missing.is_empty());
        assert_eq!(order.iter().filter(|n| *n == "d").count(), 1);
        let pos = |n: &str| order.iter().position(|x| x == n).unwrap();
        assert!(pos("d") < pos("b"));
        assert!(pos("d") < pos("c"));
        assert!(pos("b") < pos("a"));
        assert!(pos("c") < pos("a"));
        assert_eq!(order.last().unwrap(), "a");
    }

    #[test]
    fn test_optional_non_auto_edges_are_ignored() {
        let registry = SkillRegistry::from_records(vec![
            skill_with_deps("a", &[("opt", false, false), ("auto", false, true)]),
            SkillRecord::named("opt"),
            SkillRecord::named("auto"),
        ]);
        let (order, missing) = resolve_order(&registry, "a");
        assert_eq!(order, vec!["auto", "a"]);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_dangling_reference() {
        let registry =
            SkillRegistry::from_records(vec![skill_with_deps("a", &[("c", true, false)])]);
        let (order, missing) = resolve_order(&registry, "a");
        assert_eq!(order, vec!["a"]);
        assert_eq!(missing, vec!["Skill not found: c"]);
    }

    #[test]
    fn test_self_dependency_terminates() {
        let registry =
            SkillRegistry::from_records(vec![skill_with_deps("a", &[("a", true, false)])]);
        let (order, missing) = resolve_order(&registry, "a");
        assert_eq!(order, vec!["a"]);
        assert_eq!(missing, vec!["Circular dependency detected: a"]);
    }

    #[test]
    fn test_cycle_prunes_branch_but_siblings_resolve() {
        let registry = SkillRegistry::from_records(vec![
            skill_with_deps("a", &[("b", true, false), ("ok", true, false)]),
            skill_with_deps("b", &[("a", true, false)]),
            SkillRecord::named("ok"),
        ]);
        let (order, missing) = resolve_order(&registry, "a");

        // The cyclic edge back to "a" is pruned; "b", "ok", and "a" still place.
        assert_eq!(order, vec!["b", "ok", "a"]);
        assert_eq!(missing, vec!["Circular dependency detected: a"]);
    }

    #[test]
    fn test_unknown_root() {
        let registry = SkillRegistry::from_records(vec![]);
        let (order, missing) = resolve_order(&registry, "ghost");
        assert!(order.is_empty());
        assert_eq!(missing, vec!["Skill not found: ghost"]);
    }
}
