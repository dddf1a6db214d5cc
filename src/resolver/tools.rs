//! Tool Aggregator
//!
//! Assembles the combined tool set for a skill by walking its auto-load
//! dependency edges, and builds the lookup manifest consumed by agents.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::skills::registry::SkillRegistry;
use crate::types::ToolDefinition;

/// Aggregated tool listing for one skill plus a name/alias lookup index.
#[derive(Clone, Debug, Serialize)]
pub struct ToolManifest {
    pub skill: String,
    pub tools: Vec<ToolDefinition>,
    pub tool_index: BTreeMap<String, ToolDefinition>,
}

/// All tools available to `name`, including those contributed by auto-load
/// dependencies.
///
/// Depth-first over `auto_load` edges only (the `required` flag does not
/// matter here), each skill visited at most once, dependency tools appended
/// before the skill's own, in declaration order. An unknown name yields an
/// empty list.
pub fn tools_for_skill(registry: &SkillRegistry, name: &str) -> Vec<ToolDefinition> {
    let mut collected = HashSet::new();
    let mut tools = Vec::new();
    collect(registry, name, &mut collected, &mut tools);
    tools
}

fn collect(
    registry: &SkillRegistry,
    name: &str,
    collected: &mut HashSet<String>,
    tools: &mut Vec<ToolDefinition>,
) {
    if collected.contains(name) {
        return;
    }
    let skill = match registry.get(name) {
        Some(s) => s,
        None => return,
    };
    collected.insert(name.to_string());

    for dep in &skill.dependencies.skills {
        if dep.auto_load {
            collect(registry, &dep.name, collected, tools);
        }
    }

    tools.extend(skill.tools.iter().cloned());
}

/// Build the structured manifest for `name`.
///
/// `tool_index` maps every tool's name and every one of its aliases to that
/// tool definition. Colliding keys resolve to whichever tool was traversed
/// last (last-write-wins, not an error).
pub fn build_manifest(registry: &SkillRegistry, name: &str) -> ToolManifest {
    let tools = tools_for_skill(registry, name);

    let mut tool_index = BTreeMap::new();
    for tool in &tools {
        tool_index.insert(tool.name.clone(), tool.clone());
        for alias in &tool.aliases {
            tool_index.insert(alias.clone(), tool.clone());
        }
    }

    ToolManifest {
        skill: name.to_string(),
        tools,
        tool_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SkillDependency, SkillRecord, ToolDefinition};

    fn auto_edge(name: &str) -> SkillDependency {
        SkillDependency {
            name: name.to_string(),
            required: false,
            auto_load: true,
            reason: String::new(),
        }
    }

    fn skill_with_tool(name: &str, tool: &str) -> SkillRecord {
        let mut record = SkillRecord::named(name);
        record.tools.push(ToolDefinition::named(tool, "cli"));
        record
    }

    #[test]
    fn test_auto_load_chain_orders_dependencies_first() {
        let mut a = skill_with_tool("a", "tool-a");
        a.dependencies.skills.push(auto_edge("b"));
        let mut b = skill_with_tool("b", "tool-b");
        b.dependencies.skills.push(auto_edge("c"));
        let c = skill_with_tool("c", "tool-c");

        let registry = SkillRegistry::from_records(vec![a, b, c]);
        let tools = tools_for_skill(&registry, "a");
        let names: Vec<&str> = tools
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["tool-c", "tool-b", "tool-a"]);
    }

    #[test]
    fn test_skill_reachable_twice_contributes_once() {
        let mut a = skill_with_tool("a", "tool-a");
        a.dependencies.skills.push(auto_edge("b"));
        a.dependencies.skills.push(auto_edge("c"));
        let mut b = skill_with_tool("b", "tool-b");
        b.dependencies.skills.push(auto_edge("shared"));
        let mut c = skill_with_tool("c", "tool-c");
        c.dependencies.skills.push(auto_edge("shared"));
        let shared = skill_with_tool("shared", "tool-shared");

        let registry = SkillRegistry::from_records(vec![a, b, c, shared]);
        let tools = tools_for_skill(&registry, "a");
        let names: Vec<&str> = tools
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["tool-shared", "tool-b", "tool-c", "tool-a"]);
    }

    #[test]
    fn test_required_non_auto_edges_do_not_contribute() {
        let mut a = skill_with_tool("a", "tool-a");
        a.dependencies.skills.push(SkillDependency {
            name: "b".to_string(),
            required: true,
            auto_load: false,
            reason: String::new(),
        });
        let b = skill_with_tool("b", "tool-b");

        let registry = SkillRegistry::from_records(vec![a, b]);
        let tools = tools_for_skill(&registry, "a");
        let names: Vec<&str> = tools
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["tool-a"]);
    }

    #[test]
    fn test_auto_load_cycle_terminates() {
        let mut a = skill_with_tool("a", "tool-a");
        a.dependencies.skills.push(auto_edge("b"));
        let mut b = skill_with_tool("b", "tool-b");
        b.dependencies.skills.push(auto_edge("a"));

        let registry = SkillRegistry::from_records(vec![a, b]);
        let tools = tools_for_skill(&registry, "a");
        let names: Vec<&str> = tools
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["tool-b", "tool-a"]);
    }

    #[test]
    fn test_unknown_skill_yields_no_tools() {
        let registry = SkillRegistry::from_records(vec![]);
        assert!(tools_for_skill(&registry, "ghost").is_empty());
    }

    #[test]
    fn test_manifest_indexes_names_and_aliases() {
        let mut skill = SkillRecord::named("s");
        let mut tool = ToolDefinition::named("hammer", "cli");
        tool.aliases = vec!["bonk".to_string(), "mallet".to_string()];
        skill.tools.push(tool);

        let registry = SkillRegistry::from_records(vec![skill]);
        let manifest = build_manifest(&registry, "s");

        assert_eq!(manifest.skill, "s");
        assert_eq!(manifest.tools.len(), 1);
        assert!(manifest.tool_index.contains_key("hammer"));
        assert!(manifest.tool_index.contains_key("bonk"));
        assert!(manifest.tool_index.contains_key("mallet"));
    }

    #[test]
    fn test_alias_collision_resolves_to_last_traversed() {
        let mut dep = skill_with_tool("dep", "early");
        dep.tools[0].aliases = vec!["shared-alias".to_string()];
        let mut top = SkillRecord::named("top");
        top.dependencies.skills.push(auto_edge("dep"));
        let mut late = ToolDefinition::named("late", "cli");
        late.aliases = vec!["shared-alias".to_string()];
        top.tools.push(late);

        let registry = SkillRegistry::from_records(vec![dep, top]);
        let manifest = build_manifest(&registry, "top");

        assert_eq!(manifest.tool_index["shared-alias"].name, "late");
    }

    #[test]
    fn test_manifest_json_shape() {
        let mut skill = SkillRecord::named("s");
        skill.tools.push(ToolDefinition::named("t", "cli"));
        let registry = SkillRegistry::from_records(vec![skill]);

        let json = serde_json::to_value(build_manifest(&registry, "s")).unwrap();
        assert_eq!(json["skill"], "s");
        assert!(json["tools"].is_array());
        assert!(json["tool_index"]["t"].is_object());
        assert_eq!(json["tools"][0]["category"], "cli");
        assert!(json["tools"][0]["parameters"].is_array());
        assert!(json["tools"][0]["aliases"].is_array());
    }
}
