//! Skill Resolver - Type Definitions
//!
//! All shared types for the skill dependency resolver: the skill record
//! parsed from `SKILL.md` frontmatter, its dependency lists, and the
//! structured tool definitions aggregated into manifests.

use serde::{Deserialize, Serialize};

// ─── Skill Record ────────────────────────────────────────────────

/// One parsed skill. Immutable once the registry is built for a session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub description: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub tools: Vec<ToolDefinition>,
    #[serde(default)]
    pub dependencies: DependencySpec,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

/// The three dependency lists a skill may declare. All lists keep
/// declaration order; traversal follows it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DependencySpec {
    #[serde(default)]
    pub skills: Vec<SkillDependency>,
    #[serde(default)]
    pub packages: Vec<PackageDependency>,
    #[serde(default)]
    pub environment: Vec<EnvironmentRequirement>,
}

// ─── Dependency Edges ────────────────────────────────────────────

/// A named reference to another skill. The target may be absent from the
/// registry; resolution tolerates dangling references.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillDependency {
    pub name: String,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default)]
    pub auto_load: bool,
    #[serde(default)]
    pub reason: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PackageDependency {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub install: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnvironmentRequirement {
    pub name: String,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default)]
    pub description: String,
}

fn default_true() -> bool {
    true
}

// ─── Tool Definitions ────────────────────────────────────────────

/// An invocable tool declared by a skill.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub parameters: Vec<ToolParameter>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

fn default_category() -> String {
    "cli".to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolParameter {
    pub name: String,
    #[serde(rename = "type", default = "default_param_type")]
    pub param_type: String,
    #[serde(default)]
    pub required: bool,
    /// Default value as declared in frontmatter; `null` when unset.
    #[serde(default)]
    pub default: Option<serde_json::Value>,
    #[serde(default)]
    pub description: String,
}

fn default_param_type() -> String {
    "string".to_string()
}

#[cfg(test)]
impl SkillRecord {
    /// Bare record with no tools or dependencies, used throughout the tests.
    pub fn named(name: &str) -> Self {
        SkillRecord {
            name: name.to_string(),
            description: format!("{} skill", name),
            version: default_version(),
            tools: Vec::new(),
            dependencies: DependencySpec::default(),
        }
    }
}

#[cfg(test)]
impl ToolDefinition {
    /// Minimal tool with just a name and category.
    pub fn named(name: &str, category: &str) -> Self {
        ToolDefinition {
            name: name.to_string(),
            category: category.to_string(),
            description: String::new(),
            command: String::new(),
            parameters: Vec::new(),
            examples: Vec::new(),
            aliases: Vec::new(),
        }
    }
}
