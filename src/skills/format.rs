//! Skill Format Parser
//!
//! Parses `SKILL.md` files that use YAML frontmatter for metadata.
//! The frontmatter declares the skill's identity, its structured tools,
//! and its dependency lists; the Markdown body is free-form documentation
//! and is not consumed here.
//!
//! Expected format:
//! ```text
//! ---
//! name: my-skill
//! description: Does something useful
//! version: 1.2.0
//! tools:
//!   - name: fetch
//!     category: cli
//! dependencies:
//!   skills:
//!     - name: core-utils
//!       required: true
//!       auto_load: true
//! ---
//!
//! Instructions go here in Markdown...
//! ```

use thiserror::Error;
use yaml_rust2::{Yaml, YamlLoader};

use crate::types::{
    DependencySpec, EnvironmentRequirement, PackageDependency, SkillDependency, SkillRecord,
    ToolDefinition, ToolParameter,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a skill source could not be turned into a [`SkillRecord`].
///
/// Callers treat every variant the same way: the source is skipped, not
/// surfaced as a run failure.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("no YAML frontmatter block found")]
    MissingFrontmatter,

    #[error("frontmatter is not valid YAML: {0}")]
    Yaml(#[from] yaml_rust2::ScanError),

    #[error("frontmatter is empty")]
    EmptyFrontmatter,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse a complete skill markdown file into a [`SkillRecord`].
///
/// Records without a `name` or a `description` are rejected; the loader
/// drops them silently per the registry contract.
pub fn parse_skill_md(content: &str) -> Result<SkillRecord, FormatError> {
    let yaml_block = extract_frontmatter(content)?;
    let docs = YamlLoader::load_from_str(yaml_block)?;
    let doc = docs.first().ok_or(FormatError::EmptyFrontmatter)?;

    let name = non_empty_str(&doc["name"]).ok_or(FormatError::MissingField("name"))?;
    let description =
        non_empty_str(&doc["description"]).ok_or(FormatError::MissingField("description"))?;

    let version = non_empty_str(&doc["version"]).unwrap_or_else(|| "1.0.0".to_string());

    let tools = doc["tools"]
        .as_vec()
        .map(|items| items.iter().map(parse_tool).collect())
        .unwrap_or_default();

    Ok(SkillRecord {
        name,
        description,
        version,
        tools,
        dependencies: parse_dependencies(&doc["dependencies"]),
    })
}

/// Extract the YAML frontmatter block from raw Markdown content.
///
/// The frontmatter must be delimited by lines that are exactly `---`.
pub fn extract_frontmatter(raw: &str) -> Result<&str, FormatError> {
    let trimmed = raw.trim_start();

    if !trimmed.starts_with("---") {
        return Err(FormatError::MissingFrontmatter);
    }

    // Find the closing `---` after the opening one.
    let after_open = &trimmed[3..];
    let close_idx = after_open
        .find("\n---")
        .ok_or(FormatError::MissingFrontmatter)?;

    Ok(after_open[..close_idx].trim())
}

// ---------------------------------------------------------------------------
// Section parsers
// ---------------------------------------------------------------------------

/// Parse the `dependencies` mapping with its `skills`, `packages`, and
/// `environment` lists. A missing or non-mapping value yields empty lists.
fn parse_dependencies(yaml: &Yaml) -> DependencySpec {
    let skills = yaml["skills"]
        .as_vec()
        .map(|items| items.iter().map(parse_skill_dependency).collect())
        .unwrap_or_default();

    let packages = yaml["packages"]
        .as_vec()
        .map(|items| items.iter().map(parse_package_dependency).collect())
        .unwrap_or_default();

    let environment = yaml["environment"]
        .as_vec()
        .map(|items| items.iter().map(parse_environment_requirement).collect())
        .unwrap_or_default();

    DependencySpec {
        skills,
        packages,
        environment,
    }
}

fn parse_skill_dependency(item: &Yaml) -> SkillDependency {
    SkillDependency {
        name: str_or_default(&item["name"]),
        required: item["required"].as_bool().unwrap_or(true),
        auto_load: item["auto_load"].as_bool().unwrap_or(false),
        reason: str_or_default(&item["reason"]),
    }
}

fn parse_package_dependency(item: &Yaml) -> PackageDependency {
    PackageDependency {
        name: str_or_default(&item["name"]),
        version: str_or_default(&item["version"]),
        install: str_or_default(&item["install"]),
    }
}

fn parse_environment_requirement(item: &Yaml) -> EnvironmentRequirement {
    EnvironmentRequirement {
        name: str_or_default(&item["name"]),
        required: item["required"].as_bool().unwrap_or(true),
        description: str_or_default(&item["description"]),
    }
}

fn parse_tool(item: &Yaml) -> ToolDefinition {
    let parameters = item["parameters"]
        .as_vec()
        .map(|params| params.iter().map(parse_tool_parameter).collect())
        .unwrap_or_default();

    ToolDefinition {
        name: str_or_default(&item["name"]),
        category: non_empty_str(&item["category"]).unwrap_or_else(|| "cli".to_string()),
        description: str_or_default(&item["description"]),
        command: str_or_default(&item["command"]),
        parameters,
        examples: string_list(&item["examples"]),
        aliases: string_list(&item["aliases"]),
    }
}

fn parse_tool_parameter(item: &Yaml) -> ToolParameter {
    ToolParameter {
        name: str_or_default(&item["name"]),
        param_type: non_empty_str(&item["type"]).unwrap_or_else(|| "string".to_string()),
        required: item["required"].as_bool().unwrap_or(false),
        default: yaml_to_json(&item["default"]),
        description: str_or_default(&item["description"]),
    }
}

// ---------------------------------------------------------------------------
// YAML helpers
// ---------------------------------------------------------------------------

fn non_empty_str(yaml: &Yaml) -> Option<String> {
    yaml.as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn str_or_default(yaml: &Yaml) -> String {
    yaml.as_str().unwrap_or("").to_string()
}

fn string_list(yaml: &Yaml) -> Vec<String> {
    yaml.as_vec()
        .map(|items| {
            items
                .iter()
                .filter_map(|y| y.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// Convert a scalar (or shallow collection) YAML value into JSON for the
/// `default` field of a tool parameter. Missing values become `None`.
fn yaml_to_json(yaml: &Yaml) -> Option<serde_json::Value> {
    use serde_json::Value;

    match yaml {
        Yaml::Real(s) => s.parse::<f64>().ok().and_then(|f| {
            serde_json::Number::from_f64(f).map(Value::Number)
        }),
        Yaml::Integer(i) => Some(Value::Number((*i).into())),
        Yaml::String(s) => Some(Value::String(s.clone())),
        Yaml::Boolean(b) => Some(Value::Bool(*b)),
        Yaml::Array(items) => Some(Value::Array(
            items.iter().filter_map(yaml_to_json).collect(),
        )),
        Yaml::Hash(map) => {
            let mut obj = serde_json::Map::new();
            for (k, v) in map.iter() {
                if let (Some(key), Some(value)) = (k.as_str(), yaml_to_json(v)) {
                    obj.insert(key.to_string(), value);
                }
            }
            Some(Value::Object(obj))
        }
        _ => None,
    }
}
