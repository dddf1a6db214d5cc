//! Skill Validator
//!
//! Checks a single skill's internal consistency and environment readiness.
//! Findings are descriptive strings, never failures: the caller decides
//! success by the result list being empty.
//!
//! Environment lookups go through the [`EnvSource`] trait so validation is
//! testable without touching the real process environment. The environment
//! check is state-dependent: re-running with different variables set can
//! change the result.

use std::collections::BTreeMap;

use crate::skills::registry::SkillRegistry;

/// Read access to the current environment state.
pub trait EnvSource {
    /// Value of the named variable, or `None` if unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment. A variable set to the empty string counts
/// as missing.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}

/// Validate one skill. Empty result means valid.
///
/// Checks, in order: every skill-dependency edge resolves to a registered
/// skill, every required environment variable is present, and every tool
/// declares a name and a category.
pub fn validate_skill(registry: &SkillRegistry, name: &str, env: &dyn EnvSource) -> Vec<String> {
    let skill = match registry.get(name) {
        Some(s) => s,
        None => return vec![format!("Skill '{}' not found", name)],
    };

    let mut errors = Vec::new();

    for dep in &skill.dependencies.skills {
        if !registry.contains(&dep.name) {
            errors.push(format!(
                "Missing dependency: '{}' required by '{}'",
                dep.name, name
            ));
        }
    }

    for req in &skill.dependencies.environment {
        if req.required && env.var(&req.name).is_none() {
            errors.push(format!(
                "Missing required environment variable: {}",
                req.name
            ));
        }
    }

    for tool in &skill.tools {
        if tool.name.is_empty() {
            errors.push(format!("Tool missing 'name' in skill '{}'", name));
        }
        if tool.category.is_empty() {
            errors.push(format!(
                "Tool '{}' missing 'category' in skill '{}'",
                tool.name, name
            ));
        }
    }

    errors
}

/// Validate every registered skill. Only skills with findings appear in the
/// result map.
pub fn check_all(registry: &SkillRegistry, env: &dyn EnvSource) -> BTreeMap<String, Vec<String>> {
    let mut results = BTreeMap::new();
    for name in registry.names() {
        let errors = validate_skill(registry, name, env);
        if !errors.is_empty() {
            results.insert(name.to_string(), errors);
        }
    }
    results
}
