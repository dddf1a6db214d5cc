//! Skill Registry
//!
//! The immutable per-session snapshot of all parsed skill records, keyed by
//! name. Every downstream component (validator, resolver, cycle detector,
//! tool aggregator, graph exporter) reads from this snapshot; none mutate it.

use std::collections::BTreeMap;

use crate::types::SkillRecord;

/// Name-keyed map of skill records for one resolution session.
///
/// Iteration order is sorted by name, so every whole-registry operation
/// produces deterministic output.
#[derive(Clone, Debug, Default)]
pub struct SkillRegistry {
    skills: BTreeMap<String, SkillRecord>,
}

impl SkillRegistry {
    /// Build a registry from parsed records.
    ///
    /// Duplicate names are not an error: the last-loaded record wins. This
    /// overwrite behavior is documented registry semantics, not a defect.
    pub fn from_records(records: Vec<SkillRecord>) -> Self {
        let mut skills = BTreeMap::new();
        for record in records {
            skills.insert(record.name.clone(), record);
        }
        SkillRegistry { skills }
    }

    pub fn get(&self, name: &str) -> Option<&SkillRecord> {
        self.skills.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.skills.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.skills.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SkillRecord)> {
        self.skills.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
