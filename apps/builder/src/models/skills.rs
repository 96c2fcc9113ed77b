use serde::{Deserialize, Serialize};

/// Ordered set of skill tags. Insertion order is preserved and duplicate
/// values are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    skills: Vec<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `skill` after trimming. Returns `false` when the trimmed value
    /// is empty or already present.
    pub fn insert(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.contains(skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    /// Removes by exact value. Returns `false` if the value was not present.
    pub fn remove(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s != skill.trim());
        self.skills.len() != before
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    /// Flat comma-joined form used for the single backing field.
    pub fn joined(&self) -> String {
        self.skills.join(",")
    }
}
