use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::skills::SkillSet;

// ────────────────────────────────────────────────────────────────────────────
// Handles
// ────────────────────────────────────────────────────────────────────────────

/// Opaque handle to a repeatable entry, returned when the entry is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque handle to a custom section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(Uuid);

impl SectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// True when a form value counts as filled in.
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

// ────────────────────────────────────────────────────────────────────────────
// Repeatable entries
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryField {
    Title,
    Company,
    Dates,
    Description,
    Degree,
    School,
    Subtitle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: EntryId,
    pub title: String,
    pub company: String,
    pub dates: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: EntryId,
    pub degree: String,
    pub school: String,
    pub dates: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEntry {
    pub id: EntryId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

impl Experience {
    pub fn empty() -> Self {
        Self {
            id: EntryId::new(),
            title: String::new(),
            company: String::new(),
            dates: String::new(),
            description: String::new(),
        }
    }

    /// An entry with every field empty is kept in the model but never rendered.
    pub fn is_blank(&self) -> bool {
        ![&self.title, &self.company, &self.dates, &self.description]
            .iter()
            .any(|v| has_text(v))
    }

    fn field_mut(&mut self, field: EntryField) -> Option<&mut String> {
        match field {
            EntryField::Title => Some(&mut self.title),
            EntryField::Company => Some(&mut self.company),
            EntryField::Dates => Some(&mut self.dates),
            EntryField::Description => Some(&mut self.description),
            _ => None,
        }
    }
}

impl Education {
    pub fn empty() -> Self {
        Self {
            id: EntryId::new(),
            degree: String::new(),
            school: String::new(),
            dates: String::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        ![&self.degree, &self.school, &self.dates]
            .iter()
            .any(|v| has_text(v))
    }

    fn field_mut(&mut self, field: EntryField) -> Option<&mut String> {
        match field {
            EntryField::Degree => Some(&mut self.degree),
            EntryField::School => Some(&mut self.school),
            EntryField::Dates => Some(&mut self.dates),
            _ => None,
        }
    }
}

impl CustomEntry {
    pub fn empty() -> Self {
        Self {
            id: EntryId::new(),
            title: String::new(),
            subtitle: String::new(),
            description: String::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        ![&self.title, &self.subtitle, &self.description]
            .iter()
            .any(|v| has_text(v))
    }

    fn field_mut(&mut self, field: EntryField) -> Option<&mut String> {
        match field {
            EntryField::Title => Some(&mut self.title),
            EntryField::Subtitle => Some(&mut self.subtitle),
            EntryField::Description => Some(&mut self.description),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSection {
    pub id: SectionId,
    pub title: String,
    pub entries: Vec<CustomEntry>,
}

/// Where a new entry is appended. The entry variant follows from the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryParent {
    Experience,
    Education,
    Custom { section: SectionId },
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregate state
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    #[default]
    Classic,
    Modern,
    Minimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub link: String,
}

/// Addresses one editable text field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldRef {
    Name,
    Email,
    Phone,
    Link,
    Summary,
    SkillInput,
    Entry { id: EntryId, field: EntryField },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeState {
    pub personal: PersonalInfo,
    pub summary: String,
    pub skills: SkillSet,
    /// Pending text in the skill input box, not yet committed as a tag.
    pub skill_input: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub custom_sections: Vec<CustomSection>,
    pub template: Template,
}

impl ResumeState {
    /// Startup state: everything empty except one blank experience row and
    /// one blank education row so the form has something to type into.
    pub fn seeded() -> Self {
        Self {
            personal: PersonalInfo::default(),
            summary: String::new(),
            skills: SkillSet::new(),
            skill_input: String::new(),
            experience: vec![Experience::empty()],
            education: vec![Education::empty()],
            custom_sections: Vec::new(),
            template: Template::default(),
        }
    }

    pub fn section_mut(&mut self, id: SectionId) -> Option<&mut CustomSection> {
        self.custom_sections.iter_mut().find(|s| s.id == id)
    }

    /// Returns the text slot for `field` of entry `id`, or `None` when the
    /// entry does not exist or has no such field.
    pub fn entry_field_mut(&mut self, id: EntryId, field: EntryField) -> Option<&mut String> {
        if let Some(entry) = self.experience.iter_mut().find(|e| e.id == id) {
            return entry.field_mut(field);
        }
        if let Some(entry) = self.education.iter_mut().find(|e| e.id == id) {
            return entry.field_mut(field);
        }
        self.custom_sections
            .iter_mut()
            .flat_map(|s| s.entries.iter_mut())
            .find(|e| e.id == id)
            .and_then(|e| e.field_mut(field))
    }

    /// Removes the entry wherever it lives. Returns `false` if nothing matched.
    pub fn remove_entry(&mut self, id: EntryId) -> bool {
        let before = self.entry_count();
        self.experience.retain(|e| e.id != id);
        self.education.retain(|e| e.id != id);
        for section in &mut self.custom_sections {
            section.entries.retain(|e| e.id != id);
        }
        self.entry_count() != before
    }

    fn entry_count(&self) -> usize {
        self.experience.len()
            + self.education.len()
            + self
                .custom_sections
                .iter()
                .map(|s| s.entries.len())
                .sum::<usize>()
    }
}

impl Default for ResumeState {
    fn default() -> Self {
        Self::seeded()
    }
}
