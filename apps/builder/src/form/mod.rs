//! Form Model Manager — owns `ResumeState` and is the only thing allowed to
//! mutate it.
//!
//! Every mutating operation re-renders the preview before returning and
//! publishes it on a `watch` channel. Operations that fail return early and
//! leave both state and preview untouched.

pub mod dictation;
pub mod handlers;

use tokio::sync::watch;
use tracing::debug;

use crate::errors::ResumeError;
use crate::models::{
    CustomEntry, CustomSection, Education, EntryId, EntryParent, Experience, FieldRef,
    ResumeState, SectionId, Template,
};
use crate::preview::{render, Preview};

pub struct ResumeStore {
    state: ResumeState,
    preview_tx: watch::Sender<Preview>,
}

impl ResumeStore {
    pub fn new() -> Self {
        let state = ResumeState::seeded();
        let (preview_tx, _) = watch::channel(render(&state));
        Self { state, preview_tx }
    }

    pub fn state(&self) -> &ResumeState {
        &self.state
    }

    /// The preview for the current state.
    pub fn preview(&self) -> Preview {
        self.preview_tx.borrow().clone()
    }

    /// Receiver that always holds the latest preview.
    pub fn subscribe(&self) -> watch::Receiver<Preview> {
        self.preview_tx.subscribe()
    }

    /// Appends a blank entry to `parent` and returns its handle.
    pub fn add_entry(&mut self, parent: EntryParent) -> Result<EntryId, ResumeError> {
        let id = match parent {
            EntryParent::Experience => {
                let entry = Experience::empty();
                let id = entry.id;
                self.state.experience.push(entry);
                id
            }
            EntryParent::Education => {
                let entry = Education::empty();
                let id = entry.id;
                self.state.education.push(entry);
                id
            }
            EntryParent::Custom { section } => {
                let section = self.state.section_mut(section).ok_or_else(|| {
                    ResumeError::Validation(format!("Custom section {section} does not exist"))
                })?;
                let entry = CustomEntry::empty();
                let id = entry.id;
                section.entries.push(entry);
                id
            }
        };
        debug!("Added {parent:?} entry {id}");
        self.commit();
        Ok(id)
    }

    /// Deletes the entry. Removing an entry that is already gone is a no-op.
    pub fn remove_entry(&mut self, id: EntryId) {
        if self.state.remove_entry(id) {
            debug!("Removed entry {id}");
        }
        self.commit();
    }

    /// Creates a custom section seeded with one blank entry.
    pub fn add_custom_section(&mut self, title: &str) -> Result<SectionId, ResumeError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ResumeError::Validation(
                "Please enter a title for your custom section.".to_string(),
            ));
        }
        let id = SectionId::new();
        self.state.custom_sections.push(CustomSection {
            id,
            title: title.to_string(),
            entries: vec![CustomEntry::empty()],
        });
        debug!("Added custom section '{title}' ({id})");
        self.commit();
        Ok(id)
    }

    pub fn remove_custom_section(&mut self, id: SectionId) {
        self.state.custom_sections.retain(|s| s.id != id);
        self.commit();
    }

    /// Adds a skill tag. Empty or duplicate values are ignored without any
    /// state change; otherwise the pending input buffer is cleared.
    /// Returns whether the skill was added.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        if !self.state.skills.insert(skill) {
            return false;
        }
        self.state.skill_input.clear();
        debug!("Skills now: {}", self.state.skills.joined());
        self.commit();
        true
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.state.skills.remove(skill);
        self.commit();
    }

    /// Commits whatever is typed in the skill input buffer, splitting on
    /// commas. Returns the number of skills added.
    pub fn commit_skill_input(&mut self) -> usize {
        let pending = std::mem::take(&mut self.state.skill_input);
        let added = pending
            .split(',')
            .filter(|skill| self.state.skills.insert(skill))
            .count();
        self.commit();
        added
    }

    /// The normal edit path for a single text field.
    pub fn set_field(&mut self, field: FieldRef, value: impl Into<String>) -> Result<(), ResumeError> {
        let value = value.into();
        let slot = match field {
            FieldRef::Name => &mut self.state.personal.name,
            FieldRef::Email => &mut self.state.personal.email,
            FieldRef::Phone => &mut self.state.personal.phone,
            FieldRef::Link => &mut self.state.personal.link,
            FieldRef::Summary => &mut self.state.summary,
            FieldRef::SkillInput => &mut self.state.skill_input,
            FieldRef::Entry { id, field } => {
                self.state.entry_field_mut(id, field).ok_or_else(|| {
                    ResumeError::Validation(format!("Entry {id} has no editable field {field:?}"))
                })?
            }
        };
        *slot = value;
        self.commit();
        Ok(())
    }

    pub fn set_template(&mut self, template: Template) {
        self.state.template = template;
        self.commit();
    }

    /// Back to the seeded startup state.
    pub fn reset(&mut self) {
        self.state = ResumeState::seeded();
        debug!("Form reset");
        self.commit();
    }

    fn commit(&mut self) {
        self.preview_tx.send_replace(render(&self.state));
    }
}

impl Default for ResumeStore {
    fn default() -> Self {
        Self::new()
    }
}
