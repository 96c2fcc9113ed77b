//! Preview Renderer — a pure function from `ResumeState` to a typed preview tree.
//!
//! The tree carries content only. Turning it into markup or pixels is the job
//! of whatever presentation layer consumes the JSON.

pub mod contact;
pub mod progress;

use serde::{Deserialize, Serialize};

use crate::models::resume::has_text;
use crate::models::{CustomEntry, Education, Experience, ResumeState, Template};

pub use contact::ContactItem;
pub use progress::{compute_progress, ProgressScore};

pub const NAME_PLACEHOLDER: &str = "Your Name";

const JOB_TITLE_PLACEHOLDER: &str = "Job Title";
const COMPANY_PLACEHOLDER: &str = "Company Name";
const DATES_PLACEHOLDER: &str = "Start - End Date";
const JOB_DESCRIPTION_PLACEHOLDER: &str = "Job description...";
const DEGREE_PLACEHOLDER: &str = "Degree / Certificate";
const SCHOOL_PLACEHOLDER: &str = "School / University";
const CUSTOM_TITLE_PLACEHOLDER: &str = "Title";
const CUSTOM_SUBTITLE_PLACEHOLDER: &str = "Subtitle/Date";
const CUSTOM_DESCRIPTION_PLACEHOLDER: &str = "Description...";

// ────────────────────────────────────────────────────────────────────────────
// Rendered tree
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Skills,
    Experience,
    Education,
    Custom,
}

/// One rendered entry row: a heading with an aside on the right, an optional
/// subheading line and an optional body paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedEntry {
    pub heading: String,
    pub aside: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SectionBody {
    Text(String),
    Tags(Vec<String>),
    Entries(Vec<RenderedEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSection {
    pub kind: SectionKind,
    pub heading: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedResume {
    pub template: Template,
    pub name: String,
    pub contact: Vec<ContactItem>,
    pub sections: Vec<RenderedSection>,
}

impl RenderedResume {
    #[cfg(test)]
    pub fn section(&self, kind: SectionKind) -> Option<&RenderedSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

/// Everything the presentation layer needs after a state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub resume: RenderedResume,
    pub progress: ProgressScore,
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Derives the full preview from `state`. No hidden inputs: the same state
/// always yields the same preview.
pub fn render(state: &ResumeState) -> Preview {
    let name = or_placeholder(&state.personal.name, NAME_PLACEHOLDER);
    let contact = contact::contact_items(&state.personal);

    let mut sections = Vec::new();

    if has_text(&state.summary) {
        sections.push(RenderedSection {
            kind: SectionKind::Summary,
            heading: "Summary".to_string(),
            body: SectionBody::Text(state.summary.clone()),
        });
    }

    if !state.skills.is_empty() {
        sections.push(RenderedSection {
            kind: SectionKind::Skills,
            heading: "Skills".to_string(),
            body: SectionBody::Tags(state.skills.iter().map(str::to_string).collect()),
        });
    }

    let experience: Vec<_> = state
        .experience
        .iter()
        .filter(|e| !e.is_blank())
        .map(render_experience)
        .collect();
    if !experience.is_empty() {
        sections.push(RenderedSection {
            kind: SectionKind::Experience,
            heading: "Experience".to_string(),
            body: SectionBody::Entries(experience),
        });
    }

    let education: Vec<_> = state
        .education
        .iter()
        .filter(|e| !e.is_blank())
        .map(render_education)
        .collect();
    if !education.is_empty() {
        sections.push(RenderedSection {
            kind: SectionKind::Education,
            heading: "Education".to_string(),
            body: SectionBody::Entries(education),
        });
    }

    for section in &state.custom_sections {
        let entries: Vec<_> = section
            .entries
            .iter()
            .filter(|e| !e.is_blank())
            .map(render_custom)
            .collect();
        if entries.is_empty() {
            continue;
        }
        sections.push(RenderedSection {
            kind: SectionKind::Custom,
            heading: section.title.clone(),
            body: SectionBody::Entries(entries),
        });
    }

    Preview {
        resume: RenderedResume {
            template: state.template,
            name,
            contact,
            sections,
        },
        progress: compute_progress(state),
    }
}

fn render_experience(entry: &Experience) -> RenderedEntry {
    RenderedEntry {
        heading: or_placeholder(&entry.title, JOB_TITLE_PLACEHOLDER),
        aside: or_placeholder(&entry.dates, DATES_PLACEHOLDER),
        subheading: Some(or_placeholder(&entry.company, COMPANY_PLACEHOLDER)),
        body: Some(or_placeholder(
            &entry.description,
            JOB_DESCRIPTION_PLACEHOLDER,
        )),
    }
}

fn render_education(entry: &Education) -> RenderedEntry {
    RenderedEntry {
        heading: or_placeholder(&entry.degree, DEGREE_PLACEHOLDER),
        aside: or_placeholder(&entry.dates, DATES_PLACEHOLDER),
        subheading: Some(or_placeholder(&entry.school, SCHOOL_PLACEHOLDER)),
        body: None,
    }
}

fn render_custom(entry: &CustomEntry) -> RenderedEntry {
    RenderedEntry {
        heading: or_placeholder(&entry.title, CUSTOM_TITLE_PLACEHOLDER),
        aside: or_placeholder(&entry.subtitle, CUSTOM_SUBTITLE_PLACEHOLDER),
        subheading: None,
        body: Some(or_placeholder(
            &entry.description,
            CUSTOM_DESCRIPTION_PLACEHOLDER,
        )),
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if has_text(value) {
        value.to_string()
    } else {
        placeholder.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CustomSection, SectionId};

    fn entries(section: &RenderedSection) -> &[RenderedEntry] {
        match &section.body {
            SectionBody::Entries(entries) => entries,
            other => panic!("expected entries, got {other:?}"),
        }
    }

    #[test]
    fn test_name_and_email_only() {
        let mut state = ResumeState::seeded();
        state.personal.name = "Jane Doe".to_string();
        state.personal.email = "jane@x.com".to_string();

        let preview = render(&state);
        assert_eq!(preview.resume.name, "Jane Doe");
        assert_eq!(
            preview.resume.contact,
            vec![ContactItem::Email("jane@x.com".to_string())]
        );
        assert!(preview.resume.sections.is_empty());
    }

    #[test]
    fn test_empty_name_uses_placeholder() {
        let preview = render(&ResumeState::seeded());
        assert_eq!(preview.resume.name, NAME_PLACEHOLDER);
        assert!(preview.resume.contact.is_empty());
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut state = ResumeState::seeded();
        state.summary = "Ships reliable systems".to_string();
        state.skills.insert("Rust");
        state.experience[0].title = "Engineer".to_string();
        assert_eq!(render(&state), render(&state));
    }

    #[test]
    fn test_placeholders_are_per_field() {
        let mut state = ResumeState::seeded();
        state.experience[0].company = "Acme".to_string();

        let preview = render(&state);
        let section = preview.resume.section(SectionKind::Experience).unwrap();
        let row = &entries(section)[0];
        assert_eq!(row.heading, "Job Title");
        assert_eq!(row.aside, "Start - End Date");
        assert_eq!(row.subheading.as_deref(), Some("Acme"));
        assert_eq!(row.body.as_deref(), Some("Job description..."));
    }

    #[test]
    fn test_blank_entries_are_skipped_in_order() {
        let mut state = ResumeState::seeded();
        state.experience[0].title = "First".to_string();
        state.experience.push(Experience::empty());
        let mut third = Experience::empty();
        third.title = "Third".to_string();
        state.experience.push(third);

        let preview = render(&state);
        let headings: Vec<_> = entries(preview.resume.section(SectionKind::Experience).unwrap())
            .iter()
            .map(|e| e.heading.as_str())
            .collect();
        assert_eq!(headings, vec!["First", "Third"]);
    }

    #[test]
    fn test_education_placeholders() {
        let mut state = ResumeState::seeded();
        state.education[0].school = "MIT".to_string();

        let preview = render(&state);
        let row = &entries(preview.resume.section(SectionKind::Education).unwrap())[0];
        assert_eq!(row.heading, "Degree / Certificate");
        assert_eq!(row.subheading.as_deref(), Some("MIT"));
        assert!(row.body.is_none());
    }

    #[test]
    fn test_custom_section_without_content_is_hidden() {
        let mut state = ResumeState::seeded();
        state.custom_sections.push(CustomSection {
            id: SectionId::new(),
            title: "Projects".to_string(),
            entries: vec![CustomEntry::empty()],
        });
        let mut entry = CustomEntry::empty();
        entry.description = "Won the thing".to_string();
        state.custom_sections.push(CustomSection {
            id: SectionId::new(),
            title: "Awards".to_string(),
            entries: vec![entry],
        });

        let preview = render(&state);
        let custom: Vec<_> = preview
            .resume
            .sections
            .iter()
            .filter(|s| s.kind == SectionKind::Custom)
            .collect();
        assert_eq!(custom.len(), 1);
        assert_eq!(custom[0].heading, "Awards");
        let row = &entries(custom[0])[0];
        assert_eq!(row.heading, "Title");
        assert_eq!(row.aside, "Subtitle/Date");
        assert_eq!(row.body.as_deref(), Some("Won the thing"));
    }

    #[test]
    fn test_section_order() {
        let mut state = ResumeState::seeded();
        state.summary = "Hello".to_string();
        state.skills.insert("Rust");
        state.experience[0].title = "Dev".to_string();
        state.education[0].degree = "BSc".to_string();

        let kinds: Vec<_> = render(&state)
            .resume
            .sections
            .iter()
            .map(|s| s.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Summary,
                SectionKind::Skills,
                SectionKind::Experience,
                SectionKind::Education
            ]
        );
    }

    #[test]
    fn test_preview_wire_format() {
        let mut state = ResumeState::seeded();
        state.summary = "Hello".to_string();
        let json = serde_json::to_value(render(&state)).unwrap();
        assert_eq!(json["resume"]["template"], "classic");
        assert_eq!(json["resume"]["sections"][0]["kind"], "summary");
        assert_eq!(json["resume"]["sections"][0]["body"]["type"], "text");
        assert_eq!(json["progress"], 35);
    }
}
