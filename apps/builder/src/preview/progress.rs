use crate::models::resume::has_text;
use crate::models::ResumeState;

/// Completion score in `0..=100`.
pub type ProgressScore = u8;

/// Points awarded per filled top-level field.
pub const FIELD_WEIGHTS: &[(&str, u32)] = &[
    ("name", 15),
    ("email", 10),
    ("phone", 10),
    ("link", 10),
    ("summary", 15),
    ("skills", 15),
];

pub const EXPERIENCE_BONUS: u32 = 10;
pub const EDUCATION_BONUS: u32 = 10;
pub const CUSTOM_SECTION_BONUS: u32 = 5;

const MAX_PROGRESS: u32 = 100;

/// Weighted sum over filled fields plus section bonuses, clamped to 100.
///
/// Section bonuses count entries present in the model, so the seeded blank
/// rows already contribute.
pub fn compute_progress(state: &ResumeState) -> ProgressScore {
    let skills = state.skills.joined();
    let mut total: u32 = FIELD_WEIGHTS
        .iter()
        .filter(|(field, _)| {
            let value = match *field {
                "name" => state.personal.name.as_str(),
                "email" => state.personal.email.as_str(),
                "phone" => state.personal.phone.as_str(),
                "link" => state.personal.link.as_str(),
                "summary" => state.summary.as_str(),
                "skills" => skills.as_str(),
                _ => "",
            };
            has_text(value)
        })
        .map(|(_, weight)| weight)
        .sum();

    if !state.experience.is_empty() {
        total += EXPERIENCE_BONUS;
    }
    if !state.education.is_empty() {
        total += EDUCATION_BONUS;
    }
    if !state.custom_sections.is_empty() {
        total += CUSTOM_SECTION_BONUS;
    }

    total.min(MAX_PROGRESS) as ProgressScore
}
