pub mod resume;
pub mod skills;

pub use resume::{
    CustomEntry, CustomSection, Education, EntryField, EntryId, EntryParent, Experience,
    FieldRef, PersonalInfo, ResumeState, SectionId, Template,
};
