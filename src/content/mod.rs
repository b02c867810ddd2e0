//! Compiled-in site content.
//!
//! Every record the views render lives here, fixed at build time. Lookups
//! go through the [`Repository`] seam so a real data source can replace
//! the static stores without touching view code.

mod case_studies;
mod posts;
mod profile;
mod projects;
mod skills;

pub use case_studies::{case_study, case_studies, CaseStudy, CaseStudyStore};
pub use posts::{post, posts, BlogPost, PostStore};
pub use profile::{profile, Profile};
pub use projects::{
    collect_tags, filter_by_tag, project, projects, Project, ProjectStore, ALL_TAG,
};
pub use skills::{skill_categories, Skill, SkillCategory};

/// Read-only lookup over a fixed record collection.
pub trait Repository {
    type Key: ?Sized;
    type Record;

    fn get(&self, key: &Self::Key) -> Option<&Self::Record>;
    fn list(&self) -> &[Self::Record];
}
