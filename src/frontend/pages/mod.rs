//! Page components, one per routing-table entry

mod blog_post;
mod case_study;
mod home;
mod not_found;
mod resume;

pub use blog_post::BlogPostPage;
pub use case_study::CaseStudyPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use resume::ResumePage;
