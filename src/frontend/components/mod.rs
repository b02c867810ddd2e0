//! Reusable section components for the portfolio frontend

mod about;
mod blog;
pub mod contact;
mod footer;
mod hero;
mod nav;
mod projects;
mod seo;
mod skills;

pub use about::About;
pub use blog::Blog;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Navbar;
pub use projects::Projects;
pub use seo::StructuredData;
pub use skills::Skills;
