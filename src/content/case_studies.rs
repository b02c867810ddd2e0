use super::Repository;

/// Long-form write-up behind a project card. Not every project has one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static str,
    pub tech_stack: &'static [&'static str],
    pub images: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
}

static CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: 1,
        title: "E-Commerce Platform",
        description: "A full-featured online shopping platform with cart, checkout, and payment integration.",
        challenge: "The main challenge was to create a seamless shopping experience while ensuring security for payment transactions.",
        solution: "I implemented a responsive design using React and integrated Stripe for secure payments. The platform includes user authentication, product search, and order tracking.",
        results: "The platform increased client's sales by 40% in the first quarter and received positive feedback for its intuitive interface.",
        tech_stack: &["React", "Node.js", "MongoDB", "Stripe API", "Express"],
        images: &["/assets/project1.jpg", "/assets/project1-2.jpg"],
        live_url: "#",
        github_url: "#",
    },
    CaseStudy {
        id: 2,
        title: "Task Management App",
        description: "A productivity application for managing tasks with drag-and-drop functionality.",
        challenge: "Users needed a simple yet powerful tool to organize their daily tasks and collaborate with team members.",
        solution: "I developed a Kanban-style interface with drag-and-drop capabilities using React Beautiful DnD. The app includes real-time updates through WebSockets.",
        results: "The app improved team productivity by 25% and was adopted by over 500 users within the first month.",
        tech_stack: &["React", "Firebase", "CSS", "React Beautiful DnD"],
        images: &["/assets/project2.jpg", "/assets/project2-2.jpg"],
        live_url: "#",
        github_url: "#",
    },
];

pub fn case_studies() -> &'static [CaseStudy] {
    CASE_STUDIES
}

/// Lookup by project id. Unknown ids are `None`; callers render their
/// not-found treatment rather than substituting another record.
pub fn case_study(id: u32) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|c| c.id == id)
}

pub struct CaseStudyStore;

impl Repository for CaseStudyStore {
    type Key = u32;
    type Record = CaseStudy;

    fn get(&self, key: &u32) -> Option<&CaseStudy> {
        case_study(*key)
    }

    fn list(&self) -> &[CaseStudy] {
        case_studies()
    }
}
