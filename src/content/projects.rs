use super::Repository;

/// A portfolio project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub demo_url: &'static str,
    pub github_url: &'static str,
}

static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "A full-featured online shopping platform with cart, checkout, and payment integration.",
        tags: &["React", "Node.js", "MongoDB"],
        image: "/assets/project1.jpg",
        demo_url: "#",
        github_url: "#",
    },
    Project {
        id: 2,
        title: "Task Management App",
        description: "A productivity application for managing tasks with drag-and-drop functionality.",
        tags: &["React", "Firebase", "CSS"],
        image: "/assets/project2.jpg",
        demo_url: "#",
        github_url: "#",
    },
    Project {
        id: 3,
        title: "Weather Dashboard",
        description: "Real-time weather forecasting application with location detection.",
        tags: &["JavaScript", "API", "CSS"],
        image: "/assets/project3.jpg",
        demo_url: "#",
        github_url: "#",
    },
    Project {
        id: 4,
        title: "Social Media Analytics",
        description: "Dashboard for tracking social media metrics and engagement.",
        tags: &["React", "D3.js", "Express"],
        image: "/assets/project4.jpg",
        demo_url: "#",
        github_url: "#",
    },
];

pub fn projects() -> &'static [Project] {
    PROJECTS
}

pub fn project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub struct ProjectStore;

impl Repository for ProjectStore {
    type Key = u32;
    type Record = Project;

    fn get(&self, key: &u32) -> Option<&Project> {
        project(*key)
    }

    fn list(&self) -> &[Project] {
        projects()
    }
}

/// Sentinel filter value matching every project.
pub const ALL_TAG: &str = "All";

/// Distinct tags in first-seen order, with the [`ALL_TAG`] sentinel first.
pub fn collect_tags(projects: &[Project]) -> Vec<&'static str> {
    let mut tags = vec![ALL_TAG];
    for project in projects {
        for tag in project.tags {
            if !tags.contains(tag) {
                tags.push(tag);
            }
        }
    }
    tags
}

/// Projects whose tag set contains `tag`; [`ALL_TAG`] selects everything.
pub fn filter_by_tag<'a>(projects: &'a [Project], tag: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| tag == ALL_TAG || p.tags.iter().any(|t| *t == tag))
        .collect()
}
