//! Top-level routing table.

/// The views the application can render, exactly one per URL path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Resume,
    CaseStudy(u32),
    BlogPost(String),
    NotFound,
}

impl Page {
    /// Ordered, first-match-wins routing table. Trailing slashes are
    /// tolerated; anything outside the table is [`Page::NotFound`].
    pub fn recognize(path: &str) -> Page {
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Page::Home,
            (Some("resume"), None, _) => Page::Resume,
            (Some("projects"), Some(id), None) => match id.parse::<u32>() {
                Ok(id) => Page::CaseStudy(id),
                Err(_) => Page::NotFound,
            },
            (Some("blog"), Some(slug), None) => Page::BlogPost(slug.to_string()),
            _ => Page::NotFound,
        }
    }
}
