#[cfg(test)]
pub mod router_tests {
    use devfolio::frontend::routes::Page;

    #[test]
    fn test_root_renders_home() {
        assert_eq!(Page::recognize("/"), Page::Home);
        assert_eq!(Page::recognize(""), Page::Home);
    }

    #[test]
    fn test_resume_route() {
        assert_eq!(Page::recognize("/resume"), Page::Resume);
        assert_eq!(Page::recognize("/resume/"), Page::Resume);
    }

    #[test]
    fn test_case_study_route_carries_id() {
        assert_eq!(Page::recognize("/projects/1"), Page::CaseStudy(1));
        assert_eq!(Page::recognize("/projects/42"), Page::CaseStudy(42));
    }

    #[test]
    fn test_blog_route_carries_slug() {
        assert_eq!(
            Page::recognize("/blog/css-grid-layout"),
            Page::BlogPost("css-grid-layout".to_string())
        );
    }

    #[test]
    fn test_unmatched_paths_fall_through_to_not_found() {
        for path in [
            "/about",
            "/blog",
            "/projects",
            "/projects/not-a-number",
            "/projects/1/extra",
            "/blog/slug/extra",
            "/resume/pdf",
            "/admin/login",
        ] {
            assert_eq!(Page::recognize(path), Page::NotFound, "path {path}");
        }
    }

    #[test]
    fn test_each_path_maps_to_exactly_one_view() {
        // recognize is total: every input yields exactly one page, and the
        // table is stable for the four known top-level paths.
        let table = [
            ("/", Page::Home),
            ("/resume", Page::Resume),
            ("/projects/2", Page::CaseStudy(2)),
            ("/blog/getting-started-with-react", Page::BlogPost("getting-started-with-react".to_string())),
        ];
        for (path, expected) in table {
            assert_eq!(Page::recognize(path), expected);
        }
    }
}
