#[cfg(test)]
pub mod content_tests {
    use std::collections::HashSet;

    use devfolio::content::*;

    #[test]
    fn test_projects_have_unique_ids() {
        let ids: HashSet<u32> = projects().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn test_project_lookup_by_id() {
        let found = project(1).expect("project 1 exists");
        assert_eq!(found.title, "E-Commerce Platform");
        assert!(project(99).is_none());
    }

    #[test]
    fn test_every_project_renders_one_card() {
        // The grid maps records 1:1; "All" must show each exactly once.
        let all = filter_by_tag(projects(), ALL_TAG);
        assert_eq!(all.len(), projects().len());
        let ids: HashSet<u32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn test_tag_collection_starts_with_all_and_dedupes() {
        let tags = collect_tags(projects());
        assert_eq!(tags[0], ALL_TAG);
        assert_eq!(tags.iter().filter(|t| **t == "React").count(), 1);

        let unique: HashSet<&str> = tags.iter().copied().collect();
        assert_eq!(unique.len(), tags.len());
    }

    #[test]
    fn test_filter_by_tag_matches_tag_sets() {
        let react: Vec<u32> = filter_by_tag(projects(), "React")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(react, vec![1, 2, 4]);

        let css: Vec<u32> = filter_by_tag(projects(), "CSS")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(css, vec![2, 3]);
    }

    #[test]
    fn test_filter_by_unknown_tag_is_empty() {
        assert!(filter_by_tag(projects(), "Cobol").is_empty());
    }

    #[test]
    fn test_posts_are_sorted_newest_first() {
        let posts = posts();
        assert!(posts
            .windows(2)
            .all(|pair| pair[0].date >= pair[1].date));
        assert_eq!(posts[0].slug, "getting-started-with-react");
    }

    #[test]
    fn test_post_lookup_by_slug() {
        let found = post("css-grid-layout").expect("post exists");
        assert_eq!(found.title, "Building Responsive Layouts with CSS Grid");
        assert!(found.body.contains("grid-template-columns"));
    }

    #[test]
    fn test_unknown_slug_is_none() {
        assert!(post("unknown-slug").is_none());
    }

    #[test]
    fn test_case_studies_cover_first_two_projects_only() {
        assert!(case_study(1).is_some());
        assert!(case_study(2).is_some());
        assert!(case_study(3).is_none());
        assert!(case_study(4).is_none());
    }

    #[test]
    fn test_repository_seam_matches_free_functions() {
        assert_eq!(ProjectStore.list().len(), projects().len());
        assert_eq!(ProjectStore.get(&2), project(2));
        assert_eq!(PostStore.get("css-grid-layout"), post("css-grid-layout"));
        assert_eq!(CaseStudyStore.get(&3), None);
        assert_eq!(CaseStudyStore.list().len(), case_studies().len());
    }

    #[test]
    fn test_skill_category_names_are_unique() {
        let names: HashSet<&str> = skill_categories().iter().map(|c| c.name).collect();
        assert_eq!(names.len(), skill_categories().len());
    }

    #[test]
    fn test_skill_categories_are_populated() {
        for category in skill_categories() {
            assert!(!category.skills.is_empty(), "{} has no skills", category.name);
        }
    }
}
