mod common;

#[cfg(test)]
pub mod listing_tests {
    use super::common::*;

    use copydesk::listing::*;
    use copydesk::models::StatusFilter;

    const BASE: &str = "http://cms.test";

    #[test]
    fn test_status_filter_from_str_success() {
        assert_eq!("all".parse(), Ok(StatusFilter::All));
        assert_eq!("published".parse(), Ok(StatusFilter::Published));
        assert_eq!("drafts".parse(), Ok(StatusFilter::Drafts));
        assert_eq!("Published".parse(), Ok(StatusFilter::Published));
    }

    #[test]
    fn test_status_filter_from_str_fails_on_unknown() {
        assert!("archived".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_status_filter_default_is_all() {
        assert_eq!(StatusFilter::default(), StatusFilter::All);
    }

    #[test]
    fn test_status_filter_matches_success() {
        assert!(StatusFilter::All.matches(true));
        assert!(StatusFilter::All.matches(false));
        assert!(StatusFilter::Published.matches(true));
        assert!(!StatusFilter::Published.matches(false));
        assert!(StatusFilter::Drafts.matches(false));
        assert!(!StatusFilter::Drafts.matches(true));
    }

    #[test]
    fn test_matches_search_success_on_empty_needle() {
        assert!(matches_search("", "anything", "at all"));
    }

    #[test]
    fn test_matches_search_success_on_title_case_insensitive() {
        assert!(matches_search("CLOUD", "Cloud Migration", ""));
    }

    #[test]
    fn test_matches_search_success_on_description() {
        assert!(matches_search("workloads", "Cloud", "Move your workloads"));
    }

    #[test]
    fn test_matches_search_fails_on_miss() {
        assert!(!matches_search("kubernetes", "Cloud", "workloads"));
    }

    #[test]
    fn test_matches_status_success() {
        let published = Some(parse_time("2026-03-05T10:00:00Z"));
        assert!(matches_status(StatusFilter::Published, published));
        assert!(!matches_status(StatusFilter::Published, None));
        assert!(matches_status(StatusFilter::Drafts, None));
        assert!(!matches_status(StatusFilter::Drafts, published));
    }

    #[test]
    fn test_format_list_date_success() {
        let date = Some(parse_time("2026-03-05T10:00:00Z"));
        assert_eq!(format_list_date(date), "Mar 5, 2026");
        assert_eq!(format_list_date(None), "");
    }

    #[test]
    fn test_format_detail_date_success() {
        let date = Some(parse_time("2026-03-05T10:00:00Z"));
        assert_eq!(format_detail_date(date), "March 5, 2026");
    }

    #[test]
    fn test_escape_html_success() {
        assert_eq!(
            escape_html(r#"<a & "b"'>"#),
            "&lt;a &amp; &quot;b&quot;&#39;&gt;"
        );
    }

    #[test]
    fn test_resource_kind_paths_success() {
        assert_eq!(ResourceKind::Services.base_path(), "/services");
        assert_eq!(ResourceKind::CaseStudies.base_path(), "/case-studies");
        assert_eq!(ResourceKind::News.base_path(), "/news");
    }

    #[test]
    fn test_resource_kind_empty_copy_depends_on_query() {
        assert_eq!(
            ResourceKind::Services.empty_title(false),
            "No services yet."
        );
        assert_eq!(
            ResourceKind::Services.empty_title(true),
            "No services found matching your search."
        );
        assert!(ResourceKind::Services.empty_subtitle(false).is_none());
        assert!(ResourceKind::News.empty_subtitle(false).is_some());
    }

    #[test]
    fn test_service_card_success() {
        let record = get_seed_service_published();
        let card = service_card(&record, BASE);

        assert_eq!(card.id, 1);
        assert_eq!(card.href, "/services/1");
        assert_eq!(card.title, "Cloud Migration");
        assert!(card.description_html.contains("<strong>Move</strong>"));
        assert_eq!(
            card.image_url.as_deref(),
            Some("http://cms.test/uploads/cloud.png")
        );
        assert!(card.date.is_none());
    }

    #[test]
    fn test_service_card_falls_back_on_blank_title() {
        let mut record = get_seed_service_draft();
        record.attributes.title = "   ".to_string();
        let card = service_card(&record, BASE);
        assert_eq!(card.title, "Untitled Service");
    }

    #[test]
    fn test_case_study_card_uses_published_date() {
        let record = get_seed_case_study_published();
        let card = case_study_card(&record, BASE);

        assert_eq!(card.href, "/case-studies/3");
        assert_eq!(card.date.as_deref(), Some("Feb 12, 2026"));
        // Short descriptions are plain text; markup must not leak.
        assert!(card.description_html.contains("&lt;retailer&gt;"));
    }

    #[test]
    fn test_case_study_card_draft_falls_back_to_created_date() {
        let record = get_seed_case_study_draft();
        let card = case_study_card(&record, BASE);
        assert_eq!(card.date.as_deref(), Some("Feb 20, 2026"));
    }

    #[test]
    fn test_news_card_success() {
        let record = get_seed_news_published();
        let card = news_card(&record, BASE);

        assert_eq!(card.href, "/news/5");
        assert_eq!(card.title, "Office Opening");
        assert_eq!(card.date.as_deref(), Some("Jan 22, 2026"));
        assert!(card.description_html.contains("&lt;Berlin&gt;"));
        assert_eq!(
            card.image_url.as_deref(),
            Some("http://cms.test/uploads/office.png")
        );
    }
}
