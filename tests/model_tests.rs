mod common;

#[cfg(test)]
pub mod model_tests {
    use serde_json::{from_value, json, to_value, Value};

    use super::common::*;

    use copydesk::models::*;

    #[test]
    fn test_service_attributes_deserialize_success() {
        let value = json!({
            "id": 1,
            "attributes": {
                "Slug": "cloud-migration",
                "Title": "Cloud Migration",
                "Description": "**Move**",
                "CTAText": "Get Started",
                "CTALink": "/contact",
                "publishedAt": "2026-03-05T10:00:00.000Z",
                "BreadCrumb": [
                    {"Label": "Home", "Link": "/", "isMegamenu": false}
                ],
                "Image": {
                    "data": {
                        "id": 11,
                        "attributes": {
                            "url": "/uploads/cloud.png",
                            "alternativeText": "Cloud"
                        }
                    }
                },
                "HeroCard": [{"Title": "Fast", "Description": "Weeks"}],
                "SectionFourCard": [{"Metric": "99.9%", "Description": "Uptime"}]
            }
        });

        let record: Record<ServiceAttributes> =
            from_value(value).expect("Failed to decode service record");
        let attrs = &record.attributes;

        assert_eq!(record.id, 1);
        assert_eq!(attrs.slug, "cloud-migration");
        assert_eq!(attrs.cta_text, "Get Started");
        assert_eq!(
            attrs.published_at,
            Some(parse_time("2026-03-05T10:00:00Z"))
        );
        assert_eq!(attrs.bread_crumb[0].label, "Home");
        assert_eq!(attrs.image.id(), Some(11));
        assert_eq!(attrs.image.url(), Some("/uploads/cloud.png"));
        assert_eq!(attrs.image.alt(), Some("Cloud"));
        assert_eq!(attrs.hero_card[0].title, "Fast");
        assert_eq!(attrs.section_four_card[0].metric, "99.9%");
        // Groups absent from the response decode as empty.
        assert!(attrs.section_two_card.is_empty());
    }

    #[test]
    fn test_service_attributes_deserialize_success_on_sparse_response() {
        let value = json!({"id": 2, "attributes": {"Title": "Bare"}});
        let record: Record<ServiceAttributes> =
            from_value(value).expect("Failed to decode sparse record");

        assert_eq!(record.attributes.title, "Bare");
        assert!(record.attributes.image.id().is_none());
        assert!(record.attributes.published_at.is_none());
    }

    #[test]
    fn test_case_study_attributes_deserialize_success() {
        let value = json!({
            "id": 3,
            "attributes": {
                "Title": "Retail Rollout",
                "Slug": "retail-rollout",
                "ShortDescription": "Scaled checkout",
                "Content": "## Results",
                "Quote": "It just worked.",
                "QuoteAuthor": "Head of Engineering",
                "Tags": [{"Name": "Retail"}],
                "Results": [
                    {"Value": "2x", "Label": "Throughput"}
                ],
                "seo": {
                    "metaTitle": "Retail Rollout",
                    "keywords": "retail",
                    "metaSocial": [
                        {
                            "socialNetwork": "Facebook",
                            "title": "Retail",
                            "description": "story"
                        }
                    ]
                }
            }
        });

        let record: Record<CaseStudyAttributes> =
            from_value(value).expect("Failed to decode case study record");
        let attrs = &record.attributes;

        assert_eq!(attrs.tags[0].name, "Retail");
        assert_eq!(attrs.results[0].value, "2x");
        assert_eq!(attrs.results[0].description, None);

        let seo = attrs.seo.as_ref().expect("seo should decode");
        assert_eq!(seo.meta_title.as_deref(), Some("Retail Rollout"));
        assert_eq!(seo.meta_description, None);
        assert_eq!(seo.meta_social[0].social_network, "Facebook");
    }

    #[test]
    fn test_news_attributes_deserialize_category_chip() {
        let value = json!({
            "id": 5,
            "attributes": {
                "Title": "Office Opening",
                "CategoryChip": {
                    "ImageLink": "Company",
                    "Image": {"data": {"id": 15, "attributes": {"url": "/uploads/chip.svg"}}}
                }
            }
        });

        let record: Record<NewsAttributes> =
            from_value(value).expect("Failed to decode news record");
        let chip = record
            .attributes
            .category_chip
            .as_ref()
            .expect("chip should decode");

        assert_eq!(chip.image_link, "Company");
        assert_eq!(chip.image.id(), Some(15));
    }

    #[test]
    fn test_collection_deserialize_success_on_missing_data() {
        let collection: Collection<ServiceAttributes> =
            from_value(json!({})).expect("Failed to decode empty collection");
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
    }

    #[test]
    fn test_document_deserialize_success_on_null_data() {
        let document: Document<ServiceAttributes> =
            from_value(json!({"data": null}))
                .expect("Failed to decode null document");
        assert!(document.data.is_none());
    }

    #[test]
    fn test_breadcrumb_serialize_skips_unset_megamenu() {
        let value = to_value(Breadcrumb::new("Home", "/"))
            .expect("Failed to encode breadcrumb");
        assert_eq!(value, json!({"Label": "Home", "Link": "/"}));

        let flagged = Breadcrumb {
            is_megamenu: Some(true),
            ..Breadcrumb::new("Services", "/services")
        };
        let value = to_value(flagged).expect("Failed to encode breadcrumb");
        assert_eq!(value["isMegamenu"], json!(true));
    }

    #[test]
    fn test_service_payload_serialize_wire_shape() {
        let payload = ServicePayload {
            title: "Cloud Migration".to_string(),
            cta_text: "Get Started".to_string(),
            image: Some(11),
            section_three_image: None,
            ..Default::default()
        };

        let value = to_value(payload).expect("Failed to encode payload");
        assert_eq!(value["Title"], json!("Cloud Migration"));
        assert_eq!(value["CTAText"], json!("Get Started"));
        assert_eq!(value["Image"], json!(11));
        // Unset relations drop off instead of serializing null.
        assert!(value.get("SectionThreeImage").is_none());
        // An unpublished save *does* send an explicit null.
        assert_eq!(value["publishedAt"], Value::Null);
        assert!(value.get("BreadCrumb").is_some());
        assert!(value.get("CTAForm").is_some());
    }

    #[test]
    fn test_seo_payload_serialize_wire_shape() {
        let payload = SeoPayload {
            meta_title: "Title".to_string(),
            meta_description: "Description".to_string(),
            keywords: "a, b".to_string(),
            meta_image: None,
            meta_social: Some(vec![MetaSocialPayload {
                social_network: "Facebook".to_string(),
                title: "T".to_string(),
                description: "D".to_string(),
                image: None,
            }]),
        };

        let value = to_value(payload).expect("Failed to encode seo");
        assert_eq!(value["metaTitle"], json!("Title"));
        assert_eq!(value["metaDescription"], json!("Description"));
        assert!(value.get("metaImage").is_none());
        assert_eq!(
            value["metaSocial"][0]["socialNetwork"],
            json!("Facebook")
        );
        assert!(value["metaSocial"][0].get("image").is_none());
    }

    #[test]
    fn test_news_payload_serialize_wire_shape() {
        let payload = NewsPayload {
            title: "Office Opening".to_string(),
            category_chip: Some(CategoryChipPayload {
                image_link: "Company".to_string(),
                image: 15,
            }),
            ..Default::default()
        };

        let value = to_value(payload).expect("Failed to encode payload");
        assert_eq!(value["CategoryChip"]["ImageLink"], json!("Company"));
        assert_eq!(value["CategoryChip"]["Image"], json!(15));
        assert!(value.get("HeroImage").is_none());
    }

    #[test]
    fn test_envelope_serialize_success() {
        let value = to_value(Envelope {
            data: json!({"Title": "x"}),
        })
        .expect("Failed to encode envelope");
        assert_eq!(value, json!({"data": {"Title": "x"}}));
    }

    #[test]
    fn test_media_file_deserialize_success() {
        let value = json!({
            "id": 21,
            "name": "team.png",
            "alternativeText": "The team",
            "mime": "image/png",
            "width": 1200,
            "height": 800,
            "url": "/uploads/team.png",
            "ext": ".png",
            "formats": {
                "thumbnail": {"url": "/uploads/thumbnail_team.png", "width": 245, "height": 163}
            },
            "createdAt": "2026-02-01T09:00:00.000Z"
        });

        let file: MediaFile =
            from_value(value).expect("Failed to decode media file");
        assert_eq!(file.name, "team.png");
        assert_eq!(file.alternative_text.as_deref(), Some("The team"));
        assert_eq!(file.thumbnail_url(), "/uploads/thumbnail_team.png");
        assert_eq!(file.created_at, Some(parse_time("2026-02-01T09:00:00Z")));
    }

    #[test]
    fn test_media_file_is_image_success() {
        assert!(get_seed_media_image().is_image());
        assert!(!get_seed_media_document().is_image());
    }

    #[test]
    fn test_media_file_thumbnail_url_falls_back_to_original() {
        let file = get_seed_media_document();
        assert_eq!(file.thumbnail_url(), "/uploads/brochure.pdf");
    }

    #[test]
    fn test_media_file_extension_success() {
        assert_eq!(get_seed_media_image().extension(), "PNG");

        let mut file = get_seed_media_document();
        file.ext = None;
        assert_eq!(file.extension(), "");
    }

    #[test]
    fn test_media_file_dimensions_success() {
        assert_eq!(
            get_seed_media_image().dimensions().as_deref(),
            Some("1200x800")
        );
        assert!(get_seed_media_document().dimensions().is_none());
    }

    #[test]
    fn test_media_file_matches_search_success_on_alt_text() {
        let file = get_seed_media_image();
        assert!(file.matches_search("TEAM"));
        assert!(file.matches_search("the team"));
        assert!(!file.matches_search("logo"));
    }

    #[test]
    fn test_absolutize_media_url_success() {
        assert_eq!(
            absolutize_media_url("http://cms.test", "/uploads/a.png"),
            "http://cms.test/uploads/a.png"
        );
        assert_eq!(
            absolutize_media_url("http://cms.test", "https://cdn.test/a.png"),
            "https://cdn.test/a.png"
        );
    }

    #[test]
    fn test_user_display_name_success() {
        assert_eq!(get_seed_user().display_name(), "Edna Mode");
    }

    #[test]
    fn test_user_display_name_falls_back_to_email() {
        let mut user = get_seed_user();
        user.firstname = String::new();
        user.lastname = " ".to_string();
        assert_eq!(user.display_name(), SEED_EMAIL);
    }

    #[test]
    fn test_image_ref_accessors_on_unset_relation() {
        let image = ImageRef::default();
        assert!(!image.is_set());
        assert_eq!(image.id(), None);
        assert_eq!(image.url(), None);
        assert_eq!(image.alt(), None);
    }
}
