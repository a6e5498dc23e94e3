use async_trait::async_trait;
use chrono::{DateTime, Utc};

use copydesk::common::GatewayError;
use copydesk::config::Config;
use copydesk::gateway::{ContentGateway, MediaUpdate, UploadFile};
use copydesk::models::*;

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub const SEED_EMAIL: &str = "edna@test.com";
pub const SEED_PASSWORD: &str = "correct-horse";

pub fn test_config() -> Config {
    Config {
        gateway_url: "http://cms.test".to_string(),
        gateway_api_token: "test-token".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
    }
}

pub fn get_seed_user() -> User {
    User {
        id: 7,
        firstname: "Edna".to_string(),
        lastname: "Mode".to_string(),
        username: None,
        email: SEED_EMAIL.to_string(),
        is_active: true,
        blocked: false,
        prefered_language: None,
        created_at: Some("2026-01-04T22:15:06.000Z".to_string()),
        updated_at: None,
    }
}

pub fn get_seed_session() -> Session {
    Session {
        token: "seed-token".to_string(),
        user: get_seed_user(),
    }
}

fn image_ref(id: i64, url: &str, alt: &str) -> ImageRef {
    ImageRef {
        data: Some(ImageEntry {
            id: Some(id),
            attributes: ImageAttributes {
                url: url.to_string(),
                alternative_text: Some(alt.to_string()),
                name: Some(url.rsplit('/').next().unwrap_or(url).to_string()),
            },
        }),
    }
}

pub fn get_seed_service_published() -> Record<ServiceAttributes> {
    Record {
        id: 1,
        attributes: ServiceAttributes {
            slug: "cloud-migration".to_string(),
            title: "Cloud Migration".to_string(),
            description: "**Move** your workloads".to_string(),
            cta_text: "Get Started".to_string(),
            cta_link: "/contact".to_string(),
            created_at: Some(parse_time("2026-03-01T09:00:00Z")),
            updated_at: Some(parse_time("2026-03-05T10:00:00Z")),
            published_at: Some(parse_time("2026-03-05T10:00:00Z")),
            image: image_ref(11, "/uploads/cloud.png", "Cloud"),
            bread_crumb: vec![
                Breadcrumb {
                    label: "Home".to_string(),
                    link: "/".to_string(),
                    is_megamenu: Some(false),
                },
                Breadcrumb {
                    label: "Services".to_string(),
                    link: "/services".to_string(),
                    is_megamenu: Some(true),
                },
            ],
            hero_card: vec![HeroCard {
                title: "Fast".to_string(),
                description: "Weeks, not months".to_string(),
            }],
            section_four_card: vec![StatCard {
                metric: "99.9%".to_string(),
                description: "Uptime".to_string(),
            }],
            section_one_card: vec![IconCard {
                title: "Assessment".to_string(),
                description: "Inventory and plan".to_string(),
                tag: "Phase 1".to_string(),
                icon: image_ref(12, "/uploads/clipboard.svg", "Clipboard"),
            }],
            ..Default::default()
        },
    }
}

pub fn get_seed_service_draft() -> Record<ServiceAttributes> {
    Record {
        id: 2,
        attributes: ServiceAttributes {
            slug: "data-platform".to_string(),
            title: "Data Platform".to_string(),
            description: "Batch and streaming".to_string(),
            created_at: Some(parse_time("2026-03-10T08:30:00Z")),
            published_at: None,
            ..Default::default()
        },
    }
}

pub fn get_seed_case_study_published() -> Record<CaseStudyAttributes> {
    Record {
        id: 3,
        attributes: CaseStudyAttributes {
            title: "Retail Rollout".to_string(),
            slug: "retail-rollout".to_string(),
            short_description: "How a <retailer> scaled checkout".to_string(),
            content: "## Results\n\n2x throughput".to_string(),
            author: Some("Priya Desai".to_string()),
            quote: Some("It just worked.".to_string()),
            quote_author: Some("Head of Engineering".to_string()),
            form_title: "Think your idea makes lives simpler?".to_string(),
            form_description: "We can help you transform your business.".to_string(),
            hero_image: image_ref(13, "/uploads/retail.png", "Storefront"),
            tags: vec![Tag {
                name: "Retail".to_string(),
            }],
            results: vec![KeyResult {
                value: "2x".to_string(),
                label: "Throughput".to_string(),
                description: None,
            }],
            seo: Some(Seo {
                meta_title: Some("Retail Rollout".to_string()),
                meta_description: None,
                keywords: Some("retail, checkout".to_string()),
                meta_image: ImageRef::default(),
                meta_social: vec![MetaSocial {
                    social_network: "Facebook".to_string(),
                    title: "Retail Rollout".to_string(),
                    description: "A scaling story".to_string(),
                    image: ImageRef::default(),
                }],
            }),
            created_at: Some(parse_time("2026-02-10T12:00:00Z")),
            updated_at: Some(parse_time("2026-02-12T12:00:00Z")),
            published_at: Some(parse_time("2026-02-12T12:00:00Z")),
            ..Default::default()
        },
    }
}

pub fn get_seed_case_study_draft() -> Record<CaseStudyAttributes> {
    Record {
        id: 4,
        attributes: CaseStudyAttributes {
            title: "Fintech Pilot".to_string(),
            slug: "fintech-pilot".to_string(),
            short_description: "A payments pilot".to_string(),
            content: "Draft notes".to_string(),
            created_at: Some(parse_time("2026-02-20T15:00:00Z")),
            published_at: None,
            ..Default::default()
        },
    }
}

pub fn get_seed_news_published() -> Record<NewsAttributes> {
    Record {
        id: 5,
        attributes: NewsAttributes {
            title: "Office Opening".to_string(),
            slug: "office-opening".to_string(),
            short_description: "New office in <Berlin>".to_string(),
            content: "We opened our Berlin office.".to_string(),
            location: "Berlin".to_string(),
            time_period: "Q1 2026".to_string(),
            hero_image: image_ref(14, "/uploads/office.png", "Office"),
            category_chip: Some(CategoryChip {
                image_link: "Company".to_string(),
                image: image_ref(15, "/uploads/chip.svg", "Chip"),
            }),
            created_at: Some(parse_time("2026-01-20T10:00:00Z")),
            published_at: Some(parse_time("2026-01-22T10:00:00Z")),
            ..Default::default()
        },
    }
}

pub fn get_seed_news_draft() -> Record<NewsAttributes> {
    Record {
        id: 6,
        attributes: NewsAttributes {
            title: "Year In Review".to_string(),
            slug: "year-in-review".to_string(),
            short_description: "Looking back".to_string(),
            content: "Draft".to_string(),
            created_at: Some(parse_time("2026-01-25T10:00:00Z")),
            published_at: None,
            ..Default::default()
        },
    }
}

pub fn get_seed_media_image() -> MediaFile {
    MediaFile {
        id: 21,
        name: "team.png".to_string(),
        alternative_text: Some("The team".to_string()),
        caption: None,
        mime: "image/png".to_string(),
        width: Some(1200),
        height: Some(800),
        url: "/uploads/team.png".to_string(),
        formats: Some(MediaFormats {
            thumbnail: Some(MediaFormat {
                url: "/uploads/thumbnail_team.png".to_string(),
                width: Some(245),
                height: Some(163),
            }),
            ..Default::default()
        }),
        ext: Some(".png".to_string()),
        size: Some(154.2),
        created_at: Some(parse_time("2026-02-01T09:00:00Z")),
        updated_at: None,
    }
}

pub fn get_seed_media_document() -> MediaFile {
    MediaFile {
        id: 22,
        name: "brochure.pdf".to_string(),
        alternative_text: None,
        caption: None,
        mime: "application/pdf".to_string(),
        width: None,
        height: None,
        url: "/uploads/brochure.pdf".to_string(),
        formats: None,
        ext: Some(".pdf".to_string()),
        size: Some(2048.0),
        created_at: Some(parse_time("2026-02-02T09:00:00Z")),
        updated_at: None,
    }
}

/// In-memory gateway for page-flow tests. Reads serve the seeded
/// records; writes succeed without changing anything.
pub struct StubGateway {
    pub services: Vec<Record<ServiceAttributes>>,
    pub case_studies: Vec<Record<CaseStudyAttributes>>,
    pub news: Vec<Record<NewsAttributes>>,
    pub media: Vec<MediaFile>,
    pub fail_lists: bool,
}

impl StubGateway {
    pub fn seeded() -> Self {
        StubGateway {
            services: vec![get_seed_service_published(), get_seed_service_draft()],
            case_studies: vec![
                get_seed_case_study_published(),
                get_seed_case_study_draft(),
            ],
            news: vec![get_seed_news_published(), get_seed_news_draft()],
            media: vec![get_seed_media_image(), get_seed_media_document()],
            fail_lists: false,
        }
    }

    /// Same seeds, but every collection read fails with a gateway error.
    pub fn with_failing_lists() -> Self {
        StubGateway {
            fail_lists: true,
            ..Self::seeded()
        }
    }

    fn list_error(&self) -> Result<(), GatewayError> {
        if self.fail_lists {
            Err(GatewayError::Http {
                status: 502,
                message: "Bad Gateway".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ContentGateway for StubGateway {
    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, GatewayError> {
        if email == SEED_EMAIL && password == SEED_PASSWORD {
            Ok(get_seed_session())
        } else {
            Err(GatewayError::Http {
                status: 400,
                message: "Invalid identifier or password".to_string(),
            })
        }
    }

    async fn logout(&self, _token: &str) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn list_services(
        &self,
    ) -> Result<Vec<Record<ServiceAttributes>>, GatewayError> {
        self.list_error()?;
        Ok(self.services.clone())
    }

    async fn get_service(
        &self,
        id: i64,
    ) -> Result<Record<ServiceAttributes>, GatewayError> {
        self.services
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(GatewayError::NotFound)
    }

    async fn create_service(
        &self,
        _payload: &ServicePayload,
    ) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn update_service(
        &self,
        id: i64,
        _payload: &ServicePayload,
    ) -> Result<(), GatewayError> {
        self.get_service(id).await.map(|_| ())
    }

    async fn list_case_studies(
        &self,
    ) -> Result<Vec<Record<CaseStudyAttributes>>, GatewayError> {
        self.list_error()?;
        Ok(self.case_studies.clone())
    }

    async fn get_case_study(
        &self,
        id: i64,
    ) -> Result<Record<CaseStudyAttributes>, GatewayError> {
        self.case_studies
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(GatewayError::NotFound)
    }

    async fn create_case_study(
        &self,
        _payload: &CaseStudyPayload,
    ) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn update_case_study(
        &self,
        id: i64,
        _payload: &CaseStudyPayload,
    ) -> Result<(), GatewayError> {
        self.get_case_study(id).await.map(|_| ())
    }

    async fn list_news(
        &self,
    ) -> Result<Vec<Record<NewsAttributes>>, GatewayError> {
        self.list_error()?;
        Ok(self.news.clone())
    }

    async fn get_news_article(
        &self,
        id: i64,
    ) -> Result<Record<NewsAttributes>, GatewayError> {
        self.news
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(GatewayError::NotFound)
    }

    async fn create_news_article(
        &self,
        _payload: &NewsPayload,
    ) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn update_news_article(
        &self,
        id: i64,
        _payload: &NewsPayload,
    ) -> Result<(), GatewayError> {
        self.get_news_article(id).await.map(|_| ())
    }

    async fn list_media(&self) -> Result<Vec<MediaFile>, GatewayError> {
        self.list_error()?;
        Ok(self.media.clone())
    }

    async fn get_media_file(
        &self,
        id: i64,
    ) -> Result<MediaFile, GatewayError> {
        self.media
            .iter()
            .find(|file| file.id == id)
            .cloned()
            .ok_or(GatewayError::NotFound)
    }

    async fn update_media_file(
        &self,
        id: i64,
        update: &MediaUpdate,
    ) -> Result<MediaFile, GatewayError> {
        let mut file = self.get_media_file(id).await?;
        file.name = update.name.clone();
        file.alternative_text = Some(update.alternative_text.clone());
        file.caption = Some(update.caption.clone());
        Ok(file)
    }

    async fn upload_files(
        &self,
        files: Vec<UploadFile>,
    ) -> Result<Vec<MediaFile>, GatewayError> {
        Ok(files
            .into_iter()
            .enumerate()
            .map(|(index, file)| MediaFile {
                id: 900 + index as i64,
                url: format!("/uploads/{}", file.file_name),
                name: file.file_name,
                alternative_text: None,
                caption: None,
                mime: file.mime,
                width: None,
                height: None,
                formats: None,
                ext: None,
                size: Some(file.bytes.len() as f64),
                created_at: None,
                updated_at: None,
            })
            .collect())
    }

    async fn fetch_url(
        &self,
        url: &str,
    ) -> Result<UploadFile, GatewayError> {
        Ok(UploadFile {
            file_name: url.rsplit('/').next().unwrap_or("remote").to_string(),
            mime: "image/png".to_string(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        })
    }
}
