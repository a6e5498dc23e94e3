pub use http::HttpGateway;

mod http;

use async_trait::async_trait;

use crate::common::GatewayError;
use crate::models::{
    CaseStudyAttributes, CaseStudyPayload, MediaFile, NewsAttributes,
    NewsPayload, Record, ServiceAttributes, ServicePayload, Session,
};

#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct MediaUpdate {
    pub name: String,
    pub alternative_text: String,
    pub caption: String,
}

// Everything the panel asks of the remote CMS goes through this trait,
// so page flows can run against a stub in tests.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, GatewayError>;

    async fn logout(&self, token: &str) -> Result<(), GatewayError>;

    async fn list_services(
        &self,
    ) -> Result<Vec<Record<ServiceAttributes>>, GatewayError>;

    async fn get_service(
        &self,
        id: i64,
    ) -> Result<Record<ServiceAttributes>, GatewayError>;

    async fn create_service(
        &self,
        payload: &ServicePayload,
    ) -> Result<(), GatewayError>;

    async fn update_service(
        &self,
        id: i64,
        payload: &ServicePayload,
    ) -> Result<(), GatewayError>;

    async fn list_case_studies(
        &self,
    ) -> Result<Vec<Record<CaseStudyAttributes>>, GatewayError>;

    async fn get_case_study(
        &self,
        id: i64,
    ) -> Result<Record<CaseStudyAttributes>, GatewayError>;

    async fn create_case_study(
        &self,
        payload: &CaseStudyPayload,
    ) -> Result<(), GatewayError>;

    async fn update_case_study(
        &self,
        id: i64,
        payload: &CaseStudyPayload,
    ) -> Result<(), GatewayError>;

    async fn list_news(
        &self,
    ) -> Result<Vec<Record<NewsAttributes>>, GatewayError>;

    async fn get_news_article(
        &self,
        id: i64,
    ) -> Result<Record<NewsAttributes>, GatewayError>;

    async fn create_news_article(
        &self,
        payload: &NewsPayload,
    ) -> Result<(), GatewayError>;

    async fn update_news_article(
        &self,
        id: i64,
        payload: &NewsPayload,
    ) -> Result<(), GatewayError>;

    async fn list_media(&self) -> Result<Vec<MediaFile>, GatewayError>;

    async fn get_media_file(
        &self,
        id: i64,
    ) -> Result<MediaFile, GatewayError>;

    async fn update_media_file(
        &self,
        id: i64,
        update: &MediaUpdate,
    ) -> Result<MediaFile, GatewayError>;

    async fn upload_files(
        &self,
        files: Vec<UploadFile>,
    ) -> Result<Vec<MediaFile>, GatewayError>;

    // Used by the from-URL upload path: the panel fetches the remote
    // image itself and re-uploads the bytes.
    async fn fetch_url(
        &self,
        url: &str,
    ) -> Result<UploadFile, GatewayError>;
}
