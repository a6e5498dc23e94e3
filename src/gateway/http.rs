use async_trait::async_trait;
use reqwest::multipart;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ContentGateway, MediaUpdate, UploadFile};
use crate::common::GatewayError;
use crate::models::{
    CaseStudyAttributes, CaseStudyPayload, Collection, Document,
    Envelope, MediaFile, NewsAttributes, NewsPayload, Record,
    ServiceAttributes, ServicePayload, Session,
};

const LOGIN_FALLBACK: &str =
    "Login failed. Please check your credentials.";

pub struct HttpGateway {
    client: Client,
    base_url: String,
    api_token: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl HttpGateway {
    pub fn new(base_url: &str, api_token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
        }
    }

    fn api_auth(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.api_token)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        fallback: &str,
    ) -> Result<T, GatewayError> {
        let response =
            self.api_auth(self.client.get(url)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(status, &body, fallback));
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn write_json<P: Serialize + ?Sized>(
        &self,
        request: RequestBuilder,
        payload: &P,
        fallback: &str,
    ) -> Result<(), GatewayError> {
        let response = self
            .api_auth(request)
            .json(&Envelope { data: payload })
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(status, &body, fallback));
        }

        Ok(())
    }
}

// The gateway wraps failures as `{ error: { message } }`, sometimes as
// a bare `{ message }`; anything else falls back to a fixed string.
fn error_from_response(
    status: StatusCode,
    body: &str,
    fallback: &str,
) -> GatewayError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|error| error.get("message"))
                .or_else(|| value.get("message"))
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| fallback.to_string());

    GatewayError::Http {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl ContentGateway for HttpGateway {
    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, GatewayError> {
        let url = format!("{}/admin/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(
                status,
                &body,
                LOGIN_FALLBACK,
            ));
        }

        let envelope: Envelope<Session> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }

    async fn logout(&self, token: &str) -> Result<(), GatewayError> {
        let url = format!("{}/admin/logout", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(
                status,
                &body,
                "Logout call failed",
            ));
        }

        Ok(())
    }

    async fn list_services(
        &self,
    ) -> Result<Vec<Record<ServiceAttributes>>, GatewayError> {
        let url = format!(
            "{}/api/services-detail?populate=*&publicationState=preview",
            self.base_url
        );
        let collection: Collection<ServiceAttributes> = self
            .get_json(&url, "Failed to fetch services detail")
            .await?;
        Ok(collection.data)
    }

    async fn get_service(
        &self,
        id: i64,
    ) -> Result<Record<ServiceAttributes>, GatewayError> {
        // The services collection answers /{id} unreliably; filter on
        // the id and take the first match instead.
        let url = format!(
            "{}/api/services-detail?filters[id][$eq]={}&populate=*&publicationState=preview",
            self.base_url, id
        );
        let collection: Collection<ServiceAttributes> = self
            .get_json(&url, "Failed to fetch service detail")
            .await?;
        collection
            .data
            .into_iter()
            .next()
            .ok_or(GatewayError::NotFound)
    }

    async fn create_service(
        &self,
        payload: &ServicePayload,
    ) -> Result<(), GatewayError> {
        let url = format!("{}/api/services-detail", self.base_url);
        self.write_json(
            self.client.post(&url),
            payload,
            "Failed to create service",
        )
        .await
    }

    async fn update_service(
        &self,
        id: i64,
        payload: &ServicePayload,
    ) -> Result<(), GatewayError> {
        let url =
            format!("{}/api/services-detail/{}", self.base_url, id);
        self.write_json(
            self.client.put(&url),
            payload,
            "Failed to update service",
        )
        .await
    }

    async fn list_case_studies(
        &self,
    ) -> Result<Vec<Record<CaseStudyAttributes>>, GatewayError> {
        let url = format!(
            "{}/api/case-studies?populate=*&publicationState=preview",
            self.base_url
        );
        let collection: Collection<CaseStudyAttributes> = self
            .get_json(&url, "Failed to fetch case studies")
            .await?;
        Ok(collection.data)
    }

    async fn get_case_study(
        &self,
        id: i64,
    ) -> Result<Record<CaseStudyAttributes>, GatewayError> {
        let url = format!(
            "{}/api/case-studies/{}?populate=*",
            self.base_url, id
        );
        let document: Document<CaseStudyAttributes> = self
            .get_json(&url, "Failed to fetch case study")
            .await?;
        document.data.ok_or(GatewayError::NotFound)
    }

    async fn create_case_study(
        &self,
        payload: &CaseStudyPayload,
    ) -> Result<(), GatewayError> {
        let url = format!("{}/api/case-studies", self.base_url);
        self.write_json(
            self.client.post(&url),
            payload,
            "Failed to create case study",
        )
        .await
    }

    async fn update_case_study(
        &self,
        id: i64,
        payload: &CaseStudyPayload,
    ) -> Result<(), GatewayError> {
        let url =
            format!("{}/api/case-studies/{}", self.base_url, id);
        self.write_json(
            self.client.put(&url),
            payload,
            "Failed to update case study",
        )
        .await
    }

    async fn list_news(
        &self,
    ) -> Result<Vec<Record<NewsAttributes>>, GatewayError> {
        let url = format!(
            "{}/api/news-lists?populate=*&publicationState=preview",
            self.base_url
        );
        let collection: Collection<NewsAttributes> =
            self.get_json(&url, "Failed to fetch news").await?;
        Ok(collection.data)
    }

    async fn get_news_article(
        &self,
        id: i64,
    ) -> Result<Record<NewsAttributes>, GatewayError> {
        let url = format!(
            "{}/api/news-lists/{}?populate=*",
            self.base_url, id
        );
        let document: Document<NewsAttributes> = self
            .get_json(&url, "Failed to fetch news article")
            .await?;
        document.data.ok_or(GatewayError::NotFound)
    }

    async fn create_news_article(
        &self,
        payload: &NewsPayload,
    ) -> Result<(), GatewayError> {
        let url = format!("{}/api/news-lists", self.base_url);
        self.write_json(
            self.client.post(&url),
            payload,
            "Failed to create news article",
        )
        .await
    }

    async fn update_news_article(
        &self,
        id: i64,
        payload: &NewsPayload,
    ) -> Result<(), GatewayError> {
        let url = format!("{}/api/news-lists/{}", self.base_url, id);
        self.write_json(
            self.client.put(&url),
            payload,
            "Failed to update news article",
        )
        .await
    }

    async fn list_media(&self) -> Result<Vec<MediaFile>, GatewayError> {
        // Flat array, no data envelope.
        let url = format!(
            "{}/api/upload/files?sort=createdAt:desc",
            self.base_url
        );
        self.get_json(&url, "Failed to fetch media files").await
    }

    async fn get_media_file(
        &self,
        id: i64,
    ) -> Result<MediaFile, GatewayError> {
        let url =
            format!("{}/api/upload/files/{}", self.base_url, id);
        self.get_json(&url, "Failed to fetch media file").await
    }

    async fn update_media_file(
        &self,
        id: i64,
        update: &MediaUpdate,
    ) -> Result<MediaFile, GatewayError> {
        let url = format!("{}/api/upload?id={}", self.base_url, id);
        let file_info = serde_json::json!({
            "name": update.name,
            "alternativeText": update.alternative_text,
            "caption": update.caption,
        });
        let form = multipart::Form::new()
            .text("fileInfo", file_info.to_string());

        let response = self
            .api_auth(self.client.post(&url))
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(
                status,
                &body,
                "Failed to update media file",
            ));
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn upload_files(
        &self,
        files: Vec<UploadFile>,
    ) -> Result<Vec<MediaFile>, GatewayError> {
        let mut form = multipart::Form::new();
        for file in files {
            let part = multipart::Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.mime)?;
            form = form.part("files", part);
        }

        let url = format!("{}/api/upload", self.base_url);
        let response = self
            .api_auth(self.client.post(&url))
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(
                status,
                &body,
                "Failed to upload file",
            ));
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_url(
        &self,
        url: &str,
    ) -> Result<UploadFile, GatewayError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(GatewayError::Http {
                status: status.as_u16(),
                message: "Failed to fetch image from URL".to_string(),
            });
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let file_name = url
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or("image")
            .to_string();
        let bytes = response.bytes().await?.to_vec();

        Ok(UploadFile {
            file_name,
            mime,
            bytes,
        })
    }
}
