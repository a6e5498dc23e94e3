use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Breadcrumb, ImageRef, Seo, SeoPayload};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CaseStudyAttributes {
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub content: String,
    pub author: Option<String>,
    pub quote: Option<String>,
    pub quote_author: Option<String>,
    pub form_title: String,
    pub form_description: String,
    pub hero_image: ImageRef,
    pub bread_crumb: Vec<Breadcrumb>,
    pub tags: Vec<Tag>,
    pub results: Vec<KeyResult>,
    #[serde(rename = "seo")]
    pub seo: Option<Seo>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Tag {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct KeyResult {
    pub value: String,
    pub label: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CaseStudyPayload {
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub content: String,
    pub form_title: String,
    pub form_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bread_crumb: Option<Vec<Breadcrumb>>,
    #[serde(rename = "seo")]
    pub seo: SeoPayload,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
}
