use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Breadcrumb, ImageRef, Seo, SeoPayload};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NewsAttributes {
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub content: String,
    pub location: String,
    pub time_period: String,
    pub bread_crumb: Vec<Breadcrumb>,
    pub hero_image: ImageRef,
    pub cover_image: ImageRef,
    pub category_chip: Option<CategoryChip>,
    #[serde(rename = "seo")]
    pub seo: Option<Seo>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CategoryChip {
    pub image_link: String,
    pub image: ImageRef,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewsPayload {
    pub title: String,
    pub slug: String,
    pub location: String,
    pub time_period: String,
    pub short_description: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_chip: Option<CategoryChipPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bread_crumb: Option<Vec<Breadcrumb>>,
    #[serde(rename = "seo")]
    pub seo: SeoPayload,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryChipPayload {
    pub image_link: String,
    pub image: i64,
}
