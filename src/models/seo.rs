use serde::{Deserialize, Serialize};

use super::ImageRef;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Seo {
    #[serde(rename = "metaTitle")]
    pub meta_title: Option<String>,
    #[serde(rename = "metaDescription")]
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    #[serde(rename = "metaImage")]
    pub meta_image: ImageRef,
    #[serde(rename = "metaSocial")]
    pub meta_social: Vec<MetaSocial>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetaSocial {
    #[serde(rename = "socialNetwork")]
    pub social_network: String,
    pub title: String,
    pub description: String,
    pub image: ImageRef,
}

// Save shape: image relations flatten to ids, optional pieces drop off
// the payload instead of serializing as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeoPayload {
    #[serde(rename = "metaTitle")]
    pub meta_title: String,
    #[serde(rename = "metaDescription")]
    pub meta_description: String,
    pub keywords: String,
    #[serde(rename = "metaImage", skip_serializing_if = "Option::is_none")]
    pub meta_image: Option<i64>,
    #[serde(rename = "metaSocial", skip_serializing_if = "Option::is_none")]
    pub meta_social: Option<Vec<MetaSocialPayload>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetaSocialPayload {
    #[serde(rename = "socialNetwork")]
    pub social_network: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<i64>,
}
