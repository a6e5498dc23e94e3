use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Upload-plugin files come back flat, without the record/attributes
// envelope the content types use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFile {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "alternativeText", default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub mime: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub formats: Option<MediaFormats>,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaFormats {
    pub thumbnail: Option<MediaFormat>,
    pub small: Option<MediaFormat>,
    pub medium: Option<MediaFormat>,
    pub large: Option<MediaFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaFormat {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl MediaFile {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    pub fn thumbnail_url(&self) -> &str {
        self.formats
            .as_ref()
            .and_then(|formats| formats.thumbnail.as_ref())
            .map(|format| format.url.as_str())
            .unwrap_or(&self.url)
    }

    pub fn extension(&self) -> String {
        self.ext
            .as_deref()
            .unwrap_or("")
            .trim_start_matches('.')
            .to_uppercase()
    }

    pub fn dimensions(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(format!("{}x{}", w, h)),
            _ => None,
        }
    }

    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .alternative_text
                .as_deref()
                .map(|alt| alt.to_lowercase().contains(&needle))
                .unwrap_or(false)
    }
}

pub fn absolutize_media_url(base: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{}{}", base, url)
    }
}
