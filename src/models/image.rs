use serde::{Deserialize, Serialize};

// Populated media relations arrive nested; saves send back the bare
// numeric id (or omit the key entirely when unset).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub data: Option<ImageEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub attributes: ImageAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageAttributes {
    pub url: String,
    #[serde(rename = "alternativeText")]
    pub alternative_text: Option<String>,
    pub name: Option<String>,
}

impl ImageRef {
    pub fn is_set(&self) -> bool {
        self.data.is_some()
    }

    pub fn id(&self) -> Option<i64> {
        self.data.as_ref().and_then(|entry| entry.id)
    }

    pub fn url(&self) -> Option<&str> {
        self.data.as_ref().map(|entry| entry.attributes.url.as_str())
    }

    pub fn alt(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|entry| entry.attributes.alternative_text.as_deref())
    }
}
