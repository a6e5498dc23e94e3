use serde::{Deserialize, Serialize};

// Shared breadcrumb component. Services round-trip `isMegamenu`; the
// other types never send it, so it stays off the wire when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breadcrumb {
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "isMegamenu", skip_serializing_if = "Option::is_none")]
    pub is_megamenu: Option<bool>,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Breadcrumb {
            label: label.into(),
            link: link.into(),
            is_megamenu: None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.label.trim().is_empty() && self.link.trim().is_empty()
    }

    pub fn megamenu(&self) -> bool {
        self.is_megamenu.unwrap_or(false)
    }
}
