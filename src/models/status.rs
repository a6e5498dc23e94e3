use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Published,
    Drafts,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Published => "published",
            Self::Drafts => "drafts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Published => "Published",
            Self::Drafts => "Drafts",
        }
    }

    pub fn matches(&self, is_published: bool) -> bool {
        match self {
            Self::All => true,
            Self::Published => is_published,
            Self::Drafts => !is_published,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "published" => Ok(Self::Published),
            "drafts" => Ok(Self::Drafts),
            _ => Err(format!("invalid status filter: {}", s)),
        }
    }
}
