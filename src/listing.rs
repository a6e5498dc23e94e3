//! Shared list-page pipeline: search, status tabs and the card view
//! model the three collection pages render.

use chrono::{DateTime, Utc};

use crate::editor::render_markdown;
use crate::models::{
    absolutize_media_url, CaseStudyAttributes, NewsAttributes, Record,
    ServiceAttributes, StatusFilter,
};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ResourceKind {
    Services,
    CaseStudies,
    News,
}

impl ResourceKind {
    pub fn base_path(&self) -> &'static str {
        match self {
            Self::Services => "/services",
            Self::CaseStudies => "/case-studies",
            Self::News => "/news",
        }
    }

    pub fn page_title(&self) -> &'static str {
        match self {
            Self::Services => "Services",
            Self::CaseStudies => "Case Studies",
            Self::News => "News",
        }
    }

    pub fn page_description(&self) -> &'static str {
        match self {
            Self::Services => "Manage your service orders and requests",
            Self::CaseStudies => "Success stories and customer insights",
            Self::News => "Company news and announcements",
        }
    }

    pub fn search_placeholder(&self) -> &'static str {
        match self {
            Self::Services => "Search services...",
            Self::CaseStudies => "Search case studies...",
            Self::News => "Search news...",
        }
    }

    pub fn empty_title(&self, has_query: bool) -> &'static str {
        match (self, has_query) {
            (Self::Services, true) => {
                "No services found matching your search."
            }
            (Self::Services, false) => "No services yet.",
            (Self::CaseStudies, true) => "No case studies found.",
            (Self::CaseStudies, false) => "No case studies yet",
            (Self::News, true) => "No news found.",
            (Self::News, false) => "No news yet",
        }
    }

    pub fn empty_subtitle(&self, has_query: bool) -> Option<&'static str> {
        match (self, has_query) {
            (Self::Services, _) => None,
            (_, true) => Some("Try adjusting your search."),
            (Self::CaseStudies, false) => Some(
                "Case studies will appear here once they are published.",
            ),
            (Self::News, false) => Some(
                "News articles will appear here once they are published.",
            ),
        }
    }
}

/// One entry on a list page. `description_html` is already trusted
/// markup (rendered markdown or escaped text).
#[derive(Debug, Clone)]
pub struct ResourceCard {
    pub id: i64,
    pub href: String,
    pub title: String,
    pub description_html: String,
    pub image_url: Option<String>,
    pub date: Option<String>,
}

/// Substring match over title and description, case-insensitive. An
/// empty needle matches everything.
pub fn matches_search(needle: &str, title: &str, description: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    title.to_lowercase().contains(&needle)
        || description.to_lowercase().contains(&needle)
}

pub fn matches_status(filter: StatusFilter, published_at: Option<DateTime<Utc>>) -> bool {
    filter.matches(published_at.is_some())
}

/// Short date for list cards, e.g. "Mar 5, 2026".
pub fn format_list_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

/// Long date for detail pages, e.g. "March 5, 2026".
pub fn format_detail_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn service_card(
    record: &Record<ServiceAttributes>,
    base_url: &str,
) -> ResourceCard {
    let attrs = &record.attributes;
    let title = if attrs.title.trim().is_empty() {
        "Untitled Service".to_string()
    } else {
        attrs.title.clone()
    };

    ResourceCard {
        id: record.id,
        href: format!("/services/{}", record.id),
        title,
        description_html: render_markdown(&attrs.description),
        image_url: attrs
            .image
            .url()
            .map(|url| absolutize_media_url(base_url, url)),
        date: None,
    }
}

pub fn case_study_card(
    record: &Record<CaseStudyAttributes>,
    base_url: &str,
) -> ResourceCard {
    let attrs = &record.attributes;

    ResourceCard {
        id: record.id,
        href: format!("/case-studies/{}", record.id),
        title: attrs.title.clone(),
        description_html: escape_html(&attrs.short_description),
        image_url: attrs
            .hero_image
            .url()
            .map(|url| absolutize_media_url(base_url, url)),
        // Drafts fall back to the creation date rather than showing
        // a bogus epoch stamp.
        date: Some(format_list_date(
            attrs.published_at.or(attrs.created_at),
        )),
    }
}

pub fn news_card(
    record: &Record<NewsAttributes>,
    base_url: &str,
) -> ResourceCard {
    let attrs = &record.attributes;

    ResourceCard {
        id: record.id,
        href: format!("/news/{}", record.id),
        title: attrs.title.clone(),
        description_html: escape_html(&attrs.short_description),
        image_url: attrs
            .hero_image
            .url()
            .map(|url| absolutize_media_url(base_url, url)),
        date: Some(format_list_date(
            attrs.published_at.or(attrs.created_at),
        )),
    }
}
