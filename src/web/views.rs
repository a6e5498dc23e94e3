//! View models for the detail pages and the media library: relations
//! absolutized to URLs, markdown pre-rendered, dates formatted.

use crate::editor::render_markdown;
use crate::listing::{format_detail_date, format_list_date};
use crate::models::{
    absolutize_media_url, Breadcrumb, CaseStudyAttributes, CtaForm, HeroCard, KeyResult,
    MediaFile, NewsAttributes, Record, ServiceAttributes, StatCard,
};

pub struct ServiceView {
    pub id: i64,
    pub title: String,
    pub description_html: String,
    pub image_url: Option<String>,
    pub cta_text: String,
    pub cta_link: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub hero_cards: Vec<HeroCard>,
    pub stat_cards: Vec<StatCard>,
    pub feature_cards: Vec<FeatureCardView>,
    pub cta_form: CtaForm,
    pub is_published: bool,
    pub date: String,
}

pub struct FeatureCardView {
    pub title: String,
    pub description: String,
    pub tag: String,
    pub icon_url: Option<String>,
}

pub fn service_view(record: &Record<ServiceAttributes>, base_url: &str) -> ServiceView {
    let attrs = &record.attributes;
    ServiceView {
        id: record.id,
        title: attrs.title.clone(),
        description_html: render_markdown(&attrs.description),
        image_url: attrs
            .image
            .url()
            .map(|url| absolutize_media_url(base_url, url)),
        cta_text: attrs.cta_text.clone(),
        cta_link: attrs.cta_link.clone(),
        breadcrumbs: attrs.bread_crumb.clone(),
        hero_cards: attrs.hero_card.clone(),
        stat_cards: attrs.section_four_card.clone(),
        feature_cards: attrs
            .section_one_card
            .iter()
            .map(|card| FeatureCardView {
                title: card.title.clone(),
                description: card.description.clone(),
                tag: card.tag.clone(),
                icon_url: card
                    .icon
                    .url()
                    .map(|url| absolutize_media_url(base_url, url)),
            })
            .collect(),
        cta_form: attrs.cta_form.clone(),
        is_published: attrs.published_at.is_some(),
        date: format_detail_date(attrs.published_at.or(attrs.created_at)),
    }
}

pub struct CaseStudyView {
    pub id: i64,
    pub title: String,
    pub short_description: String,
    pub content_html: String,
    pub hero_image_url: Option<String>,
    pub date: String,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub results: Vec<KeyResult>,
    pub quote: Option<String>,
    pub quote_author: Option<String>,
    pub is_published: bool,
}

pub fn case_study_view(record: &Record<CaseStudyAttributes>, base_url: &str) -> CaseStudyView {
    let attrs = &record.attributes;
    CaseStudyView {
        id: record.id,
        title: attrs.title.clone(),
        short_description: attrs.short_description.clone(),
        content_html: render_markdown(&attrs.content),
        hero_image_url: attrs
            .hero_image
            .url()
            .map(|url| absolutize_media_url(base_url, url)),
        date: format_detail_date(attrs.published_at.or(attrs.created_at)),
        author: attrs.author.clone().filter(|a| !a.trim().is_empty()),
        tags: attrs.tags.iter().map(|tag| tag.name.clone()).collect(),
        results: attrs.results.clone(),
        quote: attrs.quote.clone().filter(|q| !q.trim().is_empty()),
        quote_author: attrs.quote_author.clone(),
        is_published: attrs.published_at.is_some(),
    }
}

pub struct NewsView {
    pub id: i64,
    pub title: String,
    pub short_description: String,
    pub content_html: String,
    pub hero_image_url: Option<String>,
    pub date: String,
    pub location: String,
    pub category_chip_text: String,
    pub category_chip_image_url: Option<String>,
    pub is_published: bool,
}

pub fn news_view(record: &Record<NewsAttributes>, base_url: &str) -> NewsView {
    let attrs = &record.attributes;
    let chip = attrs.category_chip.as_ref();
    // An explicit time period wins over the publication date.
    let date = if attrs.time_period.trim().is_empty() {
        format_detail_date(attrs.published_at.or(attrs.created_at))
    } else {
        attrs.time_period.clone()
    };

    NewsView {
        id: record.id,
        title: attrs.title.clone(),
        short_description: attrs.short_description.clone(),
        content_html: render_markdown(&attrs.content),
        hero_image_url: attrs
            .hero_image
            .url()
            .map(|url| absolutize_media_url(base_url, url)),
        date,
        location: attrs.location.clone(),
        category_chip_text: chip.map(|c| c.image_link.clone()).unwrap_or_default(),
        category_chip_image_url: chip
            .and_then(|c| c.image.url())
            .map(|url| absolutize_media_url(base_url, url)),
        is_published: attrs.published_at.is_some(),
    }
}

pub struct MediaView {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub thumbnail_url: String,
    pub alternative_text: String,
    pub caption: String,
    pub extension: String,
    pub dimensions: Option<String>,
    pub date: String,
    pub is_image: bool,
}

pub fn media_view(file: &MediaFile, base_url: &str) -> MediaView {
    MediaView {
        id: file.id,
        name: file.name.clone(),
        url: absolutize_media_url(base_url, &file.url),
        thumbnail_url: absolutize_media_url(base_url, file.thumbnail_url()),
        alternative_text: file.alternative_text.clone().unwrap_or_default(),
        caption: file.caption.clone().unwrap_or_default(),
        extension: file.extension(),
        dimensions: file.dimensions(),
        date: format_list_date(file.created_at),
        is_image: file.is_image(),
    }
}
