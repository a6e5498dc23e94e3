use chrono::{DateTime, Utc};

use crate::cards::{apply_card_op, CardOp};
use crate::models::{Breadcrumb, CategoryChipPayload, NewsAttributes, NewsPayload, SeoPayload};

use super::{all_values, id_value, text_value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsDraft {
    pub title: String,
    pub slug: String,
    pub location: String,
    pub time_period: String,
    pub short_description: String,
    pub content: String,
    pub hero_image_id: Option<i64>,
    pub cover_image_id: Option<i64>,
    pub category_chip_text: String,
    pub category_chip_image_id: Option<i64>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub seo_title: String,
    pub seo_description: String,
    pub keywords: String,
}

fn detail_link(slug: &str) -> String {
    if slug.is_empty() {
        String::new()
    } else {
        format!("/news/{slug}")
    }
}

impl NewsDraft {
    pub fn new() -> Self {
        NewsDraft {
            breadcrumbs: vec![Breadcrumb::new("News", "/news"), Breadcrumb::new("", "")],
            ..Default::default()
        }
    }

    pub fn from_record(attrs: &NewsAttributes) -> Self {
        let breadcrumbs = if attrs.bread_crumb.is_empty() {
            vec![
                Breadcrumb::new("News", "/news"),
                Breadcrumb::new(attrs.title.clone(), detail_link(&attrs.slug)),
            ]
        } else {
            attrs
                .bread_crumb
                .iter()
                .map(|row| Breadcrumb::new(row.label.clone(), row.link.clone()))
                .collect()
        };

        let seo = attrs.seo.as_ref();
        let chip = attrs.category_chip.as_ref();
        NewsDraft {
            title: attrs.title.clone(),
            slug: attrs.slug.clone(),
            location: attrs.location.clone(),
            time_period: attrs.time_period.clone(),
            short_description: attrs.short_description.clone(),
            content: attrs.content.clone(),
            hero_image_id: attrs.hero_image.id(),
            cover_image_id: attrs.cover_image.id(),
            category_chip_text: chip.map(|c| c.image_link.clone()).unwrap_or_default(),
            category_chip_image_id: chip.and_then(|c| c.image.id()),
            breadcrumbs,
            seo_title: seo
                .and_then(|s| s.meta_title.clone())
                .unwrap_or_default(),
            seo_description: seo
                .and_then(|s| s.meta_description.clone())
                .unwrap_or_default(),
            keywords: seo.and_then(|s| s.keywords.clone()).unwrap_or_default(),
        }
    }

    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let crumb_labels = all_values(pairs, "crumb_label");
        let crumb_links = all_values(pairs, "crumb_link");
        let breadcrumbs = crumb_labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                Breadcrumb::new(*label, crumb_links.get(i).copied().unwrap_or(""))
            })
            .collect();

        NewsDraft {
            title: text_value(pairs, "title"),
            slug: text_value(pairs, "slug"),
            location: text_value(pairs, "location"),
            time_period: text_value(pairs, "time_period"),
            short_description: text_value(pairs, "short_description"),
            content: text_value(pairs, "content"),
            hero_image_id: id_value(pairs, "hero_image_id"),
            cover_image_id: id_value(pairs, "cover_image_id"),
            category_chip_text: text_value(pairs, "category_chip_text"),
            category_chip_image_id: id_value(pairs, "category_chip_image_id"),
            breadcrumbs,
            seo_title: text_value(pairs, "seo_title"),
            seo_description: text_value(pairs, "seo_description"),
            keywords: text_value(pairs, "keywords"),
        }
    }

    /// When the trailing row was never touched, name it after the
    /// article. Applied on create so a fresh form still produces a
    /// sensible trail.
    pub fn autofill_trailing_breadcrumb(&mut self) {
        if let Some(last) = self.breadcrumbs.last_mut() {
            if last.label.trim().is_empty() {
                last.label = self.title.clone();
                last.link = detail_link(&self.slug);
            }
        }
    }

    pub fn apply_op(&mut self, group: &str, op: CardOp, index: usize) -> bool {
        match group {
            "breadcrumbs" => apply_card_op(&mut self.breadcrumbs, op, index, 1),
            _ => return false,
        }
        true
    }

    pub fn to_payload(&self, publish: bool, now: DateTime<Utc>) -> NewsPayload {
        let trail: Vec<Breadcrumb> = self
            .breadcrumbs
            .iter()
            .filter(|row| !row.is_blank())
            .map(|row| Breadcrumb::new(row.label.clone(), row.link.clone()))
            .collect();

        NewsPayload {
            title: self.title.clone(),
            slug: self.slug.clone(),
            location: self.location.clone(),
            time_period: self.time_period.clone(),
            short_description: self.short_description.clone(),
            content: self.content.clone(),
            hero_image: self.hero_image_id,
            cover_image: self.cover_image_id,
            category_chip: self.category_chip_image_id.map(|id| CategoryChipPayload {
                image_link: self.category_chip_text.clone(),
                image: id,
            }),
            bread_crumb: (!trail.is_empty()).then_some(trail),
            seo: SeoPayload {
                meta_title: if self.seo_title.is_empty() {
                    self.title.clone()
                } else {
                    self.seo_title.clone()
                },
                meta_description: if self.seo_description.is_empty() {
                    self.short_description.clone()
                } else {
                    self.seo_description.clone()
                },
                keywords: self.keywords.clone(),
                meta_image: None,
                meta_social: None,
            },
            published_at: publish.then_some(now),
        }
    }
}
