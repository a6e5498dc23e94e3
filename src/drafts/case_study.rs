use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::{apply_card_op, CardOp};
use crate::models::{
    Breadcrumb, CaseStudyAttributes, CaseStudyPayload, MetaSocial, MetaSocialPayload, SeoPayload,
};

use super::{all_values, id_value, parse_id, text_value};

/// Social metadata row as edited in the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaSocialRow {
    pub social_network: String,
    pub title: String,
    pub description: String,
    pub image_id: Option<i64>,
}

impl MetaSocialRow {
    pub fn from_component(row: &MetaSocial) -> Self {
        MetaSocialRow {
            social_network: row.social_network.clone(),
            title: row.title.clone(),
            description: row.description.clone(),
            image_id: row.image.id(),
        }
    }

    pub fn to_payload(&self) -> MetaSocialPayload {
        MetaSocialPayload {
            social_network: self.social_network.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseStudyDraft {
    pub title: String,
    pub slug: String,
    pub hero_image_id: Option<i64>,
    pub short_description: String,
    pub content: String,
    pub form_title: String,
    pub form_description: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub seo_title: String,
    pub seo_description: String,
    pub keywords: String,
    pub seo_image_id: Option<i64>,
    pub meta_social: Vec<MetaSocialRow>,
}

fn detail_link(slug: &str) -> String {
    if slug.is_empty() {
        String::new()
    } else {
        format!("/case-studies/{slug}")
    }
}

impl CaseStudyDraft {
    /// Blank draft with the standard breadcrumb trail stubbed in.
    pub fn new() -> Self {
        CaseStudyDraft {
            breadcrumbs: vec![
                Breadcrumb::new("Case Studies", "/case-studies"),
                Breadcrumb::new("", ""),
            ],
            ..Default::default()
        }
    }

    pub fn from_record(attrs: &CaseStudyAttributes) -> Self {
        let breadcrumbs = if attrs.bread_crumb.is_empty() {
            vec![
                Breadcrumb::new("Case Studies", "/case-studies"),
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
        CaseStudyDraft {
            title: attrs.title.clone(),
            slug: attrs.slug.clone(),
            hero_image_id: attrs.hero_image.id(),
            short_description: attrs.short_description.clone(),
            content: attrs.content.clone(),
            form_title: attrs.form_title.clone(),
            form_description: attrs.form_description.clone(),
            breadcrumbs,
            seo_title: seo
                .and_then(|s| s.meta_title.clone())
                .unwrap_or_default(),
            seo_description: seo
                .and_then(|s| s.meta_description.clone())
                .unwrap_or_default(),
            keywords: seo.and_then(|s| s.keywords.clone()).unwrap_or_default(),
            seo_image_id: seo.and_then(|s| s.meta_image.id()),
            meta_social: seo
                .map(|s| s.meta_social.iter().map(MetaSocialRow::from_component).collect())
                .unwrap_or_default(),
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

        let social_networks = all_values(pairs, "social_network");
        let social_titles = all_values(pairs, "social_title");
        let social_descriptions = all_values(pairs, "social_description");
        let social_image_ids = all_values(pairs, "social_image_id");
        let meta_social = social_networks
            .iter()
            .enumerate()
            .map(|(i, network)| MetaSocialRow {
                social_network: (*network).to_string(),
                title: social_titles.get(i).copied().unwrap_or("").to_string(),
                description: social_descriptions.get(i).copied().unwrap_or("").to_string(),
                image_id: social_image_ids.get(i).and_then(|v| parse_id(v)),
            })
            .collect();

        CaseStudyDraft {
            title: text_value(pairs, "title"),
            slug: text_value(pairs, "slug"),
            hero_image_id: id_value(pairs, "hero_image_id"),
            short_description: text_value(pairs, "short_description"),
            content: text_value(pairs, "content"),
            form_title: text_value(pairs, "form_title"),
            form_description: text_value(pairs, "form_description"),
            breadcrumbs,
            seo_title: text_value(pairs, "seo_title"),
            seo_description: text_value(pairs, "seo_description"),
            keywords: text_value(pairs, "keywords"),
            seo_image_id: id_value(pairs, "seo_image_id"),
            meta_social,
        }
    }

    pub fn apply_op(&mut self, group: &str, op: CardOp, index: usize) -> bool {
        match group {
            // The trail always keeps at least one row.
            "breadcrumbs" => apply_card_op(&mut self.breadcrumbs, op, index, 1),
            "meta-social" => {
                apply_card_op(&mut self.meta_social, op, index, 0);
                for row in &mut self.meta_social {
                    if row.social_network.is_empty() {
                        row.social_network = String::from("Facebook");
                    }
                }
            }
            _ => return false,
        }
        true
    }

    pub fn to_payload(&self, publish: bool, now: DateTime<Utc>) -> CaseStudyPayload {
        let trail: Vec<Breadcrumb> = self
            .breadcrumbs
            .iter()
            .filter(|row| !row.is_blank())
            .map(|row| Breadcrumb::new(row.label.clone(), row.link.clone()))
            .collect();

        let meta_social = if self.meta_social.is_empty() {
            None
        } else {
            Some(
                self.meta_social
                    .iter()
                    .filter(|row| !row.social_network.is_empty() && !row.title.is_empty())
                    .map(MetaSocialRow::to_payload)
                    .collect(),
            )
        };

        CaseStudyPayload {
            title: self.title.clone(),
            slug: self.slug.clone(),
            short_description: self.short_description.clone(),
            content: self.content.clone(),
            form_title: self.form_title.clone(),
            form_description: self.form_description.clone(),
            hero_image: self.hero_image_id,
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
                meta_image: self.seo_image_id,
                meta_social,
            },
            published_at: publish.then_some(now),
        }
    }
}
