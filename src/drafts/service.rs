use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::{apply_card_op, CardOp};
use crate::models::{
    Breadcrumb, CtaForm, HeroCard, IconCard, IconCardPayload, ImageCard, ListBlock, MetricCard,
    ServiceAttributes, ServicePayload, SplitCard, StatCard, TextListCard,
};

use super::{all_values, flag_value, id_value, json_rows, parse_id, text_value};

/// Icon card row as edited in the form: the icon relation collapses to
/// a bare media id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconCardRow {
    pub title: String,
    pub description: String,
    pub tag: String,
    pub icon_id: Option<i64>,
}

impl IconCardRow {
    pub fn from_card(card: &IconCard) -> Self {
        IconCardRow {
            title: card.title.clone(),
            description: card.description.clone(),
            tag: card.tag.clone(),
            icon_id: card.icon.id(),
        }
    }

    pub fn to_payload(&self) -> IconCardPayload {
        IconCardPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            tag: self.tag.clone(),
            icon: self.icon_id,
        }
    }
}

/// Full editing state of the service form. Groups without dedicated
/// row editors ride through the form as hidden JSON fields so an edit
/// never drops data the page does not surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceDraft {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub cta_text: String,
    pub cta_link: String,
    pub section_one_tag: String,
    pub section_one_strong_text: String,
    pub section_one_title: String,
    pub section_one_primary_description: String,
    pub section_one_secondary_description: String,
    pub section_two_tag: String,
    pub section_two_title: String,
    pub section_two_description: String,
    pub section_three_title: String,
    pub section_four_title: String,
    pub section_six_tag: String,
    pub section_six_title: String,
    pub section_seven_tag: String,
    pub section_seven_title: String,
    pub cta_form_title: String,
    pub cta_form_description: String,
    pub image_id: Option<i64>,
    pub section_three_image_id: Option<i64>,

    pub breadcrumbs: Vec<Breadcrumb>,
    pub hero_cards: Vec<HeroCard>,
    pub stat_cards: Vec<StatCard>,
    pub icon_cards: Vec<IconCardRow>,

    pub split_cards: Vec<SplitCard>,
    pub gallery_cards: Vec<ImageCard>,
    pub six_icon_cards: Vec<IconCard>,
    pub six_list_cards: Vec<TextListCard>,
    pub metric_cards: Vec<MetricCard>,
    pub list_blocks: Vec<ListBlock>,
}

impl ServiceDraft {
    pub fn from_record(attrs: &ServiceAttributes) -> Self {
        ServiceDraft {
            slug: attrs.slug.clone(),
            title: attrs.title.clone(),
            description: attrs.description.clone(),
            cta_text: attrs.cta_text.clone(),
            cta_link: attrs.cta_link.clone(),
            section_one_tag: attrs.section_one_tag.clone(),
            section_one_strong_text: attrs.section_one_strong_text.clone(),
            section_one_title: attrs.section_one_title.clone(),
            section_one_primary_description: attrs.section_one_primary_description.clone(),
            section_one_secondary_description: attrs.section_one_secondary_description.clone(),
            section_two_tag: attrs.section_two_tag.clone(),
            section_two_title: attrs.section_two_title.clone(),
            section_two_description: attrs.section_two_description.clone(),
            section_three_title: attrs.section_three_title.clone(),
            section_four_title: attrs.section_four_title.clone(),
            section_six_tag: attrs.section_six_tag.clone(),
            section_six_title: attrs.section_six_title.clone(),
            section_seven_tag: attrs.section_seven_tag.clone(),
            section_seven_title: attrs.section_seven_title.clone(),
            cta_form_title: attrs.cta_form.title.clone(),
            cta_form_description: attrs.cta_form.description.clone(),
            image_id: attrs.image.id(),
            section_three_image_id: attrs.section_three_image.id(),
            breadcrumbs: attrs
                .bread_crumb
                .iter()
                .map(|row| Breadcrumb {
                    label: row.label.clone(),
                    link: row.link.clone(),
                    is_megamenu: Some(row.is_megamenu.unwrap_or(false)),
                })
                .collect(),
            hero_cards: attrs.hero_card.clone(),
            stat_cards: attrs.section_four_card.clone(),
            icon_cards: attrs.section_one_card.iter().map(IconCardRow::from_card).collect(),
            split_cards: attrs.section_two_card.clone(),
            gallery_cards: attrs.section_three_card.clone(),
            six_icon_cards: attrs.section_six_card_one.clone(),
            six_list_cards: attrs.section_six_card_two.clone(),
            metric_cards: attrs.section_seven_card.clone(),
            list_blocks: attrs.list_items.clone(),
        }
    }

    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let crumb_labels = all_values(pairs, "crumb_label");
        let crumb_links = all_values(pairs, "crumb_link");
        let crumb_megamenus = all_values(pairs, "crumb_megamenu");
        let breadcrumbs = crumb_labels
            .iter()
            .enumerate()
            .map(|(i, label)| Breadcrumb {
                label: (*label).to_string(),
                link: crumb_links.get(i).copied().unwrap_or("").to_string(),
                is_megamenu: Some(flag_value(crumb_megamenus.get(i).copied().unwrap_or("false"))),
            })
            .collect();

        let hero_titles = all_values(pairs, "hero_title");
        let hero_descriptions = all_values(pairs, "hero_description");
        let hero_cards = hero_titles
            .iter()
            .enumerate()
            .map(|(i, title)| HeroCard {
                title: (*title).to_string(),
                description: hero_descriptions.get(i).copied().unwrap_or("").to_string(),
            })
            .collect();

        let stat_metrics = all_values(pairs, "stat_metric");
        let stat_descriptions = all_values(pairs, "stat_description");
        let stat_cards = stat_metrics
            .iter()
            .enumerate()
            .map(|(i, metric)| StatCard {
                metric: (*metric).to_string(),
                description: stat_descriptions.get(i).copied().unwrap_or("").to_string(),
            })
            .collect();

        let card_titles = all_values(pairs, "card_title");
        let card_descriptions = all_values(pairs, "card_description");
        let card_tags = all_values(pairs, "card_tag");
        let card_icon_ids = all_values(pairs, "card_icon_id");
        let icon_cards = card_titles
            .iter()
            .enumerate()
            .map(|(i, title)| IconCardRow {
                title: (*title).to_string(),
                description: card_descriptions.get(i).copied().unwrap_or("").to_string(),
                tag: card_tags.get(i).copied().unwrap_or("").to_string(),
                icon_id: card_icon_ids.get(i).and_then(|v| parse_id(v)),
            })
            .collect();

        ServiceDraft {
            slug: text_value(pairs, "slug"),
            title: text_value(pairs, "title"),
            description: text_value(pairs, "description"),
            cta_text: text_value(pairs, "cta_text"),
            cta_link: text_value(pairs, "cta_link"),
            section_one_tag: text_value(pairs, "section_one_tag"),
            section_one_strong_text: text_value(pairs, "section_one_strong_text"),
            section_one_title: text_value(pairs, "section_one_title"),
            section_one_primary_description: text_value(pairs, "section_one_primary_description"),
            section_one_secondary_description: text_value(
                pairs,
                "section_one_secondary_description",
            ),
            section_two_tag: text_value(pairs, "section_two_tag"),
            section_two_title: text_value(pairs, "section_two_title"),
            section_two_description: text_value(pairs, "section_two_description"),
            section_three_title: text_value(pairs, "section_three_title"),
            section_four_title: text_value(pairs, "section_four_title"),
            section_six_tag: text_value(pairs, "section_six_tag"),
            section_six_title: text_value(pairs, "section_six_title"),
            section_seven_tag: text_value(pairs, "section_seven_tag"),
            section_seven_title: text_value(pairs, "section_seven_title"),
            cta_form_title: text_value(pairs, "cta_form_title"),
            cta_form_description: text_value(pairs, "cta_form_description"),
            image_id: id_value(pairs, "image_id"),
            section_three_image_id: id_value(pairs, "section_three_image_id"),
            breadcrumbs,
            hero_cards,
            stat_cards,
            icon_cards,
            split_cards: json_rows(pairs, "split_cards"),
            gallery_cards: json_rows(pairs, "gallery_cards"),
            six_icon_cards: json_rows(pairs, "six_icon_cards"),
            six_list_cards: json_rows(pairs, "six_list_cards"),
            metric_cards: json_rows(pairs, "metric_cards"),
            list_blocks: json_rows(pairs, "list_blocks"),
        }
    }

    pub fn apply_op(&mut self, group: &str, op: CardOp, index: usize) -> bool {
        match group {
            "breadcrumbs" => {
                apply_card_op(&mut self.breadcrumbs, op, index, 0);
                // New rows post the megamenu select, so keep the flag present.
                for row in &mut self.breadcrumbs {
                    row.is_megamenu.get_or_insert(false);
                }
            }
            "hero-cards" => apply_card_op(&mut self.hero_cards, op, index, 0),
            "stat-cards" => apply_card_op(&mut self.stat_cards, op, index, 0),
            "icon-cards" => apply_card_op(&mut self.icon_cards, op, index, 0),
            _ => return false,
        }
        true
    }

    pub fn to_payload(&self, publish: bool, now: DateTime<Utc>) -> ServicePayload {
        ServicePayload {
            slug: self.slug.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            cta_text: self.cta_text.clone(),
            cta_link: self.cta_link.clone(),
            section_one_tag: self.section_one_tag.clone(),
            section_one_strong_text: self.section_one_strong_text.clone(),
            section_one_title: self.section_one_title.clone(),
            section_one_primary_description: self.section_one_primary_description.clone(),
            section_one_secondary_description: self.section_one_secondary_description.clone(),
            section_two_tag: self.section_two_tag.clone(),
            section_two_title: self.section_two_title.clone(),
            section_two_description: self.section_two_description.clone(),
            section_three_title: self.section_three_title.clone(),
            section_four_title: self.section_four_title.clone(),
            section_six_tag: self.section_six_tag.clone(),
            section_six_title: self.section_six_title.clone(),
            section_seven_tag: self.section_seven_tag.clone(),
            section_seven_title: self.section_seven_title.clone(),
            bread_crumb: self.breadcrumbs.clone(),
            hero_card: self.hero_cards.clone(),
            section_four_card: self.stat_cards.clone(),
            cta_form: CtaForm {
                title: self.cta_form_title.clone(),
                description: self.cta_form_description.clone(),
            },
            image: self.image_id,
            section_three_image: self.section_three_image_id,
            section_one_card: self.icon_cards.iter().map(IconCardRow::to_payload).collect(),
            section_two_card: self.split_cards.iter().map(SplitCard::to_payload).collect(),
            section_three_card: self.gallery_cards.iter().map(ImageCard::to_payload).collect(),
            section_six_card_one: self.six_icon_cards.iter().map(IconCard::to_payload).collect(),
            section_six_card_two: self.six_list_cards.clone(),
            section_seven_card: self.metric_cards.clone(),
            list_items: self.list_blocks.iter().map(ListBlock::to_payload).collect(),
            published_at: publish.then_some(now),
        }
    }

    pub fn split_cards_json(&self) -> String {
        super::group_json(&self.split_cards)
    }

    pub fn gallery_cards_json(&self) -> String {
        super::group_json(&self.gallery_cards)
    }

    pub fn six_icon_cards_json(&self) -> String {
        super::group_json(&self.six_icon_cards)
    }

    pub fn six_list_cards_json(&self) -> String {
        super::group_json(&self.six_list_cards)
    }

    pub fn metric_cards_json(&self) -> String {
        super::group_json(&self.metric_cards)
    }

    pub fn list_blocks_json(&self) -> String {
        super::group_json(&self.list_blocks)
    }
}
