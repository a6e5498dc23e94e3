use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Breadcrumb, ImageRef};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ServiceAttributes {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "CTAText")]
    pub cta_text: String,
    #[serde(rename = "CTALink")]
    pub cta_link: String,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,

    pub section_one_tag: String,
    pub section_one_title: String,
    pub section_one_strong_text: String,
    pub section_one_primary_description: String,
    pub section_one_secondary_description: String,

    pub section_two_tag: String,
    pub section_two_title: String,
    pub section_two_description: String,

    pub section_three_title: String,
    pub section_three_image: ImageRef,

    pub section_four_title: String,

    pub section_six_tag: String,
    pub section_six_title: String,

    pub section_seven_tag: String,
    pub section_seven_title: String,

    #[serde(rename = "CTAForm")]
    pub cta_form: CtaForm,
    pub bread_crumb: Vec<Breadcrumb>,
    pub image: ImageRef,

    pub hero_card: Vec<HeroCard>,
    pub section_one_card: Vec<IconCard>,
    pub section_two_card: Vec<SplitCard>,
    pub section_three_card: Vec<ImageCard>,
    pub section_four_card: Vec<StatCard>,
    pub section_six_card_one: Vec<IconCard>,
    pub section_six_card_two: Vec<TextListCard>,
    pub section_seven_card: Vec<MetricCard>,
    pub list_items: Vec<ListBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CtaForm {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HeroCard {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StatCard {
    pub metric: String,
    pub description: String,
}

// SectionOneCard and SectionSixCardOne share this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct IconCard {
    pub title: String,
    pub description: String,
    pub tag: String,
    pub icon: ImageRef,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SplitCard {
    pub primary_title: String,
    pub primary_description: String,
    pub secondary_title: String,
    pub secondary_description: String,
    pub primary_icon: ImageRef,
    pub secondary_icon: ImageRef,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ImageCard {
    pub title: String,
    pub sub_title: String,
    pub image: ImageRef,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TextListCard {
    pub title: String,
    pub text: Vec<TextRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MetricCard {
    pub metric: String,
    pub primary_title: String,
    pub description: String,
    pub secondary_title: String,
    pub tag_list: Vec<TextRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListBlock {
    pub primary_tag: String,
    pub title: String,
    pub description: String,
    pub secondary_tag: String,
    pub align_image_to_left: bool,
    pub image: ImageRef,
    pub card: TextListCard,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TextRow {
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServicePayload {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "CTAText")]
    pub cta_text: String,
    #[serde(rename = "CTALink")]
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
    pub bread_crumb: Vec<Breadcrumb>,
    pub hero_card: Vec<HeroCard>,
    pub section_four_card: Vec<StatCard>,
    #[serde(rename = "CTAForm")]
    pub cta_form: CtaForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_three_image: Option<i64>,
    pub section_one_card: Vec<IconCardPayload>,
    pub section_two_card: Vec<SplitCardPayload>,
    pub section_three_card: Vec<ImageCardPayload>,
    pub section_six_card_one: Vec<IconCardPayload>,
    pub section_six_card_two: Vec<TextListCard>,
    pub section_seven_card: Vec<MetricCard>,
    pub list_items: Vec<ListBlockPayload>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IconCardPayload {
    pub title: String,
    pub description: String,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SplitCardPayload {
    pub primary_title: String,
    pub primary_description: String,
    pub secondary_title: String,
    pub secondary_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_icon: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_icon: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageCardPayload {
    pub title: String,
    pub sub_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBlockPayload {
    pub primary_tag: String,
    pub title: String,
    pub description: String,
    pub secondary_tag: String,
    pub align_image_to_left: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<i64>,
    pub card: TextListCard,
}

impl IconCard {
    pub fn to_payload(&self) -> IconCardPayload {
        IconCardPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            tag: self.tag.clone(),
            icon: self.icon.id(),
        }
    }
}

impl SplitCard {
    pub fn to_payload(&self) -> SplitCardPayload {
        SplitCardPayload {
            primary_title: self.primary_title.clone(),
            primary_description: self.primary_description.clone(),
            secondary_title: self.secondary_title.clone(),
            secondary_description: self.secondary_description.clone(),
            primary_icon: self.primary_icon.id(),
            secondary_icon: self.secondary_icon.id(),
        }
    }
}

impl ImageCard {
    pub fn to_payload(&self) -> ImageCardPayload {
        ImageCardPayload {
            title: self.title.clone(),
            sub_title: self.sub_title.clone(),
            image: self.image.id(),
        }
    }
}

impl ListBlock {
    pub fn to_payload(&self) -> ListBlockPayload {
        ListBlockPayload {
            primary_tag: self.primary_tag.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            secondary_tag: self.secondary_tag.clone(),
            align_image_to_left: self.align_image_to_left,
            image: self.image.id(),
            card: self.card.clone(),
        }
    }
}
