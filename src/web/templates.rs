use askama::Template;

use crate::drafts::{CaseStudyDraft, NewsDraft, ServiceDraft};
use crate::listing::{ResourceCard, ResourceKind};
use crate::models::StatusFilter;

use super::session::SidebarCounts;
use super::views::{CaseStudyView, MediaView, NewsView, ServiceView};

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "overview.html")]
pub struct OverviewTemplate {
    pub user_name: String,
    pub counts: SidebarCounts,
    pub active: &'static str,
    pub recent_services: Vec<ResourceCard>,
    pub recent_case_studies: Vec<ResourceCard>,
    pub recent_news: Vec<ResourceCard>,
}

#[derive(Template)]
#[template(path = "resource_list.html")]
pub struct ResourceListTemplate {
    pub user_name: String,
    pub counts: SidebarCounts,
    pub active: &'static str,
    pub kind: ResourceKind,
    pub cards: Vec<ResourceCard>,
    pub query: String,
    pub filter: StatusFilter,
    pub view: String,
}

impl ResourceListTemplate {
    // Tab and toggle links keep the other query parameters intact.
    fn filter_href(&self, filter: &str) -> String {
        format!(
            "{}?q={}&filter={}&view={}",
            self.kind.base_path(),
            urlencoding::encode(&self.query),
            filter,
            self.view
        )
    }

    fn view_href(&self, view: &str) -> String {
        format!(
            "{}?q={}&filter={}&view={}",
            self.kind.base_path(),
            urlencoding::encode(&self.query),
            self.filter.as_str(),
            view
        )
    }
}

#[derive(Template)]
#[template(path = "services/detail.html")]
pub struct ServiceDetailTemplate {
    pub user_name: String,
    pub counts: SidebarCounts,
    pub active: &'static str,
    pub item: Option<ServiceView>,
}

#[derive(Template)]
#[template(path = "case_studies/detail.html")]
pub struct CaseStudyDetailTemplate {
    pub user_name: String,
    pub counts: SidebarCounts,
    pub active: &'static str,
    pub item: Option<CaseStudyView>,
}

#[derive(Template)]
#[template(path = "news/detail.html")]
pub struct NewsDetailTemplate {
    pub user_name: String,
    pub counts: SidebarCounts,
    pub active: &'static str,
    pub item: Option<NewsView>,
}

// Form pages render the shell; the form itself is a fragment so card
// operations can swap it in place over htmx.
#[derive(Template)]
#[template(path = "form_page.html")]
pub struct FormPageTemplate {
    pub user_name: String,
    pub counts: SidebarCounts,
    pub active: &'static str,
    pub form_html: String,
}

#[derive(Template)]
#[template(path = "services/form_fields.html")]
pub struct ServiceFormFields {
    pub action: String,
    pub is_new: bool,
    pub record_id: Option<i64>,
    pub draft: ServiceDraft,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "case_studies/form_fields.html")]
pub struct CaseStudyFormFields {
    pub action: String,
    pub is_new: bool,
    pub record_id: Option<i64>,
    pub draft: CaseStudyDraft,
    pub error: Option<String>,
    pub editor_html: String,
}

#[derive(Template)]
#[template(path = "news/form_fields.html")]
pub struct NewsFormFields {
    pub action: String,
    pub is_new: bool,
    pub record_id: Option<i64>,
    pub draft: NewsDraft,
    pub error: Option<String>,
    pub editor_html: String,
}

#[derive(Template)]
#[template(path = "media/library.html")]
pub struct MediaLibraryTemplate {
    pub user_name: String,
    pub counts: SidebarCounts,
    pub active: &'static str,
    pub files: Vec<MediaView>,
    pub query: String,
    pub view: String,
}

impl MediaLibraryTemplate {
    fn view_href(&self, view: &str) -> String {
        format!("/media?q={}&view={}", urlencoding::encode(&self.query), view)
    }
}

#[derive(Template)]
#[template(path = "media/detail.html")]
pub struct MediaDetailTemplate {
    pub file: MediaView,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "media/upload.html")]
pub struct MediaUploadTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "media/picker.html")]
pub struct MediaPickerTemplate {
    pub files: Vec<MediaView>,
    pub query: String,
    pub target: String,
    pub editor: bool,
}

#[derive(Template)]
#[template(path = "editor/editor.html")]
pub struct EditorTemplate {
    pub content: String,
    pub cursor: Option<usize>,
    pub placeholder: String,
    pub close_modal: bool,
}

#[derive(Template)]
#[template(path = "editor/preview.html")]
pub struct EditorPreviewTemplate {
    pub content: String,
    pub preview_html: String,
    pub placeholder: String,
}

#[derive(Template)]
#[template(path = "placeholder.html")]
pub struct PlaceholderTemplate {
    pub user_name: String,
    pub counts: SidebarCounts,
    pub active: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub action_label: &'static str,
    pub empty_text: &'static str,
}
