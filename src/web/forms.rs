use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub filter: Option<String>,
    pub view: Option<String>,
}

#[derive(Deserialize)]
pub struct MediaQuery {
    pub q: Option<String>,
    pub view: Option<String>,
}

/// Picker requests name the form field the chosen file id should land
/// in; `editor` switches selection to cursor-splice mode.
#[derive(Deserialize)]
pub struct PickerQuery {
    pub target: Option<String>,
    pub editor: Option<String>,
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct MediaDetailsForm {
    pub name: String,
    pub alternative_text: Option<String>,
    pub caption: Option<String>,
}

#[derive(Deserialize)]
pub struct UrlUploadForm {
    pub url: String,
}

// The editor fragments post their placeholder back so a round-trip
// keeps the per-form wording.
#[derive(Deserialize)]
pub struct EditorActionForm {
    pub content: String,
    pub selection_start: usize,
    pub selection_end: usize,
    pub action: String,
    #[serde(default)]
    pub placeholder: String,
}

#[derive(Deserialize)]
pub struct EditorContentForm {
    pub content: String,
    #[serde(default)]
    pub placeholder: String,
}

#[derive(Deserialize)]
pub struct EditorImageForm {
    pub content: String,
    pub selection_start: usize,
    pub file_id: i64,
    #[serde(default)]
    pub placeholder: String,
}
