use crate::domain::asset::AssetRef;

/// The media payload of one lesson.
/// One instance per lesson, created empty with the lesson draft and
/// mutated field-by-field on the content review step. Never shared
/// between lessons.
#[derive(Debug, Default)]
pub struct LessonContent {
    /// Video locator (required only by final-step advisory validation)
    pub url_video: String,

    /// Free-text duration label, e.g. "1:30:00"
    pub duracao_video: String,

    /// Supplementary files. May be empty; entries need not be distinct.
    /// File-input changes replace this list wholesale.
    pub recursos: Vec<AssetRef>,

    /// Whether a free preview of this lesson is allowed
    pub permite_previa: bool,
}

impl LessonContent {
    /// Empty defaults for a fresh lesson draft
    pub fn new() -> Self {
        Self::default()
    }
}
