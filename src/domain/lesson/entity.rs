use chrono::NaiveDate;

use crate::domain::asset::AssetRef;
use crate::domain::lesson::content::LessonContent;

/// One lesson within a course.
/// A single draft instance exists while the user is on the lesson-entry
/// step; committing moves it into the course's lesson list with an
/// assigned identifier and resets the draft.
#[derive(Debug, Default)]
pub struct Lesson {
    /// Lesson title
    pub titulo: String,

    /// Identifier assigned exactly once, when the draft is committed.
    /// Empty while the lesson is still a draft.
    pub id: String,

    /// Scheduled date
    pub data: Option<NaiveDate>,

    /// Instructor name
    pub instrutor: String,

    /// Thumbnail image, if one was selected
    pub miniatura: Option<AssetRef>,

    /// Free-text duration label, e.g. "45 min"
    pub duracao: String,

    /// The media payload of this lesson
    pub conteudo: LessonContent,
}

impl Lesson {
    /// A fresh draft with empty defaults and a fresh content model
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this lesson has been committed (identifier assigned)
    pub fn is_committed(&self) -> bool {
        !self.id.is_empty()
    }
}
