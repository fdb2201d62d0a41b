use serde::{Deserialize, Serialize};

use crate::domain::asset::AssetRef;
use crate::domain::lesson::Lesson;

/// The course aggregate under construction in the wizard.
/// This is the root entity: it owns its committed lessons and, through
/// them, every attached asset.
#[derive(Debug, Default)]
pub struct Course {
    /// Course title
    pub titulo: String,

    /// Short description
    pub descricao: String,

    /// Thumbnail image, if one was selected
    pub miniatura: Option<AssetRef>,

    /// Publication status
    pub status: CourseStatus,

    /// Committed lessons, in commit order. Ordering is immutable once the
    /// content review step is reached; only per-lesson fields change.
    pub aulas: Vec<Lesson>,
}

/// Publication status of a course
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    #[default]
    Ativo,
    Inativo,
}

impl Course {
    /// Defaults for a freshly mounted wizard
    pub fn new() -> Self {
        Self::default()
    }
}

impl CourseStatus {
    /// Parse the wire representation. Unknown values are None; the caller
    /// decides whether that is an error.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Active" => Some(CourseStatus::Ativo),
            "Inactive" => Some(CourseStatus::Inativo),
            _ => None,
        }
    }
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseStatus::Ativo => write!(f, "Active"),
            CourseStatus::Inativo => write!(f, "Inactive"),
        }
    }
}
