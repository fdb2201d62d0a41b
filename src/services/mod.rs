// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod lesson_service;
pub mod wizard_service;
pub mod wizard_state;


// Re-export all services and their types
pub use wizard_service::CourseWizard;

pub use wizard_state::{
    Applied,
    ContentField,
    CourseField,
    LessonField,
    WizardEvent,
    WizardState,
    WizardStep,
};

pub use catalog_service::CourseCatalogService;

pub use lesson_service::{
    extract_youtube_video_id,
    AttachLessonRequest,
    LessonService,
};
