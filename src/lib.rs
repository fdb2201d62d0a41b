// src/lib.rs
// CourseHub - Course authoring console core
//
// Architecture:
// - Domain-centric: entities and invariants live in domains
// - Event-driven: services coordinate through a synchronous bus
// - Explicit: no implicit behavior, no magic
// - Headless: the wizard is a state machine, the UI renders from it
// - Boundary: the course API is an external collaborator behind a trait

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;

// ============================================================================
// BOUNDARY AND ORCHESTRATION
// ============================================================================

pub mod api;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_course,
    validate_course_for_submission,
    validate_lesson,
    validate_lesson_content,
    // Asset
    AssetRef,
    AssetSource,
    // Course
    Course,
    CourseStatus,
    DomainError,
    DomainResult,
    FieldErrors,
    // Lesson
    Lesson,
    LessonContent,
    MediaKind,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    CourseDeleted,
    CourseSubmissionFailed,
    CourseSubmitted,
    DomainEvent,
    EventBus,
    LessonAttached,
    LessonCommitted,
    LessonDeleted,
    WizardReset,
    WizardStepChanged,
};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::{
    PreviewHandle, PreviewHandleAcquired, PreviewHandleReleased, PreviewRegistry,
};

// ============================================================================
// PUBLIC API - Course API Boundary
// ============================================================================

pub use api::{Ack, CourseApi, CourseRecord, CourseSummary, DryRunCourseApi, HttpCourseApi, LessonRecord};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    extract_youtube_video_id,
    Applied,
    AttachLessonRequest,
    ContentField,
    // Catalog Service
    CourseCatalogService,
    CourseField,
    // Wizard Controller
    CourseWizard,
    // Lesson attach flow
    LessonField,
    LessonService,
    WizardEvent,
    // Wizard state machine
    WizardState,
    WizardStep,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

// Re-export application submodules
pub use application::dto;
