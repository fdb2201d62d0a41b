// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::DomainEvent;

pub use types::{
    // Catalog
    CourseDeleted,
    // Submission
    CourseSubmissionFailed,
    CourseSubmitted,
    // Lesson attach flow
    LessonAttached,
    // Wizard
    LessonCommitted,
    LessonDeleted,
    WizardReset,
    WizardStepChanged,
};

pub use bus::EventBus;

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
