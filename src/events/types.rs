// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// WIZARD EVENTS
// ============================================================================

/// Emitted when the user moves between wizard steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardStepChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub de: String,
    pub para: String,
}

impl WizardStepChanged {
    pub fn new(de: String, para: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            de,
            para,
        }
    }
}

impl DomainEvent for WizardStepChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "WizardStepChanged" }
}

/// Emitted when a draft lesson is committed to the course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonCommitted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub lesson_id: String,
    pub titulo: String,
    /// 1-based position in the committed list
    pub posicao: usize,
}

impl LessonCommitted {
    pub fn new(lesson_id: String, titulo: String, posicao: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            lesson_id,
            titulo,
            posicao,
        }
    }
}

impl DomainEvent for LessonCommitted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "LessonCommitted" }
}

/// Emitted when the wizard drafts are discarded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardReset {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub aulas_descartadas: usize,
}

impl WizardReset {
    pub fn new(aulas_descartadas: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            aulas_descartadas,
        }
    }
}

impl DomainEvent for WizardReset {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "WizardReset" }
}

// ============================================================================
// SUBMISSION EVENTS
// ============================================================================

/// Emitted when the course API accepts a submitted aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSubmitted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub record_id: String,
    pub titulo: String,
    pub total_aulas: usize,
}

impl CourseSubmitted {
    pub fn new(record_id: String, titulo: String, total_aulas: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            record_id,
            titulo,
            total_aulas,
        }
    }
}

impl DomainEvent for CourseSubmitted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CourseSubmitted" }
}

/// Emitted when the course API rejects a submitted aggregate.
/// The drafts stay untouched; the message is for the global notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSubmissionFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub mensagem: String,
}

impl CourseSubmissionFailed {
    pub fn new(mensagem: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            mensagem,
        }
    }
}

impl DomainEvent for CourseSubmissionFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CourseSubmissionFailed" }
}

// ============================================================================
// LESSON ATTACH FLOW EVENTS
// ============================================================================

/// Emitted when a standalone lesson is attached to an existing course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonAttached {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub course_id: String,
    pub titulo: String,
}

impl LessonAttached {
    pub fn new(course_id: String, titulo: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            course_id,
            titulo,
        }
    }
}

impl DomainEvent for LessonAttached {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "LessonAttached" }
}

// ============================================================================
// CATALOG EVENTS
// ============================================================================

/// Emitted when a persisted course is deleted from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub course_id: String,
}

impl CourseDeleted {
    pub fn new(course_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            course_id,
        }
    }
}

impl DomainEvent for CourseDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CourseDeleted" }
}

/// Emitted when a persisted lesson is deleted from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub lesson_id: String,
}

impl LessonDeleted {
    pub fn new(lesson_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            lesson_id,
        }
    }
}

impl DomainEvent for LessonDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "LessonDeleted" }
}
