// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod asset;
pub mod course;
pub mod lesson;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Asset Domain
pub use asset::{AssetRef, AssetSource, MediaKind};

// Course Domain
pub use course::{validate_course, validate_course_for_submission, Course, CourseStatus};

// Lesson Domain
pub use lesson::{validate_lesson, validate_lesson_content, Lesson, LessonContent};

// ============================================================================
// FIELD-LEVEL VALIDATION
// ============================================================================

use std::collections::BTreeMap;

/// Per-field validation messages, keyed by the field name the UI renders
/// them next to. Advisory in the wizard, blocking in the lesson attach flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, campo: &str, mensagem: impl Into<String>) {
        self.0.insert(campo.to_string(), mensagem.into());
    }

    pub fn get(&self, campo: &str) -> Option<&str> {
        self.0.get(campo).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn merge(&mut self, outros: FieldErrors) {
        self.0.extend(outros.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (campo, mensagem) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", campo, mensagem)?;
            first = false;
        }
        Ok(())
    }
}

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
