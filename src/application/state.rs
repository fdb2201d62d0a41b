// src/application/state.rs

use std::sync::Arc;

use crate::api::CourseApi;
use crate::events::EventBus;
use crate::infrastructure::PreviewRegistry;
use crate::services::{CourseCatalogService, CourseWizard, LessonService};

/// Application state shared by the console.
/// All fields are Arc-wrapped for sharing across the UI boundary.
/// Wizards are NOT shared: each authoring workflow gets its own via
/// `start_wizard`.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub previews: PreviewRegistry,
    pub api: Arc<dyn CourseApi>,
    pub catalog_service: Arc<CourseCatalogService>,
    pub lesson_service: Arc<LessonService>,
}

impl AppState {
    pub fn new(api: Arc<dyn CourseApi>) -> Self {
        let event_bus = Arc::new(EventBus::new());
        let previews = PreviewRegistry::with_bus(Arc::clone(&event_bus));

        let catalog_service = Arc::new(CourseCatalogService::new(
            Arc::clone(&api),
            Arc::clone(&event_bus),
        ));
        let lesson_service = Arc::new(LessonService::new(
            Arc::clone(&api),
            Arc::clone(&event_bus),
        ));

        Self {
            event_bus,
            previews,
            api,
            catalog_service,
            lesson_service,
        }
    }

    /// Start a fresh authoring workflow with its own draft tree
    pub fn start_wizard(&self) -> CourseWizard {
        CourseWizard::new(
            Arc::clone(&self.api),
            Arc::clone(&self.event_bus),
            self.previews.clone(),
        )
    }
}
