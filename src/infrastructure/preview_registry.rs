// src/infrastructure/preview_registry.rs
//
// Preview Handle Registry
//
// CRITICAL RULES:
// - Every preview handle lives in the table from acquire to release
// - Release is tied to handle ownership: dropping the handle releases it
// - Handles are never shared; replacing an asset replaces its handle
// - Live handles are countable so leaks are provable in tests

use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::events::EventBus;

/// Table entry for one live preview handle
#[derive(Debug, Clone)]
struct PreviewEntry {
    asset_id: Uuid,
    nome: String,
}

struct RegistryInner {
    entradas: RwLock<HashMap<Uuid, PreviewEntry>>,
    event_bus: Option<Arc<EventBus>>,
}

impl RegistryInner {
    fn release(&self, handle_id: Uuid) {
        let removido = self.entradas.write().unwrap().remove(&handle_id);

        if let Some(entrada) = removido {
            log::debug!(
                "preview handle released: {} ({})",
                handle_id,
                entrada.nome
            );
            if let Some(bus) = &self.event_bus {
                bus.emit(PreviewHandleReleased::new(handle_id, entrada.asset_id));
            }
        }
    }
}

/// The handle table behind asset previews.
///
/// INVARIANTS:
/// - Each acquire produces a unique handle id and a stable preview URL
/// - An entry exists exactly while its handle is alive
/// - Releasing twice is impossible: the handle is consumed by drop
pub struct PreviewRegistry {
    inner: Arc<RegistryInner>,
}

impl PreviewRegistry {
    /// Create a registry without event emission
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                entradas: RwLock::new(HashMap::new()),
                event_bus: None,
            }),
        }
    }

    /// Create a registry that emits lifecycle events on the given bus
    pub fn with_bus(event_bus: Arc<EventBus>) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                entradas: RwLock::new(HashMap::new()),
                event_bus: Some(event_bus),
            }),
        }
    }

    /// Acquire a preview handle for an asset.
    ///
    /// The returned handle owns the table entry: dropping it releases the
    /// entry. The URL is stable for the lifetime of the handle.
    pub fn acquire(&self, asset_id: Uuid, nome: &str) -> PreviewHandle {
        let handle_id = Uuid::new_v4();
        let url = format!("preview://{}", handle_id);

        self.inner.entradas.write().unwrap().insert(
            handle_id,
            PreviewEntry {
                asset_id,
                nome: nome.to_string(),
            },
        );

        log::debug!("preview handle acquired: {} ({})", handle_id, nome);
        if let Some(bus) = &self.inner.event_bus {
            bus.emit(PreviewHandleAcquired::new(handle_id, asset_id, nome.to_string()));
        }

        PreviewHandle {
            id: handle_id,
            url,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Number of handles currently alive
    pub fn live_count(&self) -> usize {
        self.inner.entradas.read().unwrap().len()
    }

    /// Whether a specific handle is still alive
    pub fn is_live(&self, handle_id: Uuid) -> bool {
        self.inner.entradas.read().unwrap().contains_key(&handle_id)
    }
}

impl Default for PreviewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Shared reference semantics, like the bus
impl Clone for PreviewRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// A revocable view onto an attached asset.
///
/// The handle is the unit of ownership: whoever holds it keeps the preview
/// alive, and dropping it revokes the URL. If the registry itself is gone
/// the drop is a no-op.
#[derive(Debug)]
pub struct PreviewHandle {
    id: Uuid,
    url: String,
    registry: Weak<RegistryInner>,
}

impl PreviewHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            inner.release(self.id);
        }
    }
}

// ============================================================================
// PREVIEW LIFECYCLE EVENTS
// ============================================================================

use crate::events::types::DomainEvent;
use serde::{Deserialize, Serialize};

/// Emitted when a preview handle is acquired
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewHandleAcquired {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub handle_id: Uuid,
    pub asset_id: Uuid,
    pub nome: String,
}

impl PreviewHandleAcquired {
    pub fn new(handle_id: Uuid, asset_id: Uuid, nome: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            handle_id,
            asset_id,
            nome,
        }
    }
}

impl DomainEvent for PreviewHandleAcquired {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "PreviewHandleAcquired"
    }
}

/// Emitted when a preview handle is released
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewHandleReleased {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub handle_id: Uuid,
    pub asset_id: Uuid,
}

impl PreviewHandleReleased {
    pub fn new(handle_id: Uuid, asset_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            handle_id,
            asset_id,
        }
    }
}

impl DomainEvent for PreviewHandleReleased {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "PreviewHandleReleased"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_acquire_creates_live_entry() {
        let registry = PreviewRegistry::new();
        let handle = registry.acquire(Uuid::new_v4(), "thumb.png");

        assert_eq!(registry.live_count(), 1);
        assert!(registry.is_live(handle.id()));
        assert!(handle.url().starts_with("preview://"));
    }

    #[test]
    fn test_drop_releases_entry() {
        let registry = PreviewRegistry::new();
        let handle = registry.acquire(Uuid::new_v4(), "thumb.png");
        let handle_id = handle.id();

        drop(handle);

        assert_eq!(registry.live_count(), 0);
        assert!(!registry.is_live(handle_id));
    }

    #[test]
    fn test_handles_are_independent() {
        let registry = PreviewRegistry::new();
        let asset_id = Uuid::new_v4();

        let first = registry.acquire(asset_id, "a.png");
        let second = registry.acquire(asset_id, "a.png");

        assert_ne!(first.id(), second.id());
        assert_eq!(registry.live_count(), 2);

        drop(first);
        assert_eq!(registry.live_count(), 1);
        assert!(registry.is_live(second.id()));
    }

    #[test]
    fn test_lifecycle_events_are_emitted() {
        let bus = Arc::new(EventBus::new());
        let acquired = Arc::new(AtomicUsize::new(0));
        let released = Arc::new(AtomicUsize::new(0));

        let a = Arc::clone(&acquired);
        bus.subscribe::<PreviewHandleAcquired, _>(move |_| {
            a.fetch_add(1, Ordering::SeqCst);
        });
        let r = Arc::clone(&released);
        bus.subscribe::<PreviewHandleReleased, _>(move |_| {
            r.fetch_add(1, Ordering::SeqCst);
        });

        let registry = PreviewRegistry::with_bus(bus);
        let handle = registry.acquire(Uuid::new_v4(), "thumb.png");
        drop(handle);

        assert_eq!(acquired.load(Ordering::SeqCst), 1);
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_after_registry_gone_is_noop() {
        let registry = PreviewRegistry::new();
        let handle = registry.acquire(Uuid::new_v4(), "thumb.png");

        drop(registry);
        drop(handle); // must not panic
    }
}
