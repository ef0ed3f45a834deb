//! Process-wide framework state
//!
//! Holds the observers notified when a button announces itself. The state
//! must be created with [`init`] before observers can be registered and is
//! torn down with [`shutdown`]:
//!
//! ```
//! use panelkit_widgets::framework;
//!
//! framework::init().unwrap();
//! let handle = framework::register_button_observer(|created| {
//!     println!("new button: {}", created.title);
//! })
//! .unwrap();
//! // ...
//! framework::unregister_button_observer(handle);
//! framework::shutdown().unwrap();
//! ```
//!
//! Notifying while the framework is not initialized does nothing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rustc_hash::FxHashMap;

use crate::error::{FrameworkError, Result};
use crate::widget::WidgetId;

static FRAMEWORK: RwLock<Option<FrameworkState>> = RwLock::new(None);

static NEXT_OBSERVER: AtomicU64 = AtomicU64::new(1);

type ButtonObserver = Arc<dyn Fn(&ButtonCreated) + Send + Sync>;

/// Payload delivered to button observers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonCreated {
    pub id: WidgetId,
    pub title: String,
}

/// Registration handle returned by [`register_button_observer`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

#[derive(Default)]
struct FrameworkState {
    button_observers: FxHashMap<ObserverHandle, ButtonObserver>,
}

fn read_state() -> RwLockReadGuard<'static, Option<FrameworkState>> {
    FRAMEWORK.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_state() -> RwLockWriteGuard<'static, Option<FrameworkState>> {
    FRAMEWORK.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Create the framework state
pub fn init() -> Result<()> {
    let mut state = write_state();
    if state.is_some() {
        return Err(FrameworkError::AlreadyInitialized);
    }
    *state = Some(FrameworkState::default());
    tracing::debug!("framework initialized");
    Ok(())
}

/// Drop the framework state and every registered observer
pub fn shutdown() -> Result<()> {
    let mut state = write_state();
    let previous = state.take().ok_or(FrameworkError::NotInitialized)?;
    tracing::debug!(
        observers = previous.button_observers.len(),
        "framework shut down"
    );
    Ok(())
}

pub fn is_initialized() -> bool {
    read_state().is_some()
}

/// Register a callback for [`ButtonCreated`] notifications
pub fn register_button_observer<F>(observer: F) -> Result<ObserverHandle>
where
    F: Fn(&ButtonCreated) + Send + Sync + 'static,
{
    let mut guard = write_state();
    let state = guard.as_mut().ok_or(FrameworkError::NotInitialized)?;
    let handle = ObserverHandle(NEXT_OBSERVER.fetch_add(1, Ordering::Relaxed));
    state.button_observers.insert(handle, Arc::new(observer));
    Ok(handle)
}

/// Remove an observer. Returns false if it was not registered.
pub fn unregister_button_observer(handle: ObserverHandle) -> bool {
    write_state()
        .as_mut()
        .is_some_and(|state| state.button_observers.remove(&handle).is_some())
}

/// Deliver `event` to every registered observer
pub fn notify_button_created(event: &ButtonCreated) {
    // Snapshot so observers may (un)register without deadlocking.
    let observers: Vec<ButtonObserver> = match read_state().as_ref() {
        Some(state) => state.button_observers.values().cloned().collect(),
        None => return,
    };

    tracing::trace!(
        title = %event.title,
        observers = observers.len(),
        "button created"
    );
    for observer in observers {
        observer(event);
    }
}
