//! toastline library crate.
//!
//! An in-process toast notification registry:
//! - Toast records with categories and auto-dismiss delays
//! - A capped registry with idempotent removal and one-shot dismiss timers
//! - Registry configuration and its persistence
//! - Placement rules for stacking toasts on screen
//!
//! ```
//! use toastline::{ToastConfig, ToastRegistry};
//!
//! let mut registry = ToastRegistry::new(ToastConfig::default().with_max_toasts(3));
//! let id = registry.toaster().success("Copied to clipboard", None);
//! assert_eq!(registry.read().len(), 1);
//!
//! // The host loop fires timers as they come due.
//! registry.fire_due();
//! registry.remove(id);
//! assert!(registry.is_empty());
//! ```

pub mod clock;
pub mod config;
pub mod toast;
pub mod ui;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ToastConfig, ToastPosition};
pub use toast::{Toast, ToastId, ToastKind, ToastRegistry, Toaster};
