//! Toast notifications: records, timers and the registry that owns them.

mod registry;
mod timer;
mod toaster;
mod types;

pub use registry::{SubscriptionId, ToastRegistry};
pub use timer::TimerQueue;
pub use toaster::Toaster;
pub use types::{Toast, ToastId, ToastKind};
