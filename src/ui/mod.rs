//! Presentation helpers consumed by whatever draws the toasts.

pub mod placement;

pub use placement::PlacementStyle;
