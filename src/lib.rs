//! Ring Progress - an animated circular progress indicator for iced
//!
//! The ring draws a background track and a progress arc, and animates the
//! arc toward a target value on a small background worker pool.
//!
//! # Architecture
//!
//! - **Features** (`features`): animation ramp, worker pool, render-state
//!   controller and settings. No iced widget code.
//! - **UI** (`ui`): the canvas renderer, the layout sizer and theme colors.

pub mod features;
pub mod ui;

pub use features::Settings;
pub use features::ring::{ProgressUpdate, RingProgress};
pub use ui::primitives::{MeasureSpec, ProgressRing, RingProgressWidget};
