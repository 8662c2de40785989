//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `Widget` trait or `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No host logic**: Primitives only read ring style and progress values
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//!
//! # Contents
//!
//! - [`ProgressRing`] - Track and progress arcs drawn on a Canvas
//! - [`RingProgressWidget`] - Sizes the ring from host constraints

pub mod progress_ring;
pub mod ring_sizer;

pub use progress_ring::{ProgressRing, RingGeometry};
pub use ring_sizer::{DEFAULT_SIZE, MeasureSpec, RingProgressWidget, measure};
