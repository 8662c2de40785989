//! UI module for the ring progress indicator
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Low-level Widget and Canvas implementations
//! - **Widgets** (`widgets`): Ring views built from controller state
//! - **Theme** (`theme`): Colors shared by the demo window

pub mod primitives;
pub mod theme;
pub mod widgets;
