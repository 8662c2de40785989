//! Composable widgets
//!
//! Bridges controller state to the primitives without any host messages.

use iced::{Element, Length};

use crate::features::ring::RingProgress;
use crate::ui::primitives::{ProgressRing, ring_sizer};

/// Ring element for the current state of `ring`
pub fn ring_progress<'a, Message: 'a>(
    ring: &RingProgress,
    width: impl Into<Length>,
    height: impl Into<Length>,
) -> Element<'a, Message> {
    ring_sizer::view(
        ProgressRing::from_style(ring.style(), ring.progress()),
        width,
        height,
    )
}
