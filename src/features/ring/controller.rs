//! Ring render state
//!
//! `RingProgress` owns everything the renderer reads. It lives on the UI
//! thread; animation workers reach it only through [`ProgressUpdate`]
//! messages handed to [`RingProgress::apply_update`].

use super::TOTAL_PROGRESS;
use super::animator::{Animator, ProgressUpdate, UpdateReceiver, update_channel};
use crate::features::settings::{AnimationSettings, RingStyle};

/// State of one ring progress indicator
#[derive(Debug)]
pub struct RingProgress {
    style: RingStyle,
    current: u32,
    animator: Animator,
    update_rx: Option<UpdateReceiver>,
}

impl RingProgress {
    pub fn new(style: RingStyle, animation: &AnimationSettings) -> Self {
        let (tx, rx) = update_channel();
        Self {
            style: style.sanitized(),
            current: 0,
            animator: Animator::new(animation, tx),
            update_rx: Some(rx),
        }
    }

    pub fn style(&self) -> &RingStyle {
        &self.style
    }

    /// Progress currently drawn, in `[0, 100]`
    pub fn progress(&self) -> u32 {
        self.current
    }

    /// Progress as a fraction of the full ring
    pub fn fraction(&self) -> f32 {
        self.current as f32 / TOTAL_PROGRESS as f32
    }

    /// Animate toward `target`
    ///
    /// Effects are asynchronous: values arrive later through the update
    /// channel. Failures are logged and leave the drawn value untouched.
    pub fn set_progress(&mut self, target: i32) {
        if let Err(e) = self.animator.set_progress(target) {
            tracing::error!("Failed to start progress animation: {:#}", e);
        }
    }

    /// Take the receiver the host drains on its UI thread
    ///
    /// Returns `None` after the first call.
    pub fn take_update_rx(&mut self) -> Option<UpdateReceiver> {
        self.update_rx.take()
    }

    /// Apply one animation tick; returns whether a redraw is needed
    pub fn apply_update(&mut self, update: ProgressUpdate) -> bool {
        if !self.animator.accepts(&update) {
            tracing::trace!(
                "Ignoring stale progress update from animation {}",
                update.generation
            );
            return false;
        }

        let value = update.value.min(TOTAL_PROGRESS);
        if update.finished {
            tracing::debug!("Animation {} settled at {}", update.generation, value);
        }
        if value == self.current {
            return false;
        }
        self.current = value;
        true
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }
}
