//! Progress animation driver
//!
//! `Animator::set_progress` runs a triangular ramp on the worker pool. The
//! worker never touches render state: every tick it posts a
//! [`ProgressUpdate`] over a channel, and the UI thread applies it through
//! [`RingProgress::apply_update`](super::RingProgress::apply_update).

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use tokio::sync::mpsc;

use super::clamp_progress;
use super::pool::{Admission, AnimationPool, PoolStats};
use super::ramp::TriangularRamp;
use crate::features::settings::{AnimationSettings, OverlapPolicy};

/// One animation tick, posted from a worker to the UI thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// Which `set_progress` call produced this value
    pub generation: u64,
    /// New progress value, never above the animation's target
    pub value: u32,
    /// Last update of this animation
    pub finished: bool,
}

/// Sender half used by animation workers
pub type UpdateSender = mpsc::UnboundedSender<ProgressUpdate>;
/// Receiver half drained on the UI thread
pub type UpdateReceiver = mpsc::UnboundedReceiver<ProgressUpdate>;

/// Create a new update channel
pub fn update_channel() -> (UpdateSender, UpdateReceiver) {
    mpsc::unbounded_channel()
}

#[derive(Debug, Default)]
struct CancelState {
    cancelled: Mutex<bool>,
    wake: Condvar,
}

/// Handle for cancelling one running animation
#[derive(Debug, Clone)]
pub struct AnimationHandle {
    generation: u64,
    target: u32,
    state: Arc<CancelState>,
}

impl AnimationHandle {
    fn new(generation: u64, target: u32) -> Self {
        Self {
            generation,
            target,
            state: Arc::new(CancelState::default()),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Target after clamping
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Stop the animation; a sleeping worker wakes up immediately
    pub fn cancel(&self) {
        *self.state.cancelled.lock() = true;
        self.state.wake.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.state.cancelled.lock()
    }

    /// Sleep for `duration` unless cancelled first.
    /// Returns `false` if the animation was cancelled.
    fn sleep(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        let mut cancelled = self.state.cancelled.lock();
        while !*cancelled {
            if self
                .state
                .wake
                .wait_until(&mut cancelled, deadline)
                .timed_out()
            {
                return !*cancelled;
            }
        }
        false
    }
}

/// Drives ring animations on a bounded worker pool
#[derive(Debug)]
pub struct Animator {
    pool: AnimationPool,
    tx: UpdateSender,
    tick_interval: Duration,
    overlap: OverlapPolicy,
    generation: u64,
    current: Option<AnimationHandle>,
}

impl Animator {
    pub fn new(settings: &AnimationSettings, tx: UpdateSender) -> Self {
        Self {
            pool: AnimationPool::new(&settings.pool),
            tx,
            tick_interval: settings.tick_interval(),
            overlap: settings.overlap,
            generation: 0,
            current: None,
        }
    }

    /// Start animating toward `target`
    ///
    /// The target is clamped to `[0, 100]`. The accumulator always starts
    /// from zero, not from the value currently shown.
    pub fn set_progress(&mut self, target: i32) -> anyhow::Result<AnimationHandle> {
        let clamped = clamp_progress(target);
        if clamped as i32 != target {
            tracing::debug!("Progress target {} clamped to {}", target, clamped);
        }

        if self.overlap == OverlapPolicy::CancelPrevious {
            self.cancel();
        }

        self.generation += 1;
        let handle = AnimationHandle::new(self.generation, clamped);

        let job_handle = handle.clone();
        let tx = self.tx.clone();
        let tick = self.tick_interval;
        let admission = self.pool.submit(move || run_ramp(job_handle, tick, tx))?;

        match admission {
            Admission::DisplacedOldest => tracing::debug!(
                "Animation {} to {} queued, an older pending animation was dropped",
                handle.generation,
                clamped
            ),
            _ => tracing::debug!(
                "Animation {} to {} admitted: {:?}",
                handle.generation,
                clamped,
                admission
            ),
        }

        self.current = Some(handle.clone());
        Ok(handle)
    }

    /// Cancel the most recent animation, if any
    pub fn cancel(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }
    }

    /// Whether the UI thread should apply this update
    ///
    /// With `CancelPrevious` only the latest generation is live; updates a
    /// cancelled worker posted before noticing are stale.
    pub fn accepts(&self, update: &ProgressUpdate) -> bool {
        match self.overlap {
            OverlapPolicy::CancelPrevious => update.generation == self.generation,
            OverlapPolicy::Enqueue => update.generation <= self.generation,
        }
    }

    /// Generation of the latest `set_progress` call, 0 before any
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stats(&self) -> &PoolStats {
        self.pool.stats()
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn run_ramp(handle: AnimationHandle, tick: Duration, tx: UpdateSender) {
    let mut ramp = TriangularRamp::new(handle.target());

    loop {
        if !handle.sleep(tick) {
            tracing::debug!(
                "Animation {} cancelled at step {}",
                handle.generation(),
                ramp.step()
            );
            return;
        }

        let Some(value) = ramp.next() else {
            return;
        };
        let update = ProgressUpdate {
            generation: handle.generation(),
            value,
            finished: ramp.is_done(),
        };
        if tx.send(update).is_err() {
            tracing::debug!("Progress receiver dropped, stopping animation");
            return;
        }
        if update.finished {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::settings::PoolSettings;

    fn fast_settings(overlap: OverlapPolicy) -> AnimationSettings {
        AnimationSettings {
            tick_interval_ms: 5,
            overlap,
            pool: PoolSettings::default(),
        }
    }

    fn recv(rx: &mut UpdateReceiver) -> ProgressUpdate {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            match rx.try_recv() {
                Ok(update) => return update,
                Err(mpsc::error::TryRecvError::Empty) if Instant::now() < deadline => {
                    std::thread::sleep(Duration::from_millis(1));
                }
                Err(e) => panic!("no progress update: {:?}", e),
            }
        }
    }

    #[test]
    fn test_ramp_values_are_posted() {
        let (tx, mut rx) = update_channel();
        let mut animator = Animator::new(&fast_settings(OverlapPolicy::CancelPrevious), tx);

        let handle = animator.set_progress(10).expect("set_progress");
        assert_eq!(handle.generation(), 1);

        let updates: Vec<ProgressUpdate> = (0..4).map(|_| recv(&mut rx)).collect();
        let values: Vec<u32> = updates.iter().map(|u| u.value).collect();
        assert_eq!(values, vec![1, 3, 6, 10]);
        assert!(updates[..3].iter().all(|u| !u.finished));
        assert!(updates[3].finished);

        std::thread::sleep(Duration::from_millis(50));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_zero_target_posts_once() {
        let (tx, mut rx) = update_channel();
        let mut animator = Animator::new(&fast_settings(OverlapPolicy::CancelPrevious), tx);

        animator.set_progress(0).expect("set_progress");
        let update = recv(&mut rx);
        assert_eq!(update.value, 0);
        assert!(update.finished);

        std::thread::sleep(Duration::from_millis(50));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_target_is_clamped() {
        let (tx, _rx) = update_channel();
        let mut animator = Animator::new(&fast_settings(OverlapPolicy::CancelPrevious), tx);

        assert_eq!(animator.set_progress(-20).expect("set_progress").target(), 0);
        assert_eq!(animator.set_progress(400).expect("set_progress").target(), 100);
    }

    #[test]
    fn test_new_target_cancels_previous() {
        let (tx, mut rx) = update_channel();
        let mut animator = Animator::new(&fast_settings(OverlapPolicy::CancelPrevious), tx);

        let first = animator.set_progress(100).expect("set_progress");
        let second = animator.set_progress(5).expect("set_progress");
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert_eq!(animator.stats().submitted(), 2);
        assert_eq!(animator.stats().discarded(), 0);

        let mut live = Vec::new();
        loop {
            let update = recv(&mut rx);
            if animator.accepts(&update) {
                live.push(update.value);
                if update.finished {
                    break;
                }
            } else {
                assert_eq!(update.generation, first.generation());
            }
        }
        assert_eq!(live, vec![1, 3, 5]);
    }

    #[test]
    fn test_enqueue_policy_keeps_previous_running() {
        let (tx, _rx) = update_channel();
        let mut animator = Animator::new(&fast_settings(OverlapPolicy::Enqueue), tx);

        let first = animator.set_progress(100).expect("set_progress");
        animator.set_progress(50).expect("set_progress");
        assert!(!first.is_cancelled());

        let stale = ProgressUpdate {
            generation: first.generation(),
            value: 3,
            finished: false,
        };
        assert!(animator.accepts(&stale));
    }

    #[test]
    fn test_drop_cancels_running_animation() {
        let (tx, _rx) = update_channel();
        let handle = {
            let mut animator = Animator::new(&AnimationSettings::default(), tx);
            animator.set_progress(100).expect("set_progress")
        };
        assert!(handle.is_cancelled());
    }
}
