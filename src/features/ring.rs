//! Ring progress state and animation
//!
//! - `ramp`: the triangular easing sequence
//! - `pool`: bounded worker pool with discard-oldest overflow
//! - `animator`: runs ramps on the pool and posts updates over a channel
//! - `controller`: render state owned by the UI thread

pub mod animator;
pub mod controller;
pub mod pool;
pub mod ramp;

pub use animator::{
    AnimationHandle, Animator, ProgressUpdate, UpdateReceiver, UpdateSender, update_channel,
};
pub use controller::RingProgress;
pub use pool::{Admission, AnimationPool, PoolStats};
pub use ramp::TriangularRamp;

/// Denominator of the progress fraction
pub const TOTAL_PROGRESS: u32 = 100;

/// Clamp a host-supplied progress value into `[0, TOTAL_PROGRESS]`
pub fn clamp_progress(value: i32) -> u32 {
    value.clamp(0, TOTAL_PROGRESS as i32) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_progress() {
        assert_eq!(clamp_progress(-5), 0);
        assert_eq!(clamp_progress(0), 0);
        assert_eq!(clamp_progress(42), 42);
        assert_eq!(clamp_progress(100), 100);
        assert_eq!(clamp_progress(250), 100);
        assert_eq!(clamp_progress(i32::MIN), 0);
    }
}
