//! Triangular progress ramp
//!
//! Each tick the step grows by one and the accumulator grows by the step,
//! so the ring speeds up as it fills: 1, 3, 6, 10, ... The value that would
//! reach or pass the target is clamped to it and ends the ramp.

/// Iterator over the values posted by one animation
#[derive(Debug, Clone)]
pub struct TriangularRamp {
    target: u32,
    step: u32,
    accumulator: u32,
    done: bool,
}

impl TriangularRamp {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            step: 0,
            accumulator: 0,
            done: false,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Number of ticks taken so far
    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Iterator for TriangularRamp {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.done {
            return None;
        }

        self.step += 1;
        if self.accumulator < self.target {
            self.accumulator = self.accumulator.saturating_add(self.step);
        }
        if self.accumulator >= self.target {
            self.accumulator = self.target;
            self.done = true;
        }
        Some(self.accumulator)
    }
}

impl std::iter::FusedIterator for TriangularRamp {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ramp_to_ten() {
        let values: Vec<u32> = TriangularRamp::new(10).collect();
        assert_eq!(values, vec![1, 3, 6, 10]);
    }

    #[test]
    fn test_ramp_to_zero_stops_on_first_tick() {
        let mut ramp = TriangularRamp::new(0);
        assert_eq!(ramp.next(), Some(0));
        assert!(ramp.is_done());
        assert_eq!(ramp.step(), 1);
        assert_eq!(ramp.next(), None);
    }

    #[test]
    fn test_overshoot_is_clamped() {
        let values: Vec<u32> = TriangularRamp::new(12).collect();
        assert_eq!(values, vec![1, 3, 6, 10, 12]);
    }

    #[test]
    fn test_full_ramp() {
        let values: Vec<u32> = TriangularRamp::new(100).collect();
        assert_eq!(values.len(), 14);
        assert_eq!(values[12], 91);
        assert_eq!(values.last(), Some(&100));
    }

    proptest! {
        #[test]
        fn ramp_is_increasing_and_ends_at_target(target in 0u32..=100) {
            let values: Vec<u32> = TriangularRamp::new(target).collect();
            prop_assert!(!values.is_empty());
            prop_assert_eq!(*values.last().unwrap(), target);
            prop_assert!(values.iter().all(|v| *v <= target));
            prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
