//! Circular progress ring primitive
//!
//! Draws a full background track and a progress arc using iced's Canvas.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.

use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Point, Radians, Renderer, Size, Theme, mouse};

use crate::features::ring::TOTAL_PROGRESS;
use crate::features::settings::RingStyle;

/// Arc radius as a fraction of half the smaller side
pub const RADIUS_RATIO: f32 = 0.8;
/// The progress arc starts at 12 o'clock
pub const START_ANGLE_DEGREES: f32 = -90.0;

/// Geometry of both arcs for a given size and progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub center: Point,
    pub radius: f32,
    pub start_degrees: f32,
    /// Clockwise sweep of the progress arc
    pub sweep_degrees: f32,
}

impl RingGeometry {
    pub fn compute(size: Size, progress: u32) -> Self {
        let progress = progress.min(TOTAL_PROGRESS);
        Self {
            center: Point::new(size.width / 2.0, size.height / 2.0),
            radius: size.width.min(size.height) / 2.0 * RADIUS_RATIO,
            start_degrees: START_ANGLE_DEGREES,
            sweep_degrees: progress as f32 / TOTAL_PROGRESS as f32 * 360.0,
        }
    }

    pub fn start_angle(&self) -> Radians {
        Radians(self.start_degrees.to_radians())
    }

    pub fn end_angle(&self) -> Radians {
        Radians((self.start_degrees + self.sweep_degrees).to_radians())
    }

    /// Full background track
    pub fn track_path(&self) -> Path {
        Path::circle(self.center, self.radius)
    }

    /// Progress arc, `None` when there is nothing to sweep
    pub fn progress_path(&self) -> Option<Path> {
        if self.sweep_degrees <= 0.0 {
            return None;
        }

        Some(Path::new(|builder| {
            builder.arc(iced::widget::canvas::path::Arc {
                center: self.center,
                radius: self.radius,
                start_angle: self.start_angle(),
                end_angle: self.end_angle(),
            });
        }))
    }
}

/// Progress ring configuration
#[derive(Debug, Clone, Copy)]
pub struct ProgressRing {
    /// Progress value (0 - 100)
    pub progress: u32,
    /// Ring stroke width
    pub stroke_width: f32,
    /// Background ring color
    pub background_color: Color,
    /// Progress ring color
    pub progress_color: Color,
}

impl Default for ProgressRing {
    fn default() -> Self {
        Self::from_style(&RingStyle::default(), 0)
    }
}

impl ProgressRing {
    pub fn new(progress: u32) -> Self {
        Self {
            progress: progress.min(TOTAL_PROGRESS),
            ..Default::default()
        }
    }

    pub fn from_style(style: &RingStyle, progress: u32) -> Self {
        Self {
            progress: progress.min(TOTAL_PROGRESS),
            stroke_width: style.width,
            background_color: style.background_color.into(),
            progress_color: style.progress_color.into(),
        }
    }

    pub fn geometry(&self, size: Size) -> RingGeometry {
        RingGeometry::compute(size, self.progress)
    }
}

impl<Message> Program<Message> for ProgressRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let geometry = self.geometry(bounds.size());

        frame.stroke(
            &geometry.track_path(),
            Stroke::default()
                .with_width(self.stroke_width)
                .with_color(self.background_color),
        );

        if let Some(progress_arc) = geometry.progress_path() {
            frame.stroke(
                &progress_arc,
                Stroke::default()
                    .with_width(self.stroke_width)
                    .with_color(self.progress_color),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_radius_uses_smaller_side() {
        let geometry = RingGeometry::compute(Size::new(200.0, 100.0), 0);
        assert_eq!(geometry.center, Point::new(100.0, 50.0));
        assert_eq!(geometry.radius, 40.0);

        let geometry = RingGeometry::compute(Size::new(100.0, 100.0), 0);
        assert_eq!(geometry.radius, 40.0);
    }

    #[test]
    fn test_empty_progress_has_no_arc() {
        let geometry = RingGeometry::compute(Size::new(100.0, 100.0), 0);
        assert_eq!(geometry.sweep_degrees, 0.0);
        assert!(geometry.progress_path().is_none());
    }

    #[test]
    fn test_full_and_half_sweep() {
        let size = Size::new(100.0, 100.0);
        assert_eq!(RingGeometry::compute(size, 100).sweep_degrees, 360.0);
        assert_eq!(RingGeometry::compute(size, 50).sweep_degrees, 180.0);
        assert_eq!(RingGeometry::compute(size, 250).sweep_degrees, 360.0);
    }

    #[test]
    fn test_ring_from_style() {
        let ring = ProgressRing::from_style(&RingStyle::default(), 30);
        assert_eq!(ring.progress, 30);
        assert_eq!(ring.stroke_width, 15.0);
        assert_eq!(ring.progress_color, Color::from_rgb8(0x28, 0xC9, 0x96));
        assert_eq!(ring.background_color, Color::from_rgb8(0xC9, 0xC9, 0xC9));
    }

    proptest! {
        #[test]
        fn sweep_is_proportional_to_progress(p in 0u32..=100) {
            let geometry = RingGeometry::compute(Size::new(120.0, 80.0), p);
            prop_assert_eq!(geometry.start_degrees, -90.0);
            prop_assert_eq!(geometry.sweep_degrees, (p as f32 / 100.0) * 360.0);
            prop_assert!(geometry.end_angle().0 >= geometry.start_angle().0);
        }

        #[test]
        fn geometry_is_idempotent(
            p in 0u32..=100,
            w in 1.0f32..2000.0,
            h in 1.0f32..2000.0,
        ) {
            let ring = ProgressRing::new(p);
            prop_assert_eq!(ring.geometry(Size::new(w, h)), ring.geometry(Size::new(w, h)));
        }
    }
}
