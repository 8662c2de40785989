//! Ring widget with square default sizing
//!
//! A low-level widget that implements iced's `Widget` trait so the ring
//! can pick its own size: a dimension the host pins down (`Fixed`, `Fill`)
//! is honored, a dimension left open (`Shrink`) falls back to
//! [`DEFAULT_SIZE`].
//!
//! # Design
//!
//! This is a primitive component - it uses generic Message types and
//! does not depend on application-specific types.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::widget::Canvas;
use iced::{Element, Length, Rectangle, Size, Theme};

use super::progress_ring::ProgressRing;

/// Side of the ring when the host leaves the size open
pub const DEFAULT_SIZE: f32 = 100.0;

/// A host constraint on one dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The dimension must be exactly this size
    Exact(f32),
    /// The dimension may be anything up to this size
    AtMost(f32),
}

impl MeasureSpec {
    /// Map an iced length request and the available space onto a constraint
    pub fn from_length(length: Length, available: f32) -> Self {
        match length {
            Length::Fixed(size) => MeasureSpec::Exact(size),
            Length::Fill | Length::FillPortion(_) => MeasureSpec::Exact(available),
            Length::Shrink => MeasureSpec::AtMost(available),
        }
    }
}

/// Pick the measured size for a pair of constraints
pub fn measure(width: MeasureSpec, height: MeasureSpec) -> Size {
    match (width, height) {
        (MeasureSpec::AtMost(_), MeasureSpec::AtMost(_)) => Size::new(DEFAULT_SIZE, DEFAULT_SIZE),
        (MeasureSpec::AtMost(_), MeasureSpec::Exact(height)) => Size::new(DEFAULT_SIZE, height),
        (MeasureSpec::Exact(width), MeasureSpec::AtMost(_)) => Size::new(width, DEFAULT_SIZE),
        (MeasureSpec::Exact(width), MeasureSpec::Exact(height)) => Size::new(width, height),
    }
}

/// Create a ring element that sizes itself with [`measure`]
pub fn view<'a, Message: 'a>(
    ring: ProgressRing,
    width: impl Into<Length>,
    height: impl Into<Length>,
) -> Element<'a, Message> {
    RingProgressWidget::new(ring)
        .width(width)
        .height(height)
        .into()
}

/// Widget wrapping the ring canvas with its own measurement
pub struct RingProgressWidget {
    ring: ProgressRing,
    width: Length,
    height: Length,
}

impl RingProgressWidget {
    pub fn new(ring: ProgressRing) -> Self {
        Self {
            ring,
            width: Length::Shrink,
            height: Length::Shrink,
        }
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    fn build_content<'a, Message: 'a>(&self) -> Element<'a, Message> {
        Canvas::new(self.ring)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> Widget<Message, Theme, iced::Renderer> for RingProgressWidget {
    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let available = limits.max();
        let size = measure(
            MeasureSpec::from_length(self.width, available.width),
            MeasureSpec::from_length(self.height, available.height),
        );

        let mut content: Element<'_, Message> = self.build_content();
        let child_limits = layout::Limits::new(Size::ZERO, size);
        let child_node =
            content
                .as_widget_mut()
                .layout(&mut tree.children[0], renderer, &child_limits);

        layout::Node::with_children(size, vec![child_node])
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: iced::mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let content: Element<'_, Message> = self.build_content();

        if let Some(child_layout) = layout.children().next() {
            content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                child_layout,
                cursor,
                viewport,
            );
        }
    }

    fn children(&self) -> Vec<widget::Tree> {
        let content: Element<'_, Message> = self.build_content();
        vec![widget::Tree::new(&content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        let content: Element<'_, Message> = self.build_content();
        tree.diff_children(&[content]);
    }
}

impl<'a, Message: 'a> From<RingProgressWidget> for Element<'a, Message> {
    fn from(widget: RingProgressWidget) -> Self {
        Element::new(widget)
    }
}
