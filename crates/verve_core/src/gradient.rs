//! Linear gradients with ordered color stops

use crate::color::Color;
use crate::geometry::Point;

/// A color stop along a gradient
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    /// Color at this stop
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop, clamping the offset into 0.0..=1.0
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// A linear gradient between two points
///
/// Stops are kept sorted by offset so sampling can walk them in order.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    /// Start point
    pub start: Point,
    /// End point
    pub end: Point,
    /// Color stops, sorted by offset
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Create an empty gradient between two points
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// A vertical gradient running from the top edge down `height` pixels
    pub fn vertical(height: f32) -> Self {
        Self::new(Point::ZERO, Point::new(0.0, height))
    }

    /// Add a color stop (builder pattern)
    pub fn stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push(GradientStop::new(offset, color));
        self.stops
            .sort_by(|a, b| a.offset.partial_cmp(&b.offset).unwrap());
        self
    }

    /// Build a gradient from an ordered color sequence with evenly spaced stops
    pub fn with_colors(start: Point, end: Point, colors: &[Color]) -> Self {
        let mut gradient = Self::new(start, end);
        let last = colors.len().saturating_sub(1).max(1) as f32;
        for (i, &color) in colors.iter().enumerate() {
            gradient.stops.push(GradientStop::new(i as f32 / last, color));
        }
        gradient
    }

    /// Sample the gradient color at a normalized position
    ///
    /// Positions outside the stop range pad with the end colors.
    pub fn sample(&self, t: f32) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::TRANSPARENT;
        };
        let last = self.stops.last().unwrap();

        let t = t.clamp(0.0, 1.0);
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        let mut prev = first;
        for stop in &self.stops {
            if stop.offset >= t {
                let span = stop.offset - prev.offset;
                if span < f32::EPSILON {
                    return stop.color;
                }
                let local = (t - prev.offset) / span;
                return Color::lerp(&prev.color, &stop.color, local);
            }
            prev = stop;
        }

        last.color
    }
}
