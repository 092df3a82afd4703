// SPDX-License-Identifier: MPL-2.0
//! Prompt progress strip drawn on a canvas: one tick per prompt, the
//! current one highlighted.

use crate::ui::design_tokens::{opacity, sizing};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Gap between ticks, as a fraction of one tick slot.
const GAP_RATIO: f32 = 0.35;

pub struct ProgressTicks {
    cache: Cache,
    count: usize,
    active: usize,
}

impl ProgressTicks {
    /// `active` is clamped to the last tick.
    #[must_use]
    pub fn new(count: usize, active: usize) -> Self {
        Self {
            cache: Cache::default(),
            count,
            active: active.min(count.saturating_sub(1)),
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
            .into()
    }

    /// Horizontal extent of every tick for a strip `width` wide.
    #[must_use]
    pub fn tick_spans(&self, width: f32) -> Vec<(f32, f32)> {
        if self.count == 0 || width <= 0.0 {
            return Vec::new();
        }
        #[allow(clippy::cast_precision_loss)] // count is the prompt count
        let slot = width / self.count as f32;
        let tick_width = slot * (1.0 - GAP_RATIO);
        (0..self.count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let x = slot * i as f32 + (slot - tick_width) / 2.0;
                (x, tick_width)
            })
            .collect()
    }
}

impl<Message> canvas::Program<Message> for ProgressTicks {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let colors = ColorScheme::for_theme(theme);
        let idle = Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.text_primary
        };

        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let height = frame.height();
                for (i, (x, width)) in self.tick_spans(frame.width()).into_iter().enumerate() {
                    let color = if i == self.active {
                        colors.highlight
                    } else {
                        idle
                    };
                    let tick = Path::rectangle(Point::new(x, 0.0), Size::new(width, height));
                    frame.fill(&tick, color);
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn spans_cover_one_slot_each() {
        let ticks = ProgressTicks::new(45, 3);
        let spans = ticks.tick_spans(450.0);

        assert_eq!(spans.len(), 45);
        assert_relative_eq!(spans[0].1, 6.5, epsilon = 1e-4);
        assert_relative_eq!(spans[1].0 - spans[0].0, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn active_tick_is_clamped() {
        let ticks = ProgressTicks::new(45, 100);
        assert_eq!(ticks.active, 44);
    }

    #[test]
    fn zero_width_draws_nothing() {
        assert!(ProgressTicks::new(45, 0).tick_spans(0.0).is_empty());
    }
}
