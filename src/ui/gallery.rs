// SPDX-License-Identifier: MPL-2.0
//! Gallery view: every image of every contributor on one wall.
//!
//! Images fade in one by one after a random delay of at most
//! [`GALLERY_MAX_REVEAL_DELAY_MS`]. Hovering an image hides it for good;
//! once the visitor has hidden the whole wall the gallery reports
//! [`Event::AllHidden`].
//!
//! In a narrow window the wall becomes a slideshow over the revealed images
//! with a strip of flickering symbols underneath.

use crate::app::config::{COMPACT_WIDTH_THRESHOLD, GALLERY_MAX_REVEAL_DELAY_MS};
use crate::domain::assets::AssetLayout;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{self, Handle};
use iced::widget::{mouse_area, scrollable, text, Column, Container, Row};
use iced::{ContentFit, Element, Length};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Symbols of the compact strip.
pub const SYMBOLS: [char; 36] = [
    '¶', '•', 'ª', '∞', '¢', '°', '#', '€', '¡', '©', '§', '£', '¥', '®', '™', '±', '×', '÷', '≈',
    '≠', '≤', '≥', '∑', '∏', '∆', '∇', '∂', '∫', '√', '∴', '∵', '→', '←', '↑', '↓', '↔',
];

/// Length of the compact symbol strip.
pub const SYMBOL_COUNT: usize = 25;

/// Time between two symbol flickers.
pub const SYMBOL_INTERVAL: Duration = Duration::from_millis(800);

#[derive(Debug, Clone)]
struct Entry {
    handle: Handle,
    reveal_at: Instant,
    revealed: bool,
    hidden: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Hovered(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Every image has been hidden.
    AllHidden,
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug)]
pub struct State {
    entries: Vec<Entry>,
    /// Indices in the order they were revealed.
    revealed_order: Vec<usize>,
    hidden_count: usize,
    all_hidden_reported: bool,
    compact: bool,
    slide: usize,
    slideshow_interval: Duration,
    next_slide_at: Option<Instant>,
    symbols: Vec<char>,
    next_symbols_at: Option<Instant>,
    rng: StdRng,
}

impl State {
    /// Mounts the gallery at `now`. `seed` drives the reveal delays and the
    /// symbol strip.
    #[must_use]
    pub fn new(layout: &AssetLayout, now: Instant, slideshow_interval: Duration, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let paths = layout.gallery_images();

        let missing = paths.iter().filter(|path| !path.is_file()).count();
        if missing > 0 {
            tracing::warn!(missing, total = paths.len(), "gallery images not found");
        }

        let entries = paths
            .into_iter()
            .map(|path| Entry {
                handle: Handle::from_path(path),
                reveal_at: now
                    + Duration::from_millis(rng.random_range(0..=GALLERY_MAX_REVEAL_DELAY_MS)),
                revealed: false,
                hidden: false,
            })
            .collect();

        let symbols = (0..SYMBOL_COUNT).map(|_| random_symbol(&mut rng)).collect();

        Self {
            entries,
            revealed_order: Vec::new(),
            hidden_count: 0,
            all_hidden_reported: false,
            compact: false,
            slide: 0,
            slideshow_interval,
            next_slide_at: None,
            symbols,
            next_symbols_at: None,
            rng,
        }
    }

    /// Switches between the wall and the compact slideshow.
    pub fn set_window_width(&mut self, width: f32, now: Instant) {
        let compact = width < COMPACT_WIDTH_THRESHOLD;
        if compact == self.compact {
            return;
        }
        self.compact = compact;
        if compact {
            self.next_slide_at = Some(now + self.slideshow_interval);
            self.next_symbols_at = Some(now + SYMBOL_INTERVAL);
        } else {
            self.next_slide_at = None;
            self.next_symbols_at = None;
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Hovered(index) => self.hide(index),
        }
    }

    fn hide(&mut self, index: usize) -> Event {
        if self.compact {
            return Event::None;
        }
        let Some(entry) = self.entries.get_mut(index) else {
            return Event::None;
        };
        if entry.hidden {
            return Event::None;
        }
        entry.hidden = true;
        self.hidden_count += 1;

        if self.hidden_count == self.entries.len() && !self.all_hidden_reported {
            self.all_hidden_reported = true;
            tracing::debug!("every gallery image hidden");
            return Event::AllHidden;
        }
        Event::None
    }

    /// Advances reveals, the slideshow and the symbol strip to `now`.
    pub fn tick(&mut self, now: Instant) {
        for (index, entry) in self.entries.iter_mut().enumerate() {
            if !entry.revealed && now >= entry.reveal_at {
                entry.revealed = true;
                self.revealed_order.push(index);
            }
        }

        if let Some(at) = self.next_slide_at {
            if now >= at {
                if !self.revealed_order.is_empty() {
                    self.slide = (self.slide + 1) % self.revealed_order.len();
                }
                self.next_slide_at = Some(now + self.slideshow_interval);
            }
        }

        if let Some(at) = self.next_symbols_at {
            if now >= at {
                self.flicker_symbols();
                self.next_symbols_at = Some(now + SYMBOL_INTERVAL);
            }
        }
    }

    /// Replaces three to seven random symbols.
    fn flicker_symbols(&mut self) {
        let changes = self.rng.random_range(3..=7);
        for _ in 0..changes {
            let position = self.rng.random_range(0..self.symbols.len());
            self.symbols[position] = random_symbol(&mut self.rng);
        }
    }

    /// Whether the gallery still needs ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.compact || self.revealed_order.len() < self.entries.len()
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed_order.len()
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.hidden_count
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Index of the image shown by the slideshow.
    #[must_use]
    pub fn current_slide(&self) -> Option<usize> {
        self.revealed_order.get(self.slide).copied()
    }

    #[must_use]
    pub fn symbols(&self) -> String {
        self.symbols.iter().collect()
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        if self.compact {
            self.view_compact(ctx)
        } else {
            self.view_wall()
        }
    }

    fn view_wall(&self) -> Element<'_, Message> {
        let cells = self.entries.iter().enumerate().map(|(index, entry)| {
            let content: Element<'_, Message> = if entry.revealed && !entry.hidden {
                image::Image::new(entry.handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Cover)
                    .into()
            } else {
                text("").into()
            };

            mouse_area(
                Container::new(content)
                    .width(Length::Fixed(sizing::THUMBNAIL))
                    .height(Length::Fixed(sizing::THUMBNAIL)),
            )
            .on_enter(Message::Hovered(index))
            .into()
        });

        scrollable(
            Container::new(Row::with_children(cells).wrap())
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn view_compact<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let picture: Element<'a, Message> = match self.current_slide() {
            Some(index) => image::Image::new(self.entries[index].handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            None => Container::new(
                text(ctx.i18n.tr("image-missing"))
                    .size(typography::CAPTION)
                    .style(styles::text::muted),
            )
            .center(Length::Fill)
            .into(),
        };

        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .push(Container::new(picture).height(Length::Fill).align_y(Vertical::Center))
            .push(text(self.symbols()).size(typography::TITLE))
            .into()
    }
}

fn random_symbol(rng: &mut StdRng) -> char {
    SYMBOLS[rng.random_range(0..SYMBOLS.len())]
}
