// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events become orchestrator messages here: every key or mouse
//! press counts as a gesture, unconsumed key presses drive the view
//! shortcuts, and window events keep sizes and the camera in sync.

use super::Message;
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

/// Tick period while something animates.
pub const FAST_TICK: Duration = Duration::from_millis(16);

/// Tick period for slow deadlines (autoplay, toasts).
pub const SLOW_TICK: Duration = Duration::from_millis(100);

/// Routes native keyboard, mouse and window events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => Some(Message::KeyPressed(key)),
            event::Status::Captured => Some(Message::Gesture),
        },
        event::Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Message::Gesture),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::Focused) => Some(Message::WindowFocused),
        _ => None,
    })
}

/// Periodic clock. Runs fast while a view animates or the loading
/// indicator is up, slow otherwise.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    let period = if animating { FAST_TICK } else { SLOW_TICK };
    time::every(period).map(Message::Tick)
}
